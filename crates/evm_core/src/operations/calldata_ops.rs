//! Call-data and code-copy opcode handlers.

use alloy::primitives::U256;

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError};

fn as_usize(ctx: &ExecutionContext, value: U256) -> Result<usize, VmError> {
    usize::try_from(value).map_err(|_| VmError::memory_out_of_bounds(ctx.pc))
}

/// `CALLDATALOAD(offset)`: pushes the 32 bytes of call-data at `offset`,
/// zero-padding past the end.
pub fn calldataload(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let offset = ctx.stack.pop()?;
    let offset = as_usize(ctx, offset)?;

    let mut buf = [0u8; 32];
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = ctx.call_data.get(offset + i).copied().unwrap_or(0);
    }
    ctx.stack.push(U256::from_be_bytes(buf))?;
    Ok(ControlFlow::Continue)
}

pub fn calldatasize(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::from(ctx.call_data.len() as u64))?;
    Ok(ControlFlow::Continue)
}

/// `CALLDATACOPY(mem_offset, data_offset, length)`: copies call-data into
/// memory, zero-padding source bytes past the end.
pub fn calldatacopy(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let mem_offset = ctx.stack.pop()?;
    let data_offset = ctx.stack.pop()?;
    let length = ctx.stack.pop()?;

    let mem_offset = as_usize(ctx, mem_offset)?;
    let data_offset = as_usize(ctx, data_offset)?;
    let length = as_usize(ctx, length)?;

    let call_data = ctx.call_data;
    ctx.memory.copy_from(mem_offset, call_data, data_offset, length);
    Ok(ControlFlow::Continue)
}

/// `CODECOPY(mem_offset, code_offset, length)`: copies from `code` into
/// memory, analogous to `CALLDATACOPY`. Used by compiler-emitted
/// constructors to unpack runtime bytecode at deployment time.
pub fn codecopy(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let mem_offset = ctx.stack.pop()?;
    let code_offset = ctx.stack.pop()?;
    let length = ctx.stack.pop()?;

    let mem_offset = as_usize(ctx, mem_offset)?;
    let code_offset = as_usize(ctx, code_offset)?;
    let length = as_usize(ctx, length)?;

    let code = ctx.code;
    ctx.memory.copy_from(mem_offset, code, code_offset, length);
    Ok(ControlFlow::Continue)
}

/// No value-transfer semantics in the core: always pushes zero.
pub fn callvalue(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::ZERO)?;
    Ok(ControlFlow::Continue)
}

/// No sub-call support in the core: always pushes zero.
pub fn returndatasize(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::ZERO)?;
    Ok(ControlFlow::Continue)
}

/// No sub-call support in the core: `return_data` is only ever populated
/// by this execution's own terminal RETURN/REVERT, so any copy here reads
/// the zero-length buffer and zero-pads.
pub fn returndatacopy(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let mem_offset = ctx.stack.pop()?;
    let data_offset = ctx.stack.pop()?;
    let length = ctx.stack.pop()?;

    let mem_offset = as_usize(ctx, mem_offset)?;
    let data_offset = as_usize(ctx, data_offset)?;
    let length = as_usize(ctx, length)?;

    let return_data = ctx.return_data.clone();
    ctx.memory.copy_from(mem_offset, &return_data, data_offset, length);
    Ok(ControlFlow::Continue)
}
