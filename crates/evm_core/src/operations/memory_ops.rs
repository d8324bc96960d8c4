//! Memory opcode handlers: MLOAD, MSTORE, MSTORE8.

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError};

fn offset_usize(ctx: &mut ExecutionContext, value: alloy::primitives::U256) -> Result<usize, VmError> {
    usize::try_from(value).map_err(|_| VmError::memory_out_of_bounds(ctx.pc))
}

/// `MLOAD(offset)`: pops offset, pushes the 32-byte word at that offset,
/// growing memory as needed.
pub fn mload(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let offset = ctx.stack.pop()?;
    let offset = offset_usize(ctx, offset)?;
    let word = ctx.memory.load32(offset);
    ctx.stack.push(word)?;
    Ok(ControlFlow::Continue)
}

/// `MSTORE(offset, value)`: pops offset then value, writes the 32-byte word.
pub fn mstore(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let offset = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;
    let offset = offset_usize(ctx, offset)?;
    ctx.memory.store32(offset, value);
    Ok(ControlFlow::Continue)
}

/// `MSTORE8(offset, value)`: pops offset then value, writes only the low byte.
pub fn mstore8(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let offset = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;
    let offset = offset_usize(ctx, offset)?;
    let low_byte = value.as_limbs()[0] as u8;
    ctx.memory.store8(offset, low_byte);
    Ok(ControlFlow::Continue)
}
