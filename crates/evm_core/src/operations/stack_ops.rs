//! Stack-shape opcode handlers: POP, PUSH0..PUSH32, DUP1..DUP16, SWAP1..SWAP16.

use alloy::primitives::U256;
use primitives::word;

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError};

pub fn pop(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.pop()?;
    Ok(ControlFlow::Continue)
}

pub fn push0(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::ZERO)?;
    Ok(ControlFlow::Continue)
}

/// Reads the next `width` bytes from `code` (right-aligned into 256 bits),
/// pushes them, and lands PC just past the operand — `width + 1` total
/// bytes consumed including the opcode itself.
pub fn push_n(ctx: &mut ExecutionContext, width: usize) -> Result<ControlFlow, VmError> {
    let operand_start = ctx.pc + 1;
    let bytes = ctx.code_from(operand_start);
    let take = width.min(bytes.len());

    // Right-align: missing trailing bytes (code ran out) are treated as
    // zero, matching the EVM convention for PUSH operands that run past
    // the end of the code.
    let mut buf = [0u8; 32];
    buf[32 - width..32 - width + take].copy_from_slice(&bytes[..take]);
    let value = word::from_be_bytes(&buf[32 - width..]);

    ctx.stack.push(value)?;
    Ok(ControlFlow::Jump(ctx.pc + width + 1))
}

pub fn dup_n(ctx: &mut ExecutionContext, n: usize) -> Result<ControlFlow, VmError> {
    ctx.stack.dup(n)?;
    Ok(ControlFlow::Continue)
}

pub fn swap_n(ctx: &mut ExecutionContext, n: usize) -> Result<ControlFlow, VmError> {
    ctx.stack.swap(n)?;
    Ok(ControlFlow::Continue)
}
