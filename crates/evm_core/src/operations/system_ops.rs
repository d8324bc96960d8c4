//! Halting and misc system opcode handlers: STOP, RETURN, REVERT, INVALID,
//! plus the supplemental SHA3, MSIZE, GAS.

use alloy::primitives::U256;
use sha3::{Digest, Keccak256};

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError};

fn as_usize(ctx: &ExecutionContext, value: U256) -> Result<usize, VmError> {
    usize::try_from(value).map_err(|_| VmError::memory_out_of_bounds(ctx.pc))
}

pub fn stop(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.halted = true;
    Ok(ControlFlow::Stop)
}

/// `RETURN(offset, length)`: grows memory to `offset+length`, copies that
/// slice into `return_data`, and halts successfully.
pub fn ret(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let offset = ctx.stack.pop()?;
    let length = ctx.stack.pop()?;
    let offset = as_usize(ctx, offset)?;
    let length = as_usize(ctx, length)?;

    ctx.memory.ensure_size(offset + length);
    ctx.return_data = ctx.memory_slice(offset, length);
    ctx.halted = true;
    Ok(ControlFlow::Stop)
}

/// `REVERT(offset, length)`: same memory handling as `RETURN`, but reports
/// the `Revert` error to the caller with the same bytes as its reason.
pub fn revert(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let offset = ctx.stack.pop()?;
    let length = ctx.stack.pop()?;
    let offset = as_usize(ctx, offset)?;
    let length = as_usize(ctx, length)?;

    ctx.memory.ensure_size(offset + length);
    ctx.return_data = ctx.memory_slice(offset, length);
    ctx.reverted = true;
    Err(VmError::revert(ctx.pc))
}

/// Any unknown byte or the explicit `INVALID` opcode.
pub fn invalid(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    Err(VmError::invalid_opcode(ctx.pc))
}

/// `SHA3`/`KECCAK256(offset, length)`: hashes a memory region.
pub fn sha3(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let offset = ctx.stack.pop()?;
    let length = ctx.stack.pop()?;
    let offset = as_usize(ctx, offset)?;
    let length = as_usize(ctx, length)?;

    ctx.memory.ensure_size(offset + length);
    let data = ctx.memory_slice(offset, length);
    let digest = Keccak256::digest(&data);
    ctx.stack.push(U256::from_be_slice(&digest))?;
    Ok(ControlFlow::Continue)
}

pub fn msize(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::from(ctx.memory.len() as u64))?;
    Ok(ControlFlow::Continue)
}

/// Pushes the gas remaining *after* this opcode's own charge.
pub fn gas(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::from(ctx.gas_remaining))?;
    Ok(ControlFlow::Continue)
}
