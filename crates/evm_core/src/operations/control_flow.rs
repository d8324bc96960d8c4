//! Control-flow opcode handlers: JUMPDEST, JUMP, JUMPI, PC, CODESIZE.

use alloy::primitives::U256;

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError, opcodes::Opcode};

/// Validates `dest` as a jump target: it must be within code bounds and the
/// byte there must be `JUMPDEST`.
fn validate_jump_dest(ctx: &ExecutionContext, dest: usize) -> Result<(), VmError> {
    if ctx.code.get(dest).copied() != Some(Opcode::JUMPDEST as u8) {
        return Err(VmError::invalid_jump(ctx.pc));
    }
    Ok(())
}

fn dest_usize(ctx: &ExecutionContext, value: U256) -> Result<usize, VmError> {
    usize::try_from(value).map_err(|_| VmError::invalid_jump(ctx.pc))
}

/// No stack effect, no PC modification beyond the normal +1. Marks a legal
/// jump target.
pub fn jumpdest(_ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    Ok(ControlFlow::Continue)
}

pub fn jump(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let dest = ctx.stack.pop()?;
    let dest = dest_usize(ctx, dest)?;
    validate_jump_dest(ctx, dest)?;
    Ok(ControlFlow::Jump(dest))
}

/// Pops destination first, then condition, matching the stack order a
/// compiler emits for `push cond; push dest; JUMPI`.
pub fn jumpi(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let dest = ctx.stack.pop()?;
    let cond = ctx.stack.pop()?;

    if cond.is_zero() {
        return Ok(ControlFlow::Continue);
    }

    let dest = dest_usize(ctx, dest)?;
    validate_jump_dest(ctx, dest)?;
    Ok(ControlFlow::Jump(dest))
}

pub fn pc(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::from(ctx.pc as u64))?;
    Ok(ControlFlow::Continue)
}

pub fn codesize(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    ctx.stack.push(U256::from(ctx.code.len() as u64))?;
    Ok(ControlFlow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_to_jumpdest_succeeds() {
        let code = [Opcode::JUMPDEST as u8]; // dest 0 is a JUMPDEST
        let mut ctx = ExecutionContext::new(&code, &[], 1_000_000);
        ctx.stack.push(U256::ZERO).unwrap();
        assert_eq!(jump(&mut ctx).unwrap(), ControlFlow::Jump(0));
    }

    #[test]
    fn jump_to_non_jumpdest_fails() {
        let code = [Opcode::ADD as u8, Opcode::JUMPDEST as u8];
        let mut ctx = ExecutionContext::new(&code, &[], 1_000_000);
        ctx.stack.push(U256::ZERO).unwrap(); // dest 0 is ADD, not JUMPDEST
        assert!(jump(&mut ctx).is_err());
    }

    #[test]
    fn jumpi_not_taken_advances_normally() {
        let code = [Opcode::JUMPDEST as u8];
        let mut ctx = ExecutionContext::new(&code, &[], 1_000_000);
        ctx.stack.push(U256::ZERO).unwrap(); // dest
        ctx.stack.push(U256::ZERO).unwrap(); // cond (false) on top
        assert_eq!(jumpi(&mut ctx).unwrap(), ControlFlow::Continue);
    }

    #[test]
    fn jumpi_taken_jumps() {
        let code = [Opcode::JUMPDEST as u8];
        let mut ctx = ExecutionContext::new(&code, &[], 1_000_000);
        ctx.stack.push(U256::ZERO).unwrap(); // dest
        ctx.stack.push(U256::from(1u64)).unwrap(); // cond (true) on top
        assert_eq!(jumpi(&mut ctx).unwrap(), ControlFlow::Jump(0));
    }

    #[test]
    fn pc_pushes_current_counter() {
        let code = [0u8; 5];
        let mut ctx = ExecutionContext::new(&code, &[], 1_000_000);
        ctx.pc = 3;
        pc(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(3u64));
    }

    #[test]
    fn codesize_pushes_code_length() {
        let code = [0u8; 7];
        let mut ctx = ExecutionContext::new(&code, &[], 1_000_000);
        codesize(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(7u64));
    }
}
