//! Comparison, bitwise logic, and shift opcode handlers.

use alloy::primitives::{I256, U256};
use primitives::word;

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError};

fn push_bool(ctx: &mut ExecutionContext, value: bool) -> Result<(), VmError> {
    ctx.stack.push(if value { U256::from(1u64) } else { U256::ZERO })?;
    Ok(())
}

/// `LT`: pop top then next, push 1 if top < next.
pub fn lt(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let top = ctx.stack.pop()?;
    let next = ctx.stack.pop()?;
    push_bool(ctx, word::lt(top, next))?;
    Ok(ControlFlow::Continue)
}

/// `GT`: pop top then next, push 1 if top > next.
pub fn gt(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let top = ctx.stack.pop()?;
    let next = ctx.stack.pop()?;
    push_bool(ctx, word::gt(top, next))?;
    Ok(ControlFlow::Continue)
}

/// `SLT`: signed less-than.
pub fn slt(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let top = I256::from_raw(ctx.stack.pop()?);
    let next = I256::from_raw(ctx.stack.pop()?);
    push_bool(ctx, top < next)?;
    Ok(ControlFlow::Continue)
}

/// `SGT`: signed greater-than.
pub fn sgt(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let top = I256::from_raw(ctx.stack.pop()?);
    let next = I256::from_raw(ctx.stack.pop()?);
    push_bool(ctx, top > next)?;
    Ok(ControlFlow::Continue)
}

pub fn eq(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let top = ctx.stack.pop()?;
    let next = ctx.stack.pop()?;
    push_bool(ctx, top == next)?;
    Ok(ControlFlow::Continue)
}

pub fn is_zero(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let value = ctx.stack.pop()?;
    push_bool(ctx, word::is_zero(value))?;
    Ok(ControlFlow::Continue)
}

pub fn and(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::and(a, b))?;
    Ok(ControlFlow::Continue)
}

pub fn or(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::or(a, b))?;
    Ok(ControlFlow::Continue)
}

pub fn xor(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::xor(a, b))?;
    Ok(ControlFlow::Continue)
}

pub fn not(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    ctx.stack.push(word::not(a))?;
    Ok(ControlFlow::Continue)
}

pub fn byte(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let index = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;
    ctx.stack.push(word::byte(index, value))?;
    Ok(ControlFlow::Continue)
}

/// `SHL`: pops `(shift, value)` with shift on top, pushes `value << shift`.
pub fn shl(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let shift = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;
    ctx.stack.push(word::shl(shift, value))?;
    Ok(ControlFlow::Continue)
}

/// `SHR`: pops `(shift, value)` with shift on top, pushes `value >> shift`.
pub fn shr(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let shift = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;
    ctx.stack.push(word::shr(shift, value))?;
    Ok(ControlFlow::Continue)
}

/// `SAR`: arithmetic right shift, pops `(shift, value)` with shift on top.
pub fn sar(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let shift = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;
    ctx.stack.push(word::sar(shift, value))?;
    Ok(ControlFlow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_stack(values: &[U256]) -> ExecutionContext<'static> {
        let mut ctx = ExecutionContext::new(&[], &[], 1_000_000);
        for v in values {
            ctx.stack.push(*v).unwrap();
        }
        ctx
    }

    #[test]
    fn lt_compares_top_against_next() {
        // stack [2, 3] (top=3) -> LT pops top=3, next=2 -> 3<2 is false
        let mut ctx = ctx_with_stack(&[U256::from(2u64), U256::from(3u64)]);
        lt(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::ZERO);
    }

    #[test]
    fn lt_true_case() {
        // stack [3, 2] (top=2) -> top < next -> 2 < 3 -> true
        let mut ctx = ctx_with_stack(&[U256::from(3u64), U256::from(2u64)]);
        lt(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(1u64));
    }

    #[test]
    fn iszero_example() {
        let mut ctx = ctx_with_stack(&[U256::ZERO]);
        is_zero(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(1u64));
    }

    #[test]
    fn and_or_xor_not_round_trip() {
        let mut ctx = ctx_with_stack(&[U256::from(0b0110u64), U256::from(0b1010u64)]);
        and(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(0b0010u64));
    }

    #[test]
    fn byte_extracts_most_significant_first() {
        let value = U256::from(0x0102_0304u64);
        let mut ctx = ctx_with_stack(&[value, U256::from(31u64)]);
        byte(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(0x04u64));
    }

    #[test]
    fn shl_and_shr_pop_shift_first() {
        let mut ctx = ctx_with_stack(&[U256::from(1u64), U256::from(4u64)]);
        shl(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(16u64));
    }

    #[test]
    fn selector_extraction_via_shr() {
        let selector = 0x771602f7u64;
        let word_value = U256::from(selector) << 224u32;
        let mut ctx = ctx_with_stack(&[word_value, U256::from(224u64)]);
        shr(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(selector));
    }
}
