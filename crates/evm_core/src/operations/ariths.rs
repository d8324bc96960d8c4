//! Arithmetic opcode handlers.
//!
//! ref: https://www.evm.codes/

use alloy::primitives::{I256, U256};
use primitives::word;

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError};

pub fn add(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::add(a, b))?;
    Ok(ControlFlow::Continue)
}

pub fn sub(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::sub(a, b))?;
    Ok(ControlFlow::Continue)
}

pub fn mul(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::mul(a, b))?;
    Ok(ControlFlow::Continue)
}

/// Division by zero yields zero rather than failing (EVM convention).
pub fn div(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::div(a, b))?;
    Ok(ControlFlow::Continue)
}

pub fn modulo(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    ctx.stack.push(word::rem(a, b))?;
    Ok(ControlFlow::Continue)
}

/// Signed division, two's-complement over 256 bits. Division by zero pushes
/// zero per the EVM spec.
pub fn sdiv(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;

    let a_signed = I256::from_raw(a);
    let b_signed = I256::from_raw(b);

    let result = if b_signed.is_zero() {
        U256::ZERO
    } else {
        a_signed.wrapping_div(b_signed).into_raw()
    };
    ctx.stack.push(result)?;
    Ok(ControlFlow::Continue)
}

/// Signed modulo, two's-complement over 256 bits.
pub fn smod(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;

    let a_signed = I256::from_raw(a);
    let b_signed = I256::from_raw(b);

    let result = if b_signed.is_zero() {
        U256::ZERO
    } else {
        a_signed.wrapping_rem(b_signed).into_raw()
    };
    ctx.stack.push(result)?;
    Ok(ControlFlow::Continue)
}

/// `(a + b) % n`. Zero modulus yields zero.
///
/// Approximation: the addition wraps at 256 bits before the reduction,
/// the same documented tradeoff as `word::mul`'s high-half approximation,
/// rather than carrying a full 257-bit intermediate.
pub fn addmod(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    let n = ctx.stack.pop()?;

    let result = if n.is_zero() {
        U256::ZERO
    } else {
        a.wrapping_add(b) % n
    };
    ctx.stack.push(result)?;
    Ok(ControlFlow::Continue)
}

/// `(a * b) % n`. Zero modulus yields zero.
pub fn mulmod(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let a = ctx.stack.pop()?;
    let b = ctx.stack.pop()?;
    let n = ctx.stack.pop()?;

    let result = if n.is_zero() {
        U256::ZERO
    } else {
        word::mul(a, b) % n
    };
    ctx.stack.push(result)?;
    Ok(ControlFlow::Continue)
}

/// `base ** exponent`, wrapping modulo 2^256. No dynamic gas for the
/// exponent's byte length is charged (documented simplification, see
/// the Non-goals around dynamic gas).
pub fn exp(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let base = ctx.stack.pop()?;
    let exponent = ctx.stack.pop()?;
    ctx.stack.push(base.pow(exponent))?;
    Ok(ControlFlow::Continue)
}

/// Sign-extends `value`, treating it as a signed integer occupying
/// `size_in_byte + 1` bytes.
pub fn signextend(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let size_in_byte = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;

    let result = if size_in_byte >= U256::from(31u64) {
        value
    } else {
        let byte_index = size_in_byte.as_limbs()[0] as usize;
        let sign_bit_pos = byte_index * 8 + 7;
        let sign_bit_set = ((value >> sign_bit_pos) & U256::from(1u64)) == U256::from(1u64);

        let mask = (U256::from(1u64) << (sign_bit_pos + 1)) - U256::from(1u64);
        if sign_bit_set {
            value | !mask
        } else {
            value & mask
        }
    };
    ctx.stack.push(result)?;
    Ok(ControlFlow::Continue)
}
