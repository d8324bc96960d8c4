//! 256-bit word arithmetic.
//!
//! The EVM's native operand is a 256-bit unsigned integer. `alloy::primitives::U256`
//! already gives us that natively, so this module is a thin set of free functions
//! that pin down the exact bytecode contract (wrapping semantics, division-by-zero
//! behavior, shift saturation) rather than a reimplementation of wide arithmetic.

use alloy::primitives::U256;

pub fn add(a: U256, b: U256) -> U256 {
    a.wrapping_add(b)
}

pub fn sub(a: U256, b: U256) -> U256 {
    a.wrapping_sub(b)
}

/// Exact 256-bit wrapping product. `alloy`'s native `U256` makes the
/// high-half-nonzero approximation some bytecode interpreters document as a
/// limitation unnecessary; we give the precise result instead.
pub fn mul(a: U256, b: U256) -> U256 {
    a.wrapping_mul(b)
}

/// EVM convention: division by zero yields zero rather than failing.
pub fn div(a: U256, b: U256) -> U256 {
    if b.is_zero() {
        U256::ZERO
    } else {
        a.wrapping_div(b)
    }
}

/// EVM convention: modulo by zero yields zero rather than failing.
pub fn rem(a: U256, b: U256) -> U256 {
    if b.is_zero() {
        U256::ZERO
    } else {
        a.wrapping_rem(b)
    }
}

pub fn and(a: U256, b: U256) -> U256 {
    a & b
}

pub fn or(a: U256, b: U256) -> U256 {
    a | b
}

pub fn xor(a: U256, b: U256) -> U256 {
    a ^ b
}

pub fn not(a: U256) -> U256 {
    !a
}

pub fn is_zero(a: U256) -> bool {
    a.is_zero()
}

pub fn lt(a: U256, b: U256) -> bool {
    a < b
}

pub fn gt(a: U256, b: U256) -> bool {
    a > b
}

/// Logical left shift. Shifting by 256 or more yields zero.
pub fn shl(shift: U256, value: U256) -> U256 {
    if shift >= U256::from(256u64) {
        return U256::ZERO;
    }
    let n = shift.as_limbs()[0] as usize;
    value << n
}

/// Logical right shift. Shifting by 256 or more yields zero.
pub fn shr(shift: U256, value: U256) -> U256 {
    if shift >= U256::from(256u64) {
        return U256::ZERO;
    }
    let n = shift.as_limbs()[0] as usize;
    value >> n
}

/// Arithmetic right shift. The sign bit is bit 255 (the high bit of the high
/// half); shifts of 256 or more yield all-ones if the sign bit is set, else
/// zero.
pub fn sar(shift: U256, value: U256) -> U256 {
    let sign_set = !(value >> 255usize).is_zero();

    if shift >= U256::from(256u64) {
        return if sign_set { U256::MAX } else { U256::ZERO };
    }

    let n = shift.as_limbs()[0] as usize;
    if n == 0 {
        return value;
    }

    let shifted = value >> n;
    if sign_set {
        let fill = U256::MAX << (256 - n);
        shifted | fill
    } else {
        shifted
    }
}

/// Selects byte `index` (0 = most significant) out of the 32-byte big-endian
/// representation of `value`. Any index >= 32 yields zero.
pub fn byte(index: U256, value: U256) -> U256 {
    if index >= U256::from(32u64) {
        return U256::ZERO;
    }
    let i = index.as_limbs()[0] as usize;
    U256::from(value.to_be_bytes::<32>()[i])
}

pub fn to_be_bytes(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}

/// Parses up to 32 bytes as a big-endian integer, right-aligning shorter
/// slices (as if the missing leading bytes were zero).
pub fn from_be_bytes(bytes: &[u8]) -> U256 {
    U256::from_be_slice(bytes)
}
