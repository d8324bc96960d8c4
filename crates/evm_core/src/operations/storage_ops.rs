//! Storage opcode handlers: SLOAD, SSTORE.

use crate::{context::ExecutionContext, control::ControlFlow, errors::VmError};

pub fn sload(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let key = ctx.stack.pop()?;
    let value = ctx.storage.load(key);
    ctx.stack.push(value)?;
    Ok(ControlFlow::Continue)
}

pub fn sstore(ctx: &mut ExecutionContext) -> Result<ControlFlow, VmError> {
    let key = ctx.stack.pop()?;
    let value = ctx.stack.pop()?;
    ctx.storage.store(key, value);
    Ok(ControlFlow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn sstore_then_sload_round_trips() {
        let mut ctx = ExecutionContext::new(&[], &[], 1_000_000);
        ctx.stack.push(U256::from(42u64)).unwrap(); // value
        ctx.stack.push(U256::from(1u64)).unwrap(); // key
        sstore(&mut ctx).unwrap();

        ctx.stack.push(U256::from(1u64)).unwrap();
        sload(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(42u64));
    }

    #[test]
    fn sload_missing_key_is_zero() {
        let mut ctx = ExecutionContext::new(&[], &[], 1_000_000);
        ctx.stack.push(U256::from(99u64)).unwrap();
        sload(&mut ctx).unwrap();
        assert_eq!(ctx.stack.pop().unwrap(), U256::ZERO);
    }
}
