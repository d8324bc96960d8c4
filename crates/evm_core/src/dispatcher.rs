//! The fetch-decode-execute loop.

use tracing::{trace, warn};

use crate::{
    context::ExecutionContext,
    control::ControlFlow,
    errors::VmError,
    gas,
    jump_tables::{build_jump_table, OpcodeFn},
    opcodes::Opcode,
    operations::stack_ops::{dup_n, push_n, swap_n},
};

pub struct Dispatcher {
    table: [OpcodeFn; 256],
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher {
            table: build_jump_table(),
        }
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `ctx` to completion: until it halts, reverts, or a handler
    /// fails. Returns `Ok(())` on a clean halt, or the error (including
    /// `Revert`) that ended execution.
    pub fn run(&self, ctx: &mut ExecutionContext) -> Result<(), VmError> {
        loop {
            if ctx.pc >= ctx.code.len() || !ctx.is_running() {
                break;
            }

            let op = ctx.current_opcode().expect("pc checked above");
            let charge = gas::cost(op);

            if !ctx.charge_gas(charge) {
                let err = VmError::out_of_gas(ctx.pc);
                ctx.last_error = Some(err.to_string());
                warn!(pc = ctx.pc, op, "out of gas");
                return Err(err);
            }

            let result = self.dispatch(ctx, op).map_err(|e| e.at(ctx.pc));

            match result {
                Ok(ControlFlow::Continue) => {
                    trace!(pc = ctx.pc, op, mnemonic = Opcode::mnemonic(op), "step");
                    ctx.pc += 1;
                }
                Ok(ControlFlow::Jump(dest)) => {
                    trace!(pc = ctx.pc, op, dest, "jump");
                    ctx.pc = dest;
                }
                Ok(ControlFlow::Stop) => {
                    trace!(pc = ctx.pc, op, "halt");
                    break;
                }
                Err(err) => {
                    ctx.last_error = Some(err.to_string());
                    warn!(pc = err.pc, kind = ?err.kind, "execution failed");
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn dispatch(&self, ctx: &mut ExecutionContext, op: u8) -> Result<ControlFlow, VmError> {
        if let Some(width) = Opcode::push_width(op) {
            return push_n(ctx, width as usize);
        }
        if let Some(n) = Opcode::dup_n(op) {
            return dup_n(ctx, n);
        }
        if let Some(n) = Opcode::swap_n(op) {
            return swap_n(ctx, n);
        }
        self.table[op as usize](ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    /// Scenario 1: `60 05 60 03 01 60 00 52 60 20 60 00 f3` -> returns 8.
    #[test]
    fn addition_returning_eight() {
        let code = hex_code("60 05 60 03 01 60 00 52 60 20 60 00 f3");
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        Dispatcher::new().run(&mut ctx).unwrap();
        assert_eq!(U256::from_be_slice(&ctx.return_data), U256::from(8u64));
        assert!(ctx.gas_used(100_000) > 0);
    }

    /// Scenario 2: multiplication returning 42.
    #[test]
    fn multiplication_returning_forty_two() {
        let code = hex_code("60 07 60 06 02 60 00 52 60 20 60 00 f3");
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        Dispatcher::new().run(&mut ctx).unwrap();
        assert_eq!(U256::from_be_slice(&ctx.return_data), U256::from(42u64));
    }

    /// Scenario 3: storage write then read returns 42, and storage holds
    /// the mapping 1 -> 42.
    #[test]
    fn storage_write_then_read() {
        let code = hex_code("60 2A 60 01 55 60 01 54 60 00 52 60 20 60 00 f3");
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        Dispatcher::new().run(&mut ctx).unwrap();
        assert_eq!(U256::from_be_slice(&ctx.return_data), U256::from(42u64));
        assert_eq!(ctx.storage.load(U256::from(1u64)), U256::from(42u64));
    }

    /// Scenario 4: conditional jump taken -> 55 (0x37), proving the
    /// untaken branch's value (42) is never observed.
    #[test]
    fn conditional_jump_taken() {
        let code = hex_code(
            "60 01 60 0F 57 60 2A 60 00 52 60 20 60 00 f3 5B 60 37 60 00 52 60 20 60 00 f3",
        );
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        Dispatcher::new().run(&mut ctx).unwrap();
        assert_eq!(U256::from_be_slice(&ctx.return_data), U256::from(0x37u64));
    }

    /// Scenario 5: conditional jump not taken -> 42.
    #[test]
    fn conditional_jump_not_taken() {
        let code = hex_code(
            "60 00 60 0A 57 60 2A 60 00 52 60 20 60 00 f3 5B 60 37 60 00 52 60 20 60 00 f3",
        );
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        Dispatcher::new().run(&mut ctx).unwrap();
        assert_eq!(U256::from_be_slice(&ctx.return_data), U256::from(42u64));
    }

    /// Scenario 6: selector-dispatch runtime for `add(uint256,uint256)`.
    /// Calldata is `0x771602f7 ++ be256(5) ++ be256(3)`; the bytecode
    /// extracts the selector via `shr(224, calldataload(0))`, compares it
    /// against the known selector, and on a match loads both arguments and
    /// returns their sum.
    #[test]
    fn selector_dispatch_add_five_plus_three() {
        let code = hex_code(
            "60 00 35 60 e0 1c 63 77 16 02 f7 14 60 14 57 60 00 60 00 fd \
             5b 60 04 35 60 24 35 01 60 00 52 60 20 60 00 f3",
        );

        let mut call_data = Vec::new();
        call_data.extend_from_slice(&[0x77, 0x16, 0x02, 0xf7]);
        call_data.extend_from_slice(&U256::from(5u64).to_be_bytes::<32>());
        call_data.extend_from_slice(&U256::from(3u64).to_be_bytes::<32>());

        let mut ctx = ExecutionContext::new(&code, &call_data, 100_000);
        Dispatcher::new().run(&mut ctx).unwrap();
        assert_eq!(U256::from_be_slice(&ctx.return_data), U256::from(8u64));
    }

    /// Scenario 7: jump to PC 1, which is not a JUMPDEST -> InvalidJump at
    /// PC 2 (the JUMP opcode's own position).
    #[test]
    fn invalid_jump_target() {
        let code = hex_code("60 01 56");
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        let err = Dispatcher::new().run(&mut ctx).unwrap_err();
        assert_eq!(err.kind, crate::errors::VmErrorKind::InvalidJump);
        assert_eq!(err.pc, 2);
    }

    /// Scenario 8: ADD with an empty stack -> StackUnderflow at PC 0.
    #[test]
    fn stack_underflow_on_empty_add() {
        let code = hex_code("01");
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        let err = Dispatcher::new().run(&mut ctx).unwrap_err();
        assert_eq!(err.kind, crate::errors::VmErrorKind::StackUnderflow);
    }

    /// A stack error surfacing after the first opcode must report the PC it
    /// actually occurred at, not PC 0: PUSH1 0; POP; POP underflows on the
    /// second POP, at PC 3.
    #[test]
    fn stack_underflow_reports_its_own_pc() {
        let code = hex_code("60 00 50 50");
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        let err = Dispatcher::new().run(&mut ctx).unwrap_err();
        assert_eq!(err.kind, crate::errors::VmErrorKind::StackUnderflow);
        assert_eq!(err.pc, 3);
    }

    /// Scenario 9: any code executed with gas_limit = 0 -> OutOfGas at PC 0.
    #[test]
    fn out_of_gas_with_zero_limit() {
        let code = hex_code("60 01");
        let mut ctx = ExecutionContext::new(&code, &[], 0);
        let err = Dispatcher::new().run(&mut ctx).unwrap_err();
        assert_eq!(err.kind, crate::errors::VmErrorKind::OutOfGas);
        assert_eq!(err.pc, 0);
    }

    /// Scenario 10: REVERT propagates the marker bytes written just before it.
    #[test]
    fn revert_propagates_marker_bytes() {
        // PUSH1 0x63 MSTORE8 offset=0 -> marker 0x63 at memory[0]; REVERT(0, 1)
        let code = hex_code("60 63 60 00 53 60 01 60 00 fd");
        let mut ctx = ExecutionContext::new(&code, &[], 100_000);
        let err = Dispatcher::new().run(&mut ctx).unwrap_err();
        assert_eq!(err.kind, crate::errors::VmErrorKind::Revert);
        assert_eq!(ctx.return_data, vec![0x63]);
    }

    /// Test helper: turns a whitespace-separated hex-byte string into a
    /// `Vec<u8>` so scenarios can be written the way spec.md shows them.
    fn hex_code(spaced_hex: &str) -> Vec<u8> {
        spaced_hex
            .split_whitespace()
            .map(|b| u8::from_str_radix(b, 16).unwrap())
            .collect()
    }
}
