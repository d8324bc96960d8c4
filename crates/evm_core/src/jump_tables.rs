//! Builds the dispatch table for opcodes whose handler doesn't need the
//! opcode byte itself. PUSH/DUP/SWAP are parameterized by `n` and are
//! dispatched separately in [`crate::dispatcher`].

use crate::{
    context::ExecutionContext,
    control::ControlFlow,
    errors::VmError,
    opcodes::Opcode,
    operations::{
        ariths::*, calldata_ops::*, compare::*, control_flow::*, memory_ops::*, stack_ops::*, storage_ops::*,
        system_ops::*,
    },
};

pub type OpcodeFn = fn(&mut ExecutionContext) -> Result<ControlFlow, VmError>;

pub fn build_jump_table() -> [OpcodeFn; 256] {
    let mut table: [OpcodeFn; 256] = [invalid as OpcodeFn; 256];

    table[Opcode::STOP as usize] = stop;
    table[Opcode::ADD as usize] = add;
    table[Opcode::MUL as usize] = mul;
    table[Opcode::SUB as usize] = sub;
    table[Opcode::DIV as usize] = div;
    table[Opcode::SDIV as usize] = sdiv;
    table[Opcode::MOD as usize] = modulo;
    table[Opcode::SMOD as usize] = smod;
    table[Opcode::ADDMOD as usize] = addmod;
    table[Opcode::MULMOD as usize] = mulmod;
    table[Opcode::EXP as usize] = exp;
    table[Opcode::SIGNEXTEND as usize] = signextend;

    table[Opcode::LT as usize] = lt;
    table[Opcode::GT as usize] = gt;
    table[Opcode::SLT as usize] = slt;
    table[Opcode::SGT as usize] = sgt;
    table[Opcode::EQ as usize] = eq;
    table[Opcode::ISZERO as usize] = is_zero;
    table[Opcode::AND as usize] = and;
    table[Opcode::OR as usize] = or;
    table[Opcode::XOR as usize] = xor;
    table[Opcode::NOT as usize] = not;
    table[Opcode::BYTE as usize] = byte;
    table[Opcode::SHL as usize] = shl;
    table[Opcode::SHR as usize] = shr;
    table[Opcode::SAR as usize] = sar;

    table[Opcode::SHA3 as usize] = sha3;

    table[Opcode::CALLDATALOAD as usize] = calldataload;
    table[Opcode::CALLDATASIZE as usize] = calldatasize;
    table[Opcode::CALLDATACOPY as usize] = calldatacopy;
    table[Opcode::CODESIZE as usize] = codesize;
    table[Opcode::CODECOPY as usize] = codecopy;
    table[Opcode::CALLVALUE as usize] = callvalue;
    table[Opcode::RETURNDATASIZE as usize] = returndatasize;
    table[Opcode::RETURNDATACOPY as usize] = returndatacopy;

    table[Opcode::POP as usize] = pop;
    table[Opcode::MLOAD as usize] = mload;
    table[Opcode::MSTORE as usize] = mstore;
    table[Opcode::MSTORE8 as usize] = mstore8;
    table[Opcode::SLOAD as usize] = sload;
    table[Opcode::SSTORE as usize] = sstore;
    table[Opcode::JUMP as usize] = jump;
    table[Opcode::JUMPI as usize] = jumpi;
    table[Opcode::PC as usize] = pc;
    table[Opcode::MSIZE as usize] = msize;
    table[Opcode::GAS as usize] = gas;
    table[Opcode::JUMPDEST as usize] = jumpdest;
    table[Opcode::PUSH0 as usize] = push0;

    table[Opcode::RETURN as usize] = ret;
    table[Opcode::REVERT as usize] = revert;
    table[Opcode::INVALID as usize] = invalid;

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_opcodes_default_to_invalid() {
        let table = build_jump_table();
        // 0x0c is reserved in the arithmetic range and never assigned.
        let mut ctx = ExecutionContext::new(&[0x0c], &[], 1_000_000);
        assert!(table[0x0c](&mut ctx).is_err());
    }

    #[test]
    fn stop_is_wired_up() {
        let table = build_jump_table();
        let mut ctx = ExecutionContext::new(&[Opcode::STOP as u8], &[], 1_000_000);
        table[Opcode::STOP as usize](&mut ctx).unwrap();
        assert!(ctx.halted);
    }
}
