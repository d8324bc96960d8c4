//! Static per-opcode gas schedule. The single source of truth for what an
//! opcode costs; the dispatcher charges gas before dispatching, and the
//! remaining-gas return value makes this table observable to callers.

use crate::opcodes::Opcode;

pub const ZERO: u64 = 0;
pub const BASE: u64 = 2;
pub const VERYLOW: u64 = 3;
pub const LOW: u64 = 5;
pub const MID: u64 = 8;
pub const JUMPDEST: u64 = 1;
pub const EXP: u64 = 10;
pub const SLOAD: u64 = 5000;
pub const SSTORE: u64 = 20000;

/// Static gas charge for opcode byte `op`.
pub fn cost(op: u8) -> u64 {
    if Opcode::push_width(op).is_some() || Opcode::dup_n(op).is_some() || Opcode::swap_n(op).is_some() {
        return VERYLOW;
    }

    match op {
        x if x == Opcode::STOP as u8 || x == Opcode::RETURN as u8 || x == Opcode::REVERT as u8 => ZERO,

        x if x == Opcode::ADD as u8
            || x == Opcode::SUB as u8
            || x == Opcode::LT as u8
            || x == Opcode::GT as u8
            || x == Opcode::SLT as u8
            || x == Opcode::SGT as u8
            || x == Opcode::EQ as u8
            || x == Opcode::ISZERO as u8
            || x == Opcode::AND as u8
            || x == Opcode::OR as u8
            || x == Opcode::XOR as u8
            || x == Opcode::NOT as u8
            || x == Opcode::BYTE as u8
            || x == Opcode::SHL as u8
            || x == Opcode::SHR as u8
            || x == Opcode::SAR as u8
            || x == Opcode::MLOAD as u8
            || x == Opcode::MSTORE as u8
            || x == Opcode::MSTORE8 as u8 =>
        {
            VERYLOW
        }

        x if x == Opcode::MUL as u8
            || x == Opcode::DIV as u8
            || x == Opcode::SDIV as u8
            || x == Opcode::MOD as u8
            || x == Opcode::SMOD as u8 =>
        {
            LOW
        }

        // ADDMOD/MULMOD/SIGNEXTEND are not in spec.md's enumerated gas
        // families; they fall through to the BASE default below rather
        // than borrowing real-EVM tier costs.
        x if x == Opcode::JUMP as u8 => MID,
        x if x == Opcode::JUMPI as u8 => MID,
        x if x == Opcode::EXP as u8 => EXP,
        x if x == Opcode::JUMPDEST as u8 => JUMPDEST,
        x if x == Opcode::SLOAD as u8 => SLOAD,
        x if x == Opcode::SSTORE as u8 => SSTORE,
        x if x == Opcode::PC as u8 || x == Opcode::POP as u8 || x == Opcode::PUSH0 as u8 => BASE,

        _ => BASE,
    }
}
