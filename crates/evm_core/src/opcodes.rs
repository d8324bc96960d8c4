//! Opcode identifiers and their mnemonics.
//!
//! Values mirror the standard Solidity-family EVM opcode space so that
//! real compiler-emitted bytecode disassembles correctly, even though the
//! core only *executes* the subset named in the interpreter's Non-goals
//! (no LOG*, CREATE, CALL family, precompiles).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
pub enum Opcode {
    STOP = 0x00,
    ADD = 0x01,
    MUL = 0x02,
    SUB = 0x03,
    DIV = 0x04,
    SDIV = 0x05,
    MOD = 0x06,
    SMOD = 0x07,
    ADDMOD = 0x08,
    MULMOD = 0x09,
    EXP = 0x0a,
    SIGNEXTEND = 0x0b,

    LT = 0x10,
    GT = 0x11,
    SLT = 0x12,
    SGT = 0x13,
    EQ = 0x14,
    ISZERO = 0x15,
    AND = 0x16,
    OR = 0x17,
    XOR = 0x18,
    NOT = 0x19,
    BYTE = 0x1a,
    SHL = 0x1b,
    SHR = 0x1c,
    SAR = 0x1d,

    SHA3 = 0x20,

    ADDRESS = 0x30,
    BALANCE = 0x31,
    ORIGIN = 0x32,
    CALLER = 0x33,
    CALLVALUE = 0x34,
    CALLDATALOAD = 0x35,
    CALLDATASIZE = 0x36,
    CALLDATACOPY = 0x37,
    CODESIZE = 0x38,
    CODECOPY = 0x39,
    GASPRICE = 0x3a,
    RETURNDATASIZE = 0x3d,
    RETURNDATACOPY = 0x3e,

    BLOCKHASH = 0x40,
    COINBASE = 0x41,
    TIMESTAMP = 0x42,
    NUMBER = 0x43,
    GASLIMIT = 0x45,
    CHAINID = 0x46,

    POP = 0x50,
    MLOAD = 0x51,
    MSTORE = 0x52,
    MSTORE8 = 0x53,
    SLOAD = 0x54,
    SSTORE = 0x55,
    JUMP = 0x56,
    JUMPI = 0x57,
    PC = 0x58,
    MSIZE = 0x59,
    GAS = 0x5a,
    JUMPDEST = 0x5b,
    PUSH0 = 0x5f,

    PUSH1 = 0x60,
    PUSH2 = 0x61,
    PUSH3 = 0x62,
    PUSH4 = 0x63,
    PUSH5 = 0x64,
    PUSH6 = 0x65,
    PUSH7 = 0x66,
    PUSH8 = 0x67,
    PUSH9 = 0x68,
    PUSH10 = 0x69,
    PUSH11 = 0x6a,
    PUSH12 = 0x6b,
    PUSH13 = 0x6c,
    PUSH14 = 0x6d,
    PUSH15 = 0x6e,
    PUSH16 = 0x6f,
    PUSH17 = 0x70,
    PUSH18 = 0x71,
    PUSH19 = 0x72,
    PUSH20 = 0x73,
    PUSH21 = 0x74,
    PUSH22 = 0x75,
    PUSH23 = 0x76,
    PUSH24 = 0x77,
    PUSH25 = 0x78,
    PUSH26 = 0x79,
    PUSH27 = 0x7a,
    PUSH28 = 0x7b,
    PUSH29 = 0x7c,
    PUSH30 = 0x7d,
    PUSH31 = 0x7e,
    PUSH32 = 0x7f,

    DUP1 = 0x80,
    DUP2 = 0x81,
    DUP3 = 0x82,
    DUP4 = 0x83,
    DUP5 = 0x84,
    DUP6 = 0x85,
    DUP7 = 0x86,
    DUP8 = 0x87,
    DUP9 = 0x88,
    DUP10 = 0x89,
    DUP11 = 0x8a,
    DUP12 = 0x8b,
    DUP13 = 0x8c,
    DUP14 = 0x8d,
    DUP15 = 0x8e,
    DUP16 = 0x8f,

    SWAP1 = 0x90,
    SWAP2 = 0x91,
    SWAP3 = 0x92,
    SWAP4 = 0x93,
    SWAP5 = 0x94,
    SWAP6 = 0x95,
    SWAP7 = 0x96,
    SWAP8 = 0x97,
    SWAP9 = 0x98,
    SWAP10 = 0x99,
    SWAP11 = 0x9a,
    SWAP12 = 0x9b,
    SWAP13 = 0x9c,
    SWAP14 = 0x9d,
    SWAP15 = 0x9e,
    SWAP16 = 0x9f,

    RETURN = 0xf3,
    REVERT = 0xfd,
    INVALID = 0xfe,
}

impl Opcode {
    /// Byte value of a `PUSH1..PUSH32` opcode, or `None` otherwise.
    pub fn push_width(byte: u8) -> Option<u8> {
        if (Opcode::PUSH1 as u8..=Opcode::PUSH32 as u8).contains(&byte) {
            Some(byte - Opcode::PUSH1 as u8 + 1)
        } else {
            None
        }
    }

    /// `n` argument of a `DUP1..DUP16` opcode, or `None` otherwise.
    pub fn dup_n(byte: u8) -> Option<usize> {
        if (Opcode::DUP1 as u8..=Opcode::DUP16 as u8).contains(&byte) {
            Some((byte - Opcode::DUP1 as u8 + 1) as usize)
        } else {
            None
        }
    }

    /// `n` argument of a `SWAP1..SWAP16` opcode, or `None` otherwise.
    pub fn swap_n(byte: u8) -> Option<usize> {
        if (Opcode::SWAP1 as u8..=Opcode::SWAP16 as u8).contains(&byte) {
            Some((byte - Opcode::SWAP1 as u8 + 1) as usize)
        } else {
            None
        }
    }

    /// Symbolic mnemonic for any byte value, including invalid/reserved ones.
    pub fn mnemonic(byte: u8) -> &'static str {
        if let Some(n) = Self::push_width(byte) {
            return PUSH_MNEMONICS[n as usize - 1];
        }
        if let Some(n) = Self::dup_n(byte) {
            return DUP_MNEMONICS[n - 1];
        }
        if let Some(n) = Self::swap_n(byte) {
            return SWAP_MNEMONICS[n - 1];
        }
        match byte {
            0x00 => "STOP",
            0x01 => "ADD",
            0x02 => "MUL",
            0x03 => "SUB",
            0x04 => "DIV",
            0x05 => "SDIV",
            0x06 => "MOD",
            0x07 => "SMOD",
            0x08 => "ADDMOD",
            0x09 => "MULMOD",
            0x0a => "EXP",
            0x0b => "SIGNEXTEND",
            0x10 => "LT",
            0x11 => "GT",
            0x12 => "SLT",
            0x13 => "SGT",
            0x14 => "EQ",
            0x15 => "ISZERO",
            0x16 => "AND",
            0x17 => "OR",
            0x18 => "XOR",
            0x19 => "NOT",
            0x1a => "BYTE",
            0x1b => "SHL",
            0x1c => "SHR",
            0x1d => "SAR",
            0x20 => "SHA3",
            0x30 => "ADDRESS",
            0x31 => "BALANCE",
            0x32 => "ORIGIN",
            0x33 => "CALLER",
            0x34 => "CALLVALUE",
            0x35 => "CALLDATALOAD",
            0x36 => "CALLDATASIZE",
            0x37 => "CALLDATACOPY",
            0x38 => "CODESIZE",
            0x39 => "CODECOPY",
            0x3a => "GASPRICE",
            0x3d => "RETURNDATASIZE",
            0x3e => "RETURNDATACOPY",
            0x40 => "BLOCKHASH",
            0x41 => "COINBASE",
            0x42 => "TIMESTAMP",
            0x43 => "NUMBER",
            0x45 => "GASLIMIT",
            0x46 => "CHAINID",
            0x50 => "POP",
            0x51 => "MLOAD",
            0x52 => "MSTORE",
            0x53 => "MSTORE8",
            0x54 => "SLOAD",
            0x55 => "SSTORE",
            0x56 => "JUMP",
            0x57 => "JUMPI",
            0x58 => "PC",
            0x59 => "MSIZE",
            0x5a => "GAS",
            0x5b => "JUMPDEST",
            0x5f => "PUSH0",
            0xf3 => "RETURN",
            0xfd => "REVERT",
            0xfe => "INVALID",
            _ => "UNKNOWN",
        }
    }

    /// Short human-readable note for bytes in known-reserved/removed
    /// ranges, used by the disassembler to explain faults.
    pub fn reserved_hint(byte: u8) -> Option<&'static str> {
        match byte {
            0x0c..=0x0f => Some("reserved in the 0x0c-0x0f arithmetic range"),
            0x1e | 0x1f => Some("reserved in the 0x1e-0x1f bitwise range"),
            0x21..=0x2f => Some("reserved after SHA3 (0x20)"),
            0x3b | 0x3c | 0x3f => Some("EXTCODESIZE/EXTCODECOPY/EXTCODEHASH family, not supported by this core"),
            0x44 => Some("DIFFICULTY/PREVRANDAO, not supported by this core"),
            0x47..=0x4f => Some("reserved after CHAINID (0x46)"),
            0x5c | 0x5d | 0x5e => Some("transient-storage/MCOPY family, not supported by this core"),
            0xa0..=0xa4 => Some("LOG0-LOG4, logging is out of scope for this core"),
            0xf0 | 0xf1 | 0xf2 | 0xf4 | 0xf5 => Some("CREATE/CALL family, sub-calls are out of scope for this core"),
            0xfa => Some("STATICCALL, sub-calls are out of scope for this core"),
            0xff => Some("SELFDESTRUCT, not supported by this core"),
            _ => None,
        }
    }
}

const PUSH_MNEMONICS: [&str; 32] = [
    "PUSH1", "PUSH2", "PUSH3", "PUSH4", "PUSH5", "PUSH6", "PUSH7", "PUSH8", "PUSH9", "PUSH10",
    "PUSH11", "PUSH12", "PUSH13", "PUSH14", "PUSH15", "PUSH16", "PUSH17", "PUSH18", "PUSH19",
    "PUSH20", "PUSH21", "PUSH22", "PUSH23", "PUSH24", "PUSH25", "PUSH26", "PUSH27", "PUSH28",
    "PUSH29", "PUSH30", "PUSH31", "PUSH32",
];

const DUP_MNEMONICS: [&str; 16] = [
    "DUP1", "DUP2", "DUP3", "DUP4", "DUP5", "DUP6", "DUP7", "DUP8", "DUP9", "DUP10", "DUP11",
    "DUP12", "DUP13", "DUP14", "DUP15", "DUP16",
];

const SWAP_MNEMONICS: [&str; 16] = [
    "SWAP1", "SWAP2", "SWAP3", "SWAP4", "SWAP5", "SWAP6", "SWAP7", "SWAP8", "SWAP9", "SWAP10",
    "SWAP11", "SWAP12", "SWAP13", "SWAP14", "SWAP15", "SWAP16",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_width_covers_push1_through_push32() {
        assert_eq!(Opcode::push_width(Opcode::PUSH1 as u8), Some(1));
        assert_eq!(Opcode::push_width(Opcode::PUSH32 as u8), Some(32));
        assert_eq!(Opcode::push_width(Opcode::ADD as u8), None);
    }

    #[test]
    fn dup_and_swap_n_are_one_indexed() {
        assert_eq!(Opcode::dup_n(Opcode::DUP1 as u8), Some(1));
        assert_eq!(Opcode::dup_n(Opcode::DUP16 as u8), Some(16));
        assert_eq!(Opcode::swap_n(Opcode::SWAP1 as u8), Some(1));
        assert_eq!(Opcode::swap_n(Opcode::SWAP16 as u8), Some(16));
    }

    #[test]
    fn mnemonic_known_and_unknown() {
        assert_eq!(Opcode::mnemonic(0x01), "ADD");
        assert_eq!(Opcode::mnemonic(0x60), "PUSH1");
        assert_eq!(Opcode::mnemonic(0x7f), "PUSH32");
        assert_eq!(Opcode::mnemonic(0x0c), "UNKNOWN");
        assert!(Opcode::reserved_hint(0x0c).is_some());
    }
}
