//! Renders a human-readable fault report: the failing opcode, a window of
//! surrounding bytecode, and (for reserved/unsupported bytes) a short note
//! on why the byte has no handler.

use std::fmt::Write as _;

use crate::{errors::VmError, opcodes::Opcode};

const WINDOW: usize = 10;

/// A disassembly window centered on the PC where execution stopped.
pub struct FaultReport {
    pub error: VmError,
    pub mnemonic: &'static str,
    pub window_start: usize,
    pub lines: Vec<String>,
}

/// Builds a [`FaultReport`] for `error`, which must have occurred while
/// executing `code`.
pub fn report(code: &[u8], error: VmError) -> FaultReport {
    let pc = error.pc;
    let op = code.get(pc).copied().unwrap_or(0);
    let mnemonic = Opcode::mnemonic(op);

    let window_start = pc.saturating_sub(WINDOW);
    let window_end = (pc + WINDOW + 1).min(code.len());

    let mut lines = Vec::new();
    for (offset, &byte) in code[window_start..window_end].iter().enumerate() {
        let at = window_start + offset;
        let marker = if at == pc { ">>" } else { "  " };
        let mut line = format!("{marker} {at:04x}: {byte:02x} {}", Opcode::mnemonic(byte));
        if at == pc {
            if let Some(hint) = Opcode::reserved_hint(byte) {
                let _ = write!(line, "  ({hint})");
            }
        }
        lines.push(line);
    }

    FaultReport {
        error,
        mnemonic,
        window_start,
        lines,
    }
}

impl std::fmt::Display for FaultReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (opcode {})", self.error, self.mnemonic)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
