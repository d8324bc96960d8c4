//! The single mutable aggregate an execution operates on.

use primitives::{memory::Memory, stack::Stack, storage::Storage};

/// Owns the stack, memory, and storage for one top-level invocation, and
/// borrows the code and call-data for its duration.
///
/// `code` and `call_data` must not be mutated by the caller while an
/// `ExecutionContext` built from them is alive; the dispatcher assumes they
/// are stable for the lifetime of the execution.
pub struct ExecutionContext<'a> {
    pub stack: Stack,
    pub memory: Memory,
    pub storage: Storage,
    pub code: &'a [u8],
    pub call_data: &'a [u8],
    pub return_data: Vec<u8>,
    pub pc: usize,
    pub gas_remaining: u64,
    pub halted: bool,
    pub reverted: bool,
    pub last_error: Option<String>,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(code: &'a [u8], call_data: &'a [u8], gas_limit: u64) -> Self {
        ExecutionContext {
            stack: Stack::default(),
            memory: Memory::default(),
            storage: Storage::default(),
            code,
            call_data,
            return_data: Vec::new(),
            pc: 0,
            gas_remaining: gas_limit,
            halted: false,
            reverted: false,
            last_error: None,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.halted && !self.reverted
    }

    /// Current opcode byte at `pc`, or `None` if `pc` has run off the end
    /// of `code`.
    pub fn current_opcode(&self) -> Option<u8> {
        self.code.get(self.pc).copied()
    }

    /// Bytes of `code` following `pc`, used by `PUSH`-family handlers to
    /// read their inline operand.
    pub fn code_from(&self, offset: usize) -> &[u8] {
        self.code.get(offset..).unwrap_or(&[])
    }

    pub fn gas_used(&self, gas_limit: u64) -> u64 {
        gas_limit.saturating_sub(self.gas_remaining)
    }

    /// Charges `amount` gas, failing if insufficient.
    pub fn charge_gas(&mut self, amount: u64) -> bool {
        if self.gas_remaining < amount {
            return false;
        }
        self.gas_remaining -= amount;
        true
    }

    /// Reads `len` bytes of memory starting at `offset`, growing it first.
    pub fn memory_slice(&mut self, offset: usize, len: usize) -> Vec<u8> {
        self.memory.read_slice(offset, len)
    }
}
