use primitives::errors::{MemoryError, StackError};
use thiserror::Error;

/// Exhaustive execution failure kinds, each carrying the PC at which the
/// failure occurred and an optional caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmErrorKind {
    #[error("out of gas")]
    OutOfGas,
    #[error("stack overflow")]
    StackOverflow,
    #[error("stack underflow")]
    StackUnderflow,
    #[error("invalid jump destination")]
    InvalidJump,
    #[error("invalid opcode")]
    InvalidOpcode,
    #[error("memory offset/length out of bounds")]
    MemoryOutOfBounds,
    #[error("execution reverted")]
    Revert,
}

/// An execution failure, carrying the PC at which it occurred and an
/// optional caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmError {
    pub kind: VmErrorKind,
    pub pc: usize,
    pub message: Option<String>,
}

impl std::fmt::Display for VmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at pc={}", self.kind, self.pc)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for VmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl VmError {
    pub fn new(kind: VmErrorKind, pc: usize) -> Self {
        VmError {
            kind,
            pc,
            message: None,
        }
    }

    pub fn with_message(kind: VmErrorKind, pc: usize, message: impl Into<String>) -> Self {
        VmError {
            kind,
            pc,
            message: Some(message.into()),
        }
    }

    pub fn out_of_gas(pc: usize) -> Self {
        Self::new(VmErrorKind::OutOfGas, pc)
    }

    pub fn invalid_jump(pc: usize) -> Self {
        Self::new(VmErrorKind::InvalidJump, pc)
    }

    pub fn invalid_opcode(pc: usize) -> Self {
        Self::new(VmErrorKind::InvalidOpcode, pc)
    }

    pub fn memory_out_of_bounds(pc: usize) -> Self {
        Self::new(VmErrorKind::MemoryOutOfBounds, pc)
    }

    pub fn revert(pc: usize) -> Self {
        Self::new(VmErrorKind::Revert, pc)
    }

    /// Attaches the PC at which a stack/memory error surfaced, since those
    /// lower-level errors don't carry one themselves.
    pub fn at(self, pc: usize) -> Self {
        VmError { pc, ..self }
    }
}

impl From<StackError> for VmError {
    fn from(err: StackError) -> Self {
        let kind = match err {
            StackError::Overflow { .. } => VmErrorKind::StackOverflow,
            StackError::Underflow { .. } => VmErrorKind::StackUnderflow,
        };
        VmError::with_message(kind, 0, err.to_string())
    }
}

impl From<MemoryError> for VmError {
    fn from(err: MemoryError) -> Self {
        VmError::with_message(VmErrorKind::MemoryOutOfBounds, 0, err.to_string())
    }
}

