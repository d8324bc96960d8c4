use thiserror::Error;

/// Failures raised by the fixed-capacity [`crate::stack::Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack overflow: depth already at capacity ({capacity})")]
    Overflow { capacity: usize },
    #[error("stack underflow: tried to pop/dup/swap with depth {depth}, needed {needed}")]
    Underflow { depth: usize, needed: usize },
}

/// Failures raised by [`crate::memory::Memory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("memory offset/length does not fit the native size type")]
    OutOfBounds,
}
