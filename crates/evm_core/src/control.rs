/// How a handler's execution affects the program counter.
///
/// "Handlers that change PC are the only ones that change PC": every
/// handler returns one of these and the dispatcher applies it uniformly,
/// rather than handlers reaching into `ctx.pc` inconsistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// PC should advance by exactly one after this opcode (the default).
    Continue,
    /// PC should be set to this absolute value (JUMP, JUMPI-taken,
    /// PUSH-N's post-operand landing spot).
    Jump(usize),
    /// Execution has halted or reverted; the dispatcher should stop
    /// looping. `ctx.halted`/`ctx.reverted` have already been set by the
    /// handler.
    Stop,
}
