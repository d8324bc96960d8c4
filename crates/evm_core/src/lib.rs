pub mod context;
pub mod control;
pub mod disassembler;
pub mod dispatcher;
pub mod errors;
pub mod gas;
pub mod jump_tables;
pub mod opcodes;
pub mod operations;

use context::ExecutionContext;
use disassembler::FaultReport;
use dispatcher::Dispatcher;
use errors::VmError;

/// Runs `code` against `call_data` with `gas_limit` gas and returns the
/// bytes handed to `RETURN`, or the error that stopped execution.
pub fn execute(code: &[u8], call_data: &[u8], gas_limit: u64) -> Result<Vec<u8>, VmError> {
    let mut ctx = ExecutionContext::new(code, call_data, gas_limit);
    Dispatcher::new().run(&mut ctx)?;
    Ok(ctx.return_data)
}

/// Outcome of a full run: the bytes `RETURN` handed back, gas actually
/// spent, and final storage contents.
pub struct ExecutionReport {
    pub return_data: Vec<u8>,
    pub gas_used: u64,
    pub storage: primitives::storage::Storage,
}

/// Like [`execute`], but on success returns gas accounting and the final
/// storage alongside the return data, and on failure renders a disassembly
/// fault report instead of a bare error.
pub fn execute_with_report(
    code: &[u8],
    call_data: &[u8],
    gas_limit: u64,
) -> Result<ExecutionReport, FaultReport> {
    let mut ctx = ExecutionContext::new(code, call_data, gas_limit);
    match Dispatcher::new().run(&mut ctx) {
        Ok(()) => Ok(ExecutionReport {
            gas_used: ctx.gas_used(gas_limit),
            return_data: ctx.return_data,
            storage: ctx.storage,
        }),
        Err(err) => Err(disassembler::report(code, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn execute_runs_add_bytecode_to_completion() {
        // PUSH1 5 PUSH1 3 ADD PUSH1 0 MSTORE PUSH1 0x20 PUSH1 0 RETURN
        let code = [
            0x60, 0x05, 0x60, 0x03, 0x01, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3,
        ];
        let result = execute(&code, &[], 100_000).unwrap();
        assert_eq!(U256::from_be_slice(&result), U256::from(8u64));
    }

    #[test]
    fn execute_with_report_surfaces_gas_used_and_storage() {
        // PUSH1 0x2a PUSH1 1 SSTORE PUSH1 1 SLOAD PUSH1 0 MSTORE PUSH1 0x20 PUSH1 0 RETURN
        let code = [
            0x60, 0x2a, 0x60, 0x01, 0x55, 0x60, 0x01, 0x54, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60,
            0x00, 0xf3,
        ];
        let report = execute_with_report(&code, &[], 100_000).unwrap();
        assert!(report.gas_used > 0);
        assert_eq!(report.storage.load(U256::from(1u64)), U256::from(42u64));
    }

    #[test]
    fn execute_with_report_renders_fault_on_failure() {
        let code = [0x01u8]; // bare ADD, empty stack
        let err = execute_with_report(&code, &[], 100_000).unwrap_err();
        assert!(err.to_string().contains("stack underflow"));
    }
}
