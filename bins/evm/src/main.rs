//! Runs a fixed demo bytecode program and prints its return data and gas
//! usage. Argument parsing is out of scope for this core; wire up a real
//! CLI around `evm_core::execute_with_report` where one is needed.

use anyhow::{bail, Result};
use evm_core::execute_with_report;

// PUSH1 5 PUSH1 3 ADD PUSH1 0 MSTORE PUSH1 0x20 PUSH1 0 RETURN
const DEMO_CODE: [u8; 13] = [
    0x60, 0x05, 0x60, 0x03, 0x01, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    match execute_with_report(&DEMO_CODE, &[], 100_000) {
        Ok(report) => {
            tracing::info!(gas_used = report.gas_used, "execution finished");
            println!("return data: 0x{}", hex_encode(&report.return_data));
            println!("gas used: {}", report.gas_used);
            Ok(())
        }
        Err(fault) => {
            eprintln!("{fault}");
            bail!("execution failed");
        }
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
