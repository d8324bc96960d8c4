//! Collaborator-facing types: block/transaction environment and a
//! multi-account storage ledger.
//!
//! None of this is touched by the interpreter core itself (the core only
//! knows about a single [`crate::storage::Storage`] owned by one execution).
//! A surrounding node would use these to populate environment opcodes
//! (`COINBASE`, `NUMBER`, ...) and to persist per-address storage across
//! block boundaries; the core treats them as optional, borrowed context.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};

/// Per-block environment values exposed to environment opcodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEnv {
    pub number: U256,
    pub timestamp: U256,
    pub gas_limit: U256,
    pub chain_id: U256,
    pub coinbase: Address,
    pub block_hash: U256,
}

impl Default for BlockEnv {
    fn default() -> Self {
        BlockEnv {
            number: U256::ZERO,
            timestamp: U256::ZERO,
            gas_limit: U256::ZERO,
            chain_id: U256::ZERO,
            coinbase: Address::ZERO,
            block_hash: U256::ZERO,
        }
    }
}

/// A single top-level invocation: sender, recipient, value, and call-data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
    pub gas_limit: U256,
}

/// One contract's persistent state: its balance, its deployed code, and its
/// storage slots.
#[derive(Debug, Clone, Default)]
pub struct EvmAccount {
    pub balance: U256,
    pub code: Vec<u8>,
    pub word: HashMap<U256, U256>,
}

/// Address-keyed ledger of accounts, as a surrounding node would persist it
/// across blocks. The interpreter core does not use this type directly; see
/// [`crate::storage::Storage`] for the per-execution storage the core owns.
#[derive(Debug, Clone, Default)]
pub struct EvmStorage {
    pub data: HashMap<Address, EvmAccount>,
}

impl EvmStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a storage slot for `address`, defaulting to zero for a missing
    /// account or a missing slot.
    pub fn s_load(&self, address: Address, key: U256) -> U256 {
        self.data
            .get(&address)
            .and_then(|account| account.word.get(&key).copied())
            .unwrap_or(U256::ZERO)
    }

    pub fn s_store(&mut self, address: Address, key: U256, value: U256) {
        self.data
            .entry(address)
            .or_default()
            .word
            .insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_account_reads_as_zero() {
        let storage = EvmStorage::new();
        assert_eq!(storage.s_load(Address::ZERO, U256::from(1u64)), U256::ZERO);
    }

    #[test]
    fn store_then_load_round_trips_per_address() {
        let mut storage = EvmStorage::new();
        let addr = Address::with_last_byte(1);
        storage.s_store(addr, U256::from(1u64), U256::from(42u64));
        assert_eq!(storage.s_load(addr, U256::from(1u64)), U256::from(42u64));
        assert_eq!(storage.s_load(Address::ZERO, U256::from(1u64)), U256::ZERO);
    }
}
