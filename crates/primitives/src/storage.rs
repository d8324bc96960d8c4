//! Sparse key-value storage for a single contract execution.

use std::collections::HashMap;

use alloy::primitives::U256;

#[derive(Debug, Clone, Default)]
pub struct Storage {
    data: HashMap<U256, U256>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Missing keys read as zero.
    pub fn load(&self, key: U256) -> U256 {
        self.data.get(&key).copied().unwrap_or(U256::ZERO)
    }

    pub fn store(&mut self, key: U256, value: U256) {
        self.data.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
