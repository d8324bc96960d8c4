//! Zero-initialized, lazily grown byte memory addressed in 32-byte words.

use alloy::primitives::U256;

const WORD_SIZE: usize = 32;

#[derive(Default, Debug, Clone)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    pub fn new() -> Self {
        Memory { data: Vec::new() }
    }

    pub fn new_with_data(data: Vec<u8>) -> Self {
        Memory { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Extends the backing buffer so its length is at least `n`, rounded up
    /// to a 32-byte multiple, zero-filling the new tail. No-op if already
    /// large enough.
    pub fn ensure_size(&mut self, n: usize) {
        if self.data.len() >= n {
            return;
        }
        let words = n.div_ceil(WORD_SIZE);
        self.data.resize(words * WORD_SIZE, 0);
    }

    /// Loads the 32-byte big-endian word at `offset`, growing memory first.
    pub fn load32(&mut self, offset: usize) -> U256 {
        self.ensure_size(offset + WORD_SIZE);
        U256::from_be_slice(&self.data[offset..offset + WORD_SIZE])
    }

    /// Writes `value` as 32 big-endian bytes starting at `offset`, growing
    /// memory first.
    pub fn store32(&mut self, offset: usize, value: U256) {
        self.ensure_size(offset + WORD_SIZE);
        self.data[offset..offset + WORD_SIZE].copy_from_slice(&value.to_be_bytes::<32>());
    }

    /// Writes only the low byte of `value` at `offset`.
    pub fn store8(&mut self, offset: usize, value: u8) {
        self.ensure_size(offset + 1);
        self.data[offset] = value;
    }

    pub fn load_byte(&mut self, offset: usize) -> u8 {
        self.ensure_size(offset + 1);
        self.data[offset]
    }

    /// Reads `len` bytes starting at `offset` as an owned buffer, growing
    /// memory first.
    pub fn read_slice(&mut self, offset: usize, len: usize) -> Vec<u8> {
        self.ensure_size(offset + len);
        self.data[offset..offset + len].to_vec()
    }

    /// Bytewise copy of `len` bytes from `src` into `self` at `dst`,
    /// zero-padding when `src` is shorter than `len` bytes from its start
    /// offset.
    pub fn copy_from(&mut self, dst: usize, src: &[u8], src_offset: usize, len: usize) {
        self.ensure_size(dst + len);
        for i in 0..len {
            let byte = src.get(src_offset + i).copied().unwrap_or(0);
            self.data[dst + i] = byte;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_load_round_trips() {
        let mut mem = Memory::new();
        let value = U256::from(0xdead_beefu64);
        mem.store32(0, value);
        assert_eq!(mem.load32(0), value);
    }

    #[test]
    fn ensure_size_zero_fills_and_rounds_to_word_multiple() {
        let mut mem = Memory::new();
        mem.ensure_size(5);
        assert_eq!(mem.len(), 32);
        assert!(mem.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn store_does_not_disturb_neighboring_bytes() {
        let mut mem = Memory::new();
        mem.ensure_size(64);
        mem.store8(10, 0xff);
        mem.store32(32, U256::from(7u64));
        assert_eq!(mem.load_byte(10), 0xff);
        assert_eq!(mem.load_byte(9), 0);
        assert_eq!(mem.load_byte(11), 0);
        assert_eq!(mem.load32(32), U256::from(7u64));
    }

    #[test]
    fn copy_from_zero_pads_when_source_is_short() {
        let mut mem = Memory::new();
        let src = [1u8, 2, 3];
        mem.copy_from(0, &src, 0, 5);
        assert_eq!(&mem.data[0..5], &[1, 2, 3, 0, 0]);
    }

    #[test]
    fn copy_from_handles_offset_past_source_end() {
        let mut mem = Memory::new();
        let src = [1u8, 2, 3];
        mem.copy_from(0, &src, 10, 4);
        assert_eq!(&mem.data[0..4], &[0, 0, 0, 0]);
    }
}
