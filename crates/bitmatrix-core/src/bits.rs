//! Packed bit storage backing [`BitField`](crate::BitField).

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-length bit vector packed into `u64` words.
///
/// Bits past `len` in the last word are always zero, so word-level
/// comparisons and popcounts never see stale padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitStore {
    words: Vec<u64>,
    len: usize,
}

impl BitStore {
    /// All-false storage for `len` bits.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Caller guarantees `index < len`.
    pub(crate) fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Caller guarantees `index < len`.
    pub(crate) fn set(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.len);
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    pub(crate) fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
