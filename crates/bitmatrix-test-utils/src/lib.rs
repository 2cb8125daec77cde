//! Test utilities and mock types for BitMatrix development.
//!
//! Provides deterministic random sources ([`ConstRng`], [`SequenceRng`])
//! for exercising randomized grid operations, grid [`fixtures`], and
//! proptest [`strategies`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use rand::RngCore;

/// A random source that returns the same word forever.
///
/// `rand` derives a `bool` from the sign bit of `next_u32`, so
/// [`ConstRng::always(true)`](ConstRng::always) makes every boolean draw
/// `true` and `always(false)` makes every draw `false`.
#[derive(Clone, Debug)]
pub struct ConstRng {
    word: u64,
    draws: usize,
}

impl ConstRng {
    pub fn always(value: bool) -> Self {
        Self {
            word: if value { u64::MAX } else { 0 },
            draws: 0,
        }
    }

    /// Number of words handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.word as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        dst.fill(self.word as u8);
    }
}

/// A random source that replays a fixed cycle of boolean draws.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    sequence: Vec<bool>,
    cursor: usize,
}

impl SequenceRng {
    /// Panics if `sequence` is empty.
    pub fn new(sequence: Vec<bool>) -> Self {
        assert!(!sequence.is_empty(), "SequenceRng needs at least one value");
        Self {
            sequence,
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_bool(&mut self) -> bool {
        let value = self.sequence[self.cursor % self.sequence.len()];
        self.cursor += 1;
        value
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.next_bool() {
            u32::MAX
        } else {
            0
        }
    }

    fn next_u64(&mut self) -> u64 {
        if self.next_bool() {
            u64::MAX
        } else {
            0
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            *byte = if self.next_bool() { 0xFF } else { 0 };
        }
    }
}
