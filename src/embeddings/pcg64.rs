// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! PCG64 (XSL-RR 128/64) random number generator
//!
//! Matches NumPy's `PCG64` bit generator: the state is advanced before each
//! output, and seeding goes through [`SeedSequence`]. Combined with the
//! `rand` crate's `Standard` `f64` distribution (top 53 bits scaled by
//! 2^-53) this reproduces `Generator.random()` draws exactly.

use super::seed_sequence::SeedSequence;
use rand::{Error, RngCore};

const MULTIPLIER: u128 = 0x2360_ed05_1fc6_5da4_4385_df64_9fcc_f645;

/// 128-bit LCG state with XSL-RR output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg64 {
    state: u128,
    increment: u128,
}

impl Pcg64 {
    /// Creates a generator from an initial state and a stream selector.
    pub fn new(init_state: u128, init_seq: u128) -> Self {
        let mut rng = Self {
            state: 0,
            increment: (init_seq << 1) | 1,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(init_state);
        rng.step();
        rng
    }

    /// Creates a generator from an integer seed, expanded via [`SeedSequence`].
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::from_seed_sequence(&SeedSequence::new(seed))
    }

    /// Creates a generator from four 64-bit words of seed-sequence state.
    pub fn from_seed_sequence(seq: &SeedSequence) -> Self {
        let words = seq.generate_state_u64(4);
        let init_state = (u128::from(words[0]) << 64) | u128::from(words[1]);
        let init_seq = (u128::from(words[2]) << 64) | u128::from(words[3]);
        Self::new(init_state, init_seq)
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }
}

#[inline]
fn output_xsl_rr(state: u128) -> u64 {
    let rot = (state >> 122) as u32;
    let xored = ((state >> 64) as u64) ^ (state as u64);
    xored.rotate_right(rot)
}

impl RngCore for Pcg64 {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step();
        output_xsl_rr(self.state)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
