// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Deterministic vector generation
//!
//! Maps a text to a fixed-length vector of values in `[0, 1)`:
//! SHA-256 of the UTF-8 bytes, first 8 digest bytes read big-endian and
//! reduced modulo 2^32 as the seed, [`Pcg64`] seeded from it, `dimension`
//! uniform draws, each rounded to 6 decimal places.
//!
//! The same `(text, dimension)` pair always yields the same vector, and a
//! shorter vector is always a prefix of a longer one for the same text.

use super::pcg64::Pcg64;
use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::info;

/// Default vector length
pub const DEFAULT_DIMENSION: usize = 8;

/// Decimal places kept in each vector element
pub const ROUND_DECIMALS: i32 = 6;

/// A generated vector
pub type Vector = Vec<f64>;

/// Derives the generator seed for a text.
pub fn seed_for_text(text: &str) -> u32 {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    // mod 2^32 keeps the low word of the big-endian prefix
    (u64::from_be_bytes(head) & u64::from(u32::MAX)) as u32
}

/// Generates the vector for `text` with `dimension` elements.
pub fn vector_for_text(text: &str, dimension: usize) -> Vector {
    let mut rng = Pcg64::seed_from_u64(u64::from(seed_for_text(text)));
    let vector: Vector = (0..dimension)
        .map(|_| round_to_decimals(rng.gen::<f64>(), ROUND_DECIMALS))
        .collect();

    info!(gen_dim = dimension, "EMBED");
    vector
}

/// Rounds half to even at `decimals` places, scaling by a power of ten first.
fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Vector generator bound to a fixed dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorGenerator {
    dimension: usize,
}

impl Default for VectorGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl VectorGenerator {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn generate(&self, text: &str) -> Vector {
        vector_for_text(text, self.dimension)
    }

    /// Generates one vector per text, preserving input order.
    pub fn generate_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vector> {
        texts
            .iter()
            .map(|text| self.generate(text.as_ref()))
            .collect()
    }
}
