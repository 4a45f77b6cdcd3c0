// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Deterministic stand-in embeddings
//!
//! No model is loaded: each vector is a pure function of the input text,
//! seeded from its SHA-256 digest.

pub mod generator;
pub mod pcg64;
pub mod seed_sequence;

pub use generator::{
    seed_for_text, vector_for_text, Vector, VectorGenerator, DEFAULT_DIMENSION, ROUND_DECIMALS,
};
pub use pcg64::Pcg64;
pub use seed_sequence::SeedSequence;
