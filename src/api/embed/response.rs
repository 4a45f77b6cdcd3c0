// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbedResponse and EmbedMeta types

use crate::embeddings::Vector;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Response metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedMeta {
    /// Engine identifier
    pub engine: String,

    /// Response time, ISO-8601 UTC with microseconds
    pub ts: String,
}

impl EmbedMeta {
    /// Metadata stamped with the current time
    pub fn now(engine: &str) -> Self {
        Self {
            engine: engine.to_string(),
            ts: timestamp(),
        }
    }
}

/// Response body for POST /api/embed
///
/// # Example
/// ```json
/// {
///   "vectors": [[0.375882, 0.263756, ...]],
///   "dim": 8,
///   "meta": {"engine": "cfo-embed-demo", "ts": "2025-01-01T12:00:00.123456+00:00"}
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedResponse {
    /// One vector per input text, in input order
    pub vectors: Vec<Vector>,

    /// Length of every vector
    pub dim: usize,

    pub meta: EmbedMeta,
}

impl EmbedResponse {
    /// Builds a response; `dim` is taken from the first vector.
    pub fn new(vectors: Vec<Vector>, engine: &str) -> Self {
        let dim = vectors.first().map(Vec::len).unwrap_or(0);
        Self {
            vectors,
            dim,
            meta: EmbedMeta::now(engine),
        }
    }

    pub fn vector_count(&self) -> usize {
        self.vectors.len()
    }
}

/// Current UTC time in ISO-8601 form, e.g. `2025-01-01T12:00:00.123456+00:00`
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
