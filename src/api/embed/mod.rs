// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding API Module
//!
//! This module provides the POST /api/embed endpoint, returning
//! deterministic stand-in vectors for each input text.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::embed_handler;
pub use request::{canonical_text, EmbedRequest};
pub use response::{timestamp, EmbedMeta, EmbedResponse};
