// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbedRequest type for POST /api/embed
//!
//! `texts` is kept as raw JSON so that a missing, null or non-list value can
//! be rejected with the service's own 400 instead of a deserializer error.

use crate::api::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for POST /api/embed
///
/// # Example
/// ```json
/// {
///   "texts": ["Hello world", "Another text"]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedRequest {
    /// Values to embed, in order (at least one)
    #[serde(default)]
    pub texts: Option<Value>,
}

impl EmbedRequest {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: Some(Value::Array(
                texts.into_iter().map(|t| Value::String(t.into())).collect(),
            )),
        }
    }

    /// Validates the request and returns the texts in canonical string form
    ///
    /// # Validation Rules
    /// 1. **texts**: must be present and a non-empty list
    /// 2. **items**: strings, numbers, booleans and null are accepted;
    ///    arrays and objects are rejected
    ///
    /// Every failure maps to [`ApiError::TextsRequired`].
    pub fn validate(&self) -> Result<Vec<String>, ApiError> {
        let items = match &self.texts {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(ApiError::TextsRequired),
        };

        items
            .iter()
            .map(|item| canonical_text(item).ok_or(ApiError::TextsRequired))
            .collect()
    }
}

/// Canonical string form of a scalar JSON value.
///
/// Strings are used verbatim, numbers keep their JSON text, booleans and
/// null are spelled `True`/`False`/`None`. Arrays and objects have no
/// canonical form and yield `None`.
pub fn canonical_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Null => Some("None".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
