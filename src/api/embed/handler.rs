// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/embed HTTP handler

use crate::api::embed::{EmbedRequest, EmbedResponse};
use crate::api::http_server::AppState;
use crate::api::ApiError;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info};

/// POST /api/embed handler
///
/// Generates one deterministic vector per input text.
///
/// # Request Body
/// ```json
/// { "texts": ["text1", "text2", ...] }
/// ```
///
/// # Response Body
/// ```json
/// {
///   "vectors": [[0.1, 0.2, ...], [0.3, 0.4, ...]],
///   "dim": 8,
///   "meta": { "engine": "cfo-embed-demo", "ts": "2025-01-01T12:00:00.123456+00:00" }
/// }
/// ```
///
/// A body that is not a JSON object, or whose `texts` is missing, empty or
/// not a list, yields 400 `{"detail": "texts list required"}`.
pub async fn embed_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmbedRequest>, JsonRejection>,
) -> Result<Json<EmbedResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("embed body rejected: {}", rejection.body_text());
        ApiError::TextsRequired
    })?;

    let texts = request.validate()?;
    info!(count = texts.len(), "EMBED");

    let vectors = state.generator.generate_batch(&texts);
    Ok(Json(EmbedResponse::new(vectors, &state.engine)))
}
