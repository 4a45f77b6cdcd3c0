// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/embed tests
//!
//! Covers the response shape, range, ordering and determinism guarantees of
//! the embed endpoint, driven through the full router.

use super::helpers::post_embed;
use axum::http::StatusCode;
use cfo_embed_demo::embeddings::vector_for_text;
use serde_json::{json, Value};

const HELLO: [f64; 8] = [
    0.375882, 0.263756, 0.382067, 0.234046, 0.074062, 0.600894, 0.153239, 0.574362,
];

fn vectors(body: &Value) -> Vec<Vec<f64>> {
    serde_json::from_value(body["vectors"].clone()).unwrap()
}

#[tokio::test]
async fn test_single_text() {
    let (status, body) = post_embed(r#"{"texts": ["hello"]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dim"], 8);
    let vectors = vectors(&body);
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0], HELLO.to_vec());
    assert!(vectors[0].iter().all(|v| (0.0..1.0).contains(v)));
}

#[tokio::test]
async fn test_batch_matches_single() {
    let (_, single) = post_embed(r#"{"texts": ["hello"]}"#).await;
    let (status, batch) = post_embed(r#"{"texts": ["hello", "world"]}"#).await;

    assert_eq!(status, StatusCode::OK);
    let batch_vectors = vectors(&batch);
    assert_eq!(batch_vectors.len(), 2);
    assert_eq!(batch_vectors[0], vectors(&single)[0]);
    assert_eq!(batch_vectors[1], vector_for_text("world", 8));
}

#[tokio::test]
async fn test_order_preserved() {
    let texts = ["c", "a", "b", "a"];
    let (status, body) = post_embed(&json!({ "texts": texts }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let vectors = vectors(&body);
    assert_eq!(vectors.len(), texts.len());
    for (text, vector) in texts.iter().zip(&vectors) {
        assert_eq!(vector, &vector_for_text(text, 8), "vector for {:?}", text);
    }
    assert_eq!(vectors[1], vectors[3]);
}

#[tokio::test]
async fn test_repeated_requests_identical_vectors() {
    let body = r#"{"texts": ["determinism", ""]}"#;
    let (_, first) = post_embed(body).await;
    let (_, second) = post_embed(body).await;
    assert_eq!(first["vectors"], second["vectors"]);
}

#[tokio::test]
async fn test_meta() {
    let (_, body) = post_embed(r#"{"texts": ["hello"]}"#).await;

    assert_eq!(body["meta"]["engine"], "cfo-embed-demo");
    let ts = body["meta"]["ts"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "bad ts {}", ts);
    assert!(ts.ends_with("+00:00"));
}

#[tokio::test]
async fn test_scalar_items_coerced() {
    let (status, body) = post_embed(r#"{"texts": [1, true, null]}"#).await;

    assert_eq!(status, StatusCode::OK);
    let vectors = vectors(&body);
    assert_eq!(vectors[0], vector_for_text("1", 8));
    assert_eq!(vectors[1], vector_for_text("True", 8));
    assert_eq!(vectors[2], vector_for_text("None", 8));
}

#[tokio::test]
async fn test_unicode_text() {
    let (status, body) = post_embed(r#"{"texts": ["héllo 🌍"]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        vectors(&body)[0],
        vec![0.948132, 0.324927, 0.298631, 0.680047, 0.926886, 0.989353, 0.600504, 0.792129]
    );
}

#[tokio::test]
async fn test_many_texts_shape() {
    let texts: Vec<String> = (0..50).map(|i| format!("text {}", i)).collect();
    let (status, body) = post_embed(&json!({ "texts": texts }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let vectors = vectors(&body);
    assert_eq!(vectors.len(), 50);
    assert!(vectors.iter().all(|v| v.len() == 8));
}
