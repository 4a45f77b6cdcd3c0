// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! CORS policy tests: any origin, method and header, with credentials

use super::helpers::send;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};

const ORIGIN: &str = "http://localhost:5173";

#[tokio::test]
async fn test_preflight_mirrors_request() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/embed")
        .header("origin", ORIGIN)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-custom")
        .body(Body::empty())
        .unwrap();

    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], ORIGIN);
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(
        headers["access-control-allow-headers"],
        "content-type,x-custom"
    );
}

#[tokio::test]
async fn test_simple_request_carries_cors_headers() {
    let request = Request::builder()
        .uri("/api/healthz")
        .header("origin", "https://app.example.com")
        .body(Body::empty())
        .unwrap();

    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://app.example.com"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_error_responses_carry_cors_headers() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/embed")
        .header("origin", ORIGIN)
        .header("content-type", "application/json")
        .body(Body::from(r#"{"texts": []}"#))
        .unwrap();

    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["access-control-allow-origin"], ORIGIN);
}
