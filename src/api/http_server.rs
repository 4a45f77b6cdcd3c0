// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::Uri,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{any::Any, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use super::{embed_handler, health_handler, ApiError};
use crate::config::ServerConfig;
use crate::embeddings::VectorGenerator;
use crate::version::SERVICE_NAME;

/// Per-router configuration shared with every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Engine identifier reported in `meta.engine`
    pub engine: Arc<str>,
    pub generator: VectorGenerator,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            engine: Arc::from(SERVICE_NAME),
            generator: VectorGenerator::default(),
        }
    }
}

impl AppState {
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            generator: VectorGenerator::new(dimension),
            ..Self::default()
        }
    }
}

/// Builds the router with all routes and middleware attached.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/healthz", get(health_handler))
        .route("/api/embed", post(embed_handler))
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(cors_layer()),
        )
        .with_state(state)
}

/// Any origin, method and header, with credentials.
///
/// A wildcard origin cannot be sent together with credentials, so the
/// request's own origin, method and headers are mirrored back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn not_found_handler(uri: Uri) -> ApiError {
    info!("no route for {}", uri.path());
    ApiError::NotFound
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {}", message);

    ApiError::Internal(anyhow::anyhow!("handler panicked")).into_response()
}

/// Binds the listener and serves until Ctrl-C or SIGTERM.
pub async fn start_server(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);

    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        "starting {} on {} ({})",
        SERVICE_NAME,
        address,
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", SERVICE_NAME);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
