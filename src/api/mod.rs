//! HTTP surface: the conversion endpoint and the form that uses it.

pub mod handlers;
pub mod response;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::converter::Converter;

/// Shared state for API handlers.
pub struct AppState {
    pub converter: Converter,
}

impl AppState {
    pub fn new(converter: Converter) -> Self {
        Self { converter }
    }
}

/// Build the API router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/convert",
            post(handlers::convert).fallback(handlers::method_not_allowed),
        )
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(())
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::debug!(
                            status = %response.status(),
                            latency_ms = latency.as_millis(),
                            "request finished"
                        );
                    },
                ),
        )
        .with_state(state)
}

/// Start the API server and run until Ctrl-C.
pub async fn serve(state: Arc<AppState>, bind_addr: &str) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
