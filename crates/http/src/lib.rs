//! HTTP API server for asides.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod format;
mod handlers;
mod request_types;

use axum::{
    http::StatusCode,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use asides_core::SiteUrls;
use asides_service::{AsideService, AuthGate};

pub use format::{AsideFormat, parse_aside_path};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// CRUD, recency and feed operations
    pub service: Arc<AsideService>,
    /// Basic-auth gate for bulk deletion
    pub auth: AuthGate,
    /// Canonical URLs for `Location` headers and the feed
    pub urls: SiteUrls,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/asides",
            get(handlers::asides::list_recent)
                .post(handlers::asides::create_aside)
                .delete(handlers::asides::delete_all_asides),
        )
        .route("/asides.atom", get(handlers::feed::atom_feed))
        .route(
            "/asides/{id}",
            get(handlers::asides::get_aside)
                .put(handlers::asides::update_aside)
                .delete(handlers::asides::delete_aside),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves until Ctrl+C or SIGTERM.
pub async fn serve(addr: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting HTTP server on {}", addr);
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::warn!("Received SIGTERM, shutting down"),
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Asides doesn't know about that!\n")
}
