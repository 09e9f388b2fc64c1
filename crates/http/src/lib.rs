//! HTTP API server for linkbio.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod page;
mod query_types;
mod response_types;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use linkbio_core::ProfileConfig;
use linkbio_service::{ImageProxy, PresenceClient, ViewCounterService};

pub use response_types::{
    BadgeResponse, ProfileResponse, SocialResponse, VersionResponse, ViewsResponse,
};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// The single view counter for this process
    pub views: Arc<ViewCounterService>,
    pub image_proxy: ImageProxy,
    pub presence: PresenceClient,
    pub profile: ProfileConfig,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(page::serve_page))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/views",
            get(handlers::views::get_views).post(handlers::views::increment_views),
        )
        .route("/api/image-proxy", get(handlers::image_proxy::proxy_image))
        .route("/api/profile", get(handlers::profile::get_profile))
        .route("/api/presence", get(handlers::presence::get_presence))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
