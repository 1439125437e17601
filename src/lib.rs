pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod forms;
pub mod models;
pub mod routes;
pub mod submission;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyCors, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{MemoryStore, SubmissionRepository};
use crate::error::INTERNAL_ERROR_MESSAGE;
use crate::state::{AppState, SharedState};

/// Build the router over a fresh in-memory store.
pub fn build_app(config: Config) -> (Router, SharedState) {
    build_app_with_repository(config, Arc::new(MemoryStore::new()))
}

pub fn build_app_with_repository(
    config: Config,
    submissions: Arc<dyn SubmissionRepository>,
) -> (Router, SharedState) {
    let cors = cors_layer(&config.cors_allowed_origins);
    let max_body_size = config.max_body_size;
    let expose_docs = !config.environment.is_production();

    let state: SharedState = Arc::new(AppState {
        config,
        submissions,
    });

    let mut router = Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health));

    if expose_docs {
        router = router.merge(routes::docs_routes());
    }

    let app = router
        // The configured limit replaces axum's built-in 2 MiB extractor cap.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (app, state)
}

/// Allow-list from config, or any origin when the list is empty.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(AnyCors).allow_headers(AnyCors);

    if origins.is_empty() {
        return base.allow_origin(AnyCors);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("An unexpected error occurred: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}

async fn health() -> &'static str {
    "ok"
}
