pub mod docs;
pub mod forms;
pub mod submissions;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Submissions
        .route(
            "/api/submissions",
            get(submissions::list).post(submissions::create),
        )
        .route("/api/submissions/{id}", get(submissions::get))
        // Form rules
        .route("/api/forms/{form_type}/validate", post(forms::validate))
}

pub fn docs_routes() -> Router<SharedState> {
    Router::new().route("/api/openapi.json", get(docs::openapi))
}
