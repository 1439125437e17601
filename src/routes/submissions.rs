use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, INVALID_REQUEST_MESSAGE};
use crate::state::SharedState;
use crate::submission::{self, CreateSubmissionRequest, SubmissionResponse};

const NOT_FOUND_MESSAGE: &str = "Submission not found";

#[derive(Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Rejected submission query: {rejection}");
        AppError::BadRequest(INVALID_REQUEST_MESSAGE.to_string())
    })?;

    let submissions =
        submission::listing::run(state.submissions.as_ref(), params.search.as_deref()).await?;
    Ok(Json(submissions))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SubmissionResponse>, AppError> {
    // A malformed id cannot name a stored submission.
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
    };

    submission::lookup::run(state.submissions.as_ref(), id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            tracing::warn!("Submission with ID {id} not found");
            AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
        })
}

pub async fn create(
    State(state): State<SharedState>,
    payload: Result<Json<CreateSubmissionRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Ok(rejection.into_response());
        }
        Err(rejection) => {
            tracing::debug!("Rejected submission body: {rejection}");
            return Err(AppError::BadRequest(INVALID_REQUEST_MESSAGE.to_string()));
        }
    };

    let created = submission::create::run(state.submissions.as_ref(), request).await?;
    let location = format!("/api/submissions/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}
