use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::error::{AppError, INVALID_REQUEST_MESSAGE};
use crate::forms::{self, ValidationReport};

pub async fn validate(
    Path(form_type): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let rules = forms::lookup(&form_type)
        .ok_or_else(|| AppError::NotFound("Unknown form type".to_string()))?;

    let data = match payload {
        Ok(Json(Value::Object(map))) => map,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Ok(rejection.into_response());
        }
        _ => return Err(AppError::BadRequest(INVALID_REQUEST_MESSAGE.to_string())),
    };

    let report: ValidationReport = rules.validate(&data);
    Ok(Json(report).into_response())
}
