use serde::Deserialize;

use super::{SubmissionError, SubmissionResponse};
use crate::db::SubmissionRepository;
use crate::models::{FormData, FormType, Submission};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub form_type: String,
    pub data: serde_json::Value,
}

/// Validate the request, store a new submission and return its view.
pub async fn run(
    repo: &dyn SubmissionRepository,
    request: CreateSubmissionRequest,
) -> Result<SubmissionResponse, SubmissionError> {
    tracing::info!("Creating new submission of type: {}", request.form_type);

    let form_type = FormType::new(&request.form_type)?;
    let data = FormData::from_value(request.data)?;

    let created = repo.create(Submission::new(form_type, data)).await?;

    tracing::info!("Successfully created submission with ID: {}", created.id());

    Ok(SubmissionResponse::from(&created))
}
