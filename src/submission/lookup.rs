use uuid::Uuid;

use super::{SubmissionError, SubmissionResponse};
use crate::db::SubmissionRepository;

/// `Ok(None)` when no submission has this id.
pub async fn run(
    repo: &dyn SubmissionRepository,
    id: Uuid,
) -> Result<Option<SubmissionResponse>, SubmissionError> {
    tracing::info!("Retrieving submission with ID: {id}");

    let submission = repo.get_by_id(id).await?;
    Ok(submission.as_ref().map(SubmissionResponse::from))
}
