use super::{SubmissionError, SubmissionResponse};
use crate::db::SubmissionRepository;

pub async fn run(
    repo: &dyn SubmissionRepository,
    search: Option<&str>,
) -> Result<Vec<SubmissionResponse>, SubmissionError> {
    tracing::info!(
        "Retrieving submissions with search term: {}",
        search.unwrap_or("none")
    );

    let submissions = repo.list(search).await?;
    Ok(submissions.iter().map(SubmissionResponse::from).collect())
}
