pub mod create;
pub mod listing;
pub mod lookup;
pub mod search;
pub mod view;

pub use create::CreateSubmissionRequest;
pub use view::SubmissionResponse;

use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::DomainError;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
