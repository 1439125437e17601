pub mod submissions;

pub use submissions::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DomainError, Submission};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("submission {0} already exists")]
    DuplicateId(Uuid),

    #[error("stored submission {id} is corrupt: {source}")]
    Corrupt {
        id: Uuid,
        #[source]
        source: DomainError,
    },
}

/// Storage for form submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Store a new submission. Fails if its id is already taken.
    async fn create(&self, submission: Submission) -> Result<Submission, RepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Submission>, RepositoryError>;

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// All submissions matching `search`, newest first.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Submission>, RepositoryError>;
}
