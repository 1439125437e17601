use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Submission;

/// Submission as returned by the API. `data` is the payload's JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub form_type: String,
    pub data: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&Submission> for SubmissionResponse {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id(),
            form_type: submission.form_type().value().to_string(),
            data: submission.data().to_json_string(),
            submitted_at: submission.submitted_at(),
        }
    }
}
