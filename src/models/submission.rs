use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{FormData, FormType};

/// One stored form submission.
///
/// Fields are private so a submission cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    id: Uuid,
    form_type: FormType,
    data: FormData,
    submitted_at: DateTime<Utc>,
}

impl Submission {
    /// A fresh submission with a new time-ordered id, stamped now.
    pub fn new(form_type: FormType, data: FormData) -> Self {
        Self {
            id: Uuid::now_v7(),
            form_type,
            data,
            submitted_at: Utc::now(),
        }
    }

    /// Restore a submission read back from storage.
    pub fn from_persistence(
        id: Uuid,
        form_type: FormType,
        data: FormData,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            form_type,
            data,
            submitted_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn form_type(&self) -> &FormType {
        &self.form_type
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
