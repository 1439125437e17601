use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use super::{RepositoryError, SubmissionRepository};
use crate::models::{FormData, FormType, Submission};
use crate::submission::search::SearchTerm;

/// Row as kept by the store. The payload is held serialized, like a
/// database column would hold it.
#[derive(Debug, Clone)]
pub struct StoredRow {
    pub id: Uuid,
    pub form_type: String,
    pub data: String,
    pub submitted_at: DateTime<Utc>,
    seq: u64,
}

/// Process-wide in-memory submission store.
pub struct MemoryStore {
    rows: DashMap<Uuid, StoredRow>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plant a row verbatim, bypassing domain validation. Returns false if the
    /// id is already taken.
    pub fn insert_raw(
        &self,
        id: Uuid,
        form_type: &str,
        data: &str,
        submitted_at: DateTime<Utc>,
    ) -> bool {
        match self.rows.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(StoredRow {
                    id,
                    form_type: form_type.to_string(),
                    data: data.to_string(),
                    submitted_at,
                    seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
                });
                true
            }
        }
    }

    fn snapshot(&self) -> Vec<StoredRow> {
        self.rows.iter().map(|r| r.value().clone()).collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn to_domain(row: &StoredRow) -> Result<Submission, RepositoryError> {
    let corrupt = |source| RepositoryError::Corrupt { id: row.id, source };
    let form_type = FormType::new(&row.form_type).map_err(corrupt)?;
    let data = FormData::from_json_string(&row.data).map_err(corrupt)?;
    Ok(Submission::from_persistence(row.id, form_type, data, row.submitted_at))
}

/// Rehydrate a row for listing. A corrupt payload is replaced by an empty
/// one so a single bad row cannot fail the whole list.
fn to_domain_lenient(row: &StoredRow) -> Option<Submission> {
    match to_domain(row) {
        Ok(submission) => Some(submission),
        Err(e) => {
            tracing::warn!("Listing corrupt submission {} with empty data: {e}", row.id);
            let form_type = FormType::new(&row.form_type).ok()?;
            Some(Submission::from_persistence(
                row.id,
                form_type,
                FormData::default(),
                row.submitted_at,
            ))
        }
    }
}

fn row_matches(row: &StoredRow, term: &SearchTerm) -> bool {
    if term.matches_text(&row.form_type) {
        return true;
    }
    match FormData::from_json_string(&row.data) {
        Ok(data) => term.matches_values(data.values()),
        // Unparseable payloads fall back to matching the raw text.
        Err(_) => term.matches_text(&row.data),
    }
}

#[async_trait]
impl SubmissionRepository for MemoryStore {
    async fn create(&self, submission: Submission) -> Result<Submission, RepositoryError> {
        let id = submission.id();
        let inserted = self.insert_raw(
            id,
            submission.form_type().value(),
            &submission.data().to_json_string(),
            submission.submitted_at(),
        );
        if !inserted {
            let err = RepositoryError::DuplicateId(id);
            tracing::error!(
                "Error creating submission of type {}: {err}",
                submission.form_type()
            );
            return Err(err);
        }
        Ok(submission)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Submission>, RepositoryError> {
        let Some(row) = self.rows.get(&id).map(|r| r.value().clone()) else {
            return Ok(None);
        };
        to_domain(&row).map(Some).inspect_err(|e| {
            tracing::error!("Error retrieving submission with ID {id}: {e}");
        })
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.rows.contains_key(&id))
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Submission>, RepositoryError> {
        let mut rows = self.snapshot();

        if let Some(term) = SearchTerm::parse(search) {
            rows.retain(|row| row_matches(row, &term));
        }

        // Newest first; equal timestamps keep insertion order.
        rows.sort_by_key(|row| (Reverse(row.submitted_at), row.seq));

        Ok(rows.iter().filter_map(to_domain_lenient).collect())
    }
}
