pub mod form_data;
pub mod form_type;
pub mod submission;

pub use form_data::FormData;
pub use form_type::FormType;
pub use submission::Submission;

use thiserror::Error;

/// Raised when untrusted input cannot become a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("FormType cannot be empty")]
    EmptyFormType,

    #[error("FormType cannot exceed {0} characters")]
    FormTypeTooLong(usize),

    #[error("Form data is required")]
    MissingFormData,

    #[error("Form data must be a JSON object")]
    FormDataNotObject,

    #[error("JSON string cannot be empty")]
    EmptyJson,

    #[error("Invalid JSON format")]
    InvalidJson,
}
