use std::fmt;

use super::DomainError;

pub const MAX_FORM_TYPE_LEN: usize = 100;

/// Tag classifying the kind of form submitted, e.g. `order` or `contact`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormType(String);

impl FormType {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyFormType);
        }
        if trimmed.chars().count() > MAX_FORM_TYPE_LEN {
            return Err(DomainError::FormTypeTooLong(MAX_FORM_TYPE_LEN));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
