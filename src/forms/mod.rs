//! Per-field rules for the form types the service knows about.
//!
//! These are advisory: storing a submission never runs them. Callers use
//! them to check a payload before submitting it.

pub mod rules;

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use rules::FieldRule;

/// Rules for one form type, keyed by field name.
pub struct FormRules {
    pub form_type: &'static str,
    pub fields: &'static [(&'static str, &'static [FieldRule])],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

static KNOWN_FORMS: &[&FormRules] = &[&rules::ORDER];

/// Rules registered for `form_type`, compared case-insensitively.
pub fn lookup(form_type: &str) -> Option<&'static FormRules> {
    let form_type = form_type.trim();
    KNOWN_FORMS
        .iter()
        .find(|f| f.form_type.eq_ignore_ascii_case(form_type))
        .copied()
}

impl FormRules {
    pub fn field_rules(&self, field: &str) -> Option<&'static [FieldRule]> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rules)| *rules)
    }

    /// First failing rule's message for this field, if any. Fields without
    /// rules always pass.
    pub fn validate_field(&self, field: &str, value: &Value, today: NaiveDate) -> Option<&'static str> {
        self.field_rules(field)?
            .iter()
            .find(|rule| !(rule.check)(value, today))
            .map(|rule| rule.message)
    }

    /// Check every field present in `data`. Missing fields are not reported.
    pub fn validate_at(&self, data: &Map<String, Value>, today: NaiveDate) -> ValidationReport {
        let errors: BTreeMap<String, String> = data
            .iter()
            .filter_map(|(field, value)| {
                self.validate_field(field, value, today)
                    .map(|msg| (field.clone(), msg.to_string()))
            })
            .collect();

        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn validate(&self, data: &Map<String, Value>) -> ValidationReport {
        self.validate_at(data, Utc::now().date_naive())
    }
}
