use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use super::FormRules;

pub struct FieldRule {
    pub check: fn(&Value, NaiveDate) -> bool,
    pub message: &'static str,
}

pub static ORDER: FormRules = FormRules {
    form_type: "order",
    fields: &[
        (
            "fullName",
            &[FieldRule {
                check: |v, _| trimmed_len(v) >= 2,
                message: "Full name must contain at least 2 characters",
            }],
        ),
        (
            "product",
            &[FieldRule {
                check: |v, _| is_truthy(v),
                message: "Please select a product",
            }],
        ),
        (
            "quantity",
            &[
                FieldRule {
                    check: |v, _| as_number(v).is_some_and(|n| n >= 1.0),
                    message: "Quantity must be greater than 0",
                },
                FieldRule {
                    check: |v, _| as_number(v).is_some_and(|n| n <= 100.0),
                    message: "Quantity cannot exceed 100",
                },
            ],
        ),
        (
            "deliveryDate",
            &[
                FieldRule {
                    check: |v, _| is_truthy(v),
                    message: "Please select a delivery date",
                },
                FieldRule {
                    check: |v, today| as_date(v).is_some_and(|d| d >= today),
                    message: "Delivery date cannot be in the past",
                },
            ],
        ),
        (
            "address",
            &[FieldRule {
                check: |v, _| trimmed_len(v) >= 10,
                message: "Address must contain at least 10 characters",
            }],
        ),
        (
            "paymentMethod",
            &[FieldRule {
                check: |v, _| is_truthy(v),
                message: "Please select a payment method",
            }],
        ),
        (
            "agreeTerms",
            &[FieldRule {
                check: |v, _| *v == Value::Bool(true),
                message: "You must agree to the terms",
            }],
        ),
    ],
};

/// Null, false, zero and the empty string are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn trimmed_len(value: &Value) -> usize {
    value.as_str().map_or(0, |s| s.trim().chars().count())
}

/// Numbers, or strings holding a number.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn as_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
