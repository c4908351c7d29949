//! Presence checks shared by skill and certificate drafts.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for draft records.
///
/// The store accepts unvalidated input; form callers use these checks to
/// reject incomplete submissions before they reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField(&'static str),
    /// Expiry date lies before the issue date.
    ExpiryBeforeIssue {
        issued: NaiveDate,
        expires: NaiveDate,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` must not be empty"),
            Self::ExpiryBeforeIssue { issued, expires } => write!(
                f,
                "expiry date ({expires}) must be on or after issue date ({issued})"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
