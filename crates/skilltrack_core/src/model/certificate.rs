//! Certificate domain record.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `expiry_date`, when set, should not precede `date`. Drafts check this
//!   in `validate()`; the store does not enforce it.
//! - `skills` holds free-text labels. Renaming a `Skill` does not update them.

use crate::model::id::RecordId;
use crate::model::validation::{require_text, ValidationError};
use crate::model::Categorized;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record of an earned credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: RecordId,
    pub title: String,
    pub issuer: String,
    /// Issue date.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Certificate input without identifier, as submitted by the add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDraft {
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CertificateDraft {
    /// Creates a draft with the required fields; optional ones start empty.
    pub fn new(
        title: impl Into<String>,
        issuer: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            issuer: issuer.into(),
            date,
            expiry_date: None,
            credential_id: None,
            credential_url: None,
            category: category.into(),
            skills: Vec::new(),
            image_url: None,
        }
    }

    /// Checks required text fields and the issue/expiry ordering.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.title, "title")?;
        require_text(&self.issuer, "issuer")?;
        require_text(&self.category, "category")?;
        if let Some(expires) = self.expiry_date {
            if expires < self.date {
                return Err(ValidationError::ExpiryBeforeIssue {
                    issued: self.date,
                    expires,
                });
            }
        }
        Ok(())
    }

    /// Attaches an identifier, producing the stored record.
    pub fn into_certificate(self, id: RecordId) -> Certificate {
        Certificate {
            id,
            title: self.title,
            issuer: self.issuer,
            date: self.date,
            expiry_date: self.expiry_date,
            credential_id: self.credential_id,
            credential_url: self.credential_url,
            category: self.category,
            skills: self.skills,
            image_url: self.image_url,
        }
    }
}

impl Certificate {
    /// Whole days from `today` until expiry; negative once expired.
    ///
    /// Returns `None` for certificates without an expiry date.
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry_date
            .map(|expires| expires.signed_duration_since(today).num_days())
    }
}

impl Categorized for Certificate {
    fn category(&self) -> &str {
        &self.category
    }
}
