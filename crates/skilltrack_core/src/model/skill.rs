//! Skill domain record.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `level` is nominally 0..=100; values outside are stored as given unless
//!   the store is configured to clamp on write.

use crate::model::id::RecordId;
use crate::model::validation::{require_text, ValidationError};
use crate::model::Categorized;
use serde::{Deserialize, Serialize};

/// Lowest proficiency level.
pub const MIN_LEVEL: i32 = 0;
/// Highest proficiency level.
pub const MAX_LEVEL: i32 = 100;

/// A named competency with a proficiency level and a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    /// Proficiency percentage.
    pub level: i32,
    pub category: String,
}

/// Skill input without identifier, as submitted by the add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub level: i32,
    pub category: String,
}

impl SkillDraft {
    pub fn new(name: impl Into<String>, level: i32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            category: category.into(),
        }
    }

    /// Checks that name and category are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.name, "name")?;
        require_text(&self.category, "category")
    }

    /// Attaches an identifier, producing the stored record.
    pub fn into_skill(self, id: RecordId) -> Skill {
        Skill {
            id,
            name: self.name,
            level: self.level,
            category: self.category,
        }
    }
}

impl Skill {
    /// Level clamped into `MIN_LEVEL..=MAX_LEVEL`.
    pub fn clamped_level(&self) -> i32 {
        clamp_level(self.level)
    }
}

impl Categorized for Skill {
    fn category(&self) -> &str {
        &self.category
    }
}

pub fn clamp_level(level: i32) -> i32 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}
