//! Search and category filtering for list pages.

use crate::model::certificate::Certificate;
use crate::model::skill::Skill;
use crate::model::Categorized;
use std::collections::HashSet;

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category constraint of a list filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Only(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl CategoryFilter {
    fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Search box plus category select state of a list page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListFilter {
    /// Case-insensitive substring; empty matches everything.
    pub search: String,
    pub category: CategoryFilter,
}

impl ListFilter {
    pub fn new(search: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }
}

impl From<&str> for ListFilter {
    fn from(search: &str) -> Self {
        Self::new(search, CategoryFilter::All)
    }
}

/// Keeps skills whose name contains the search text and whose category
/// passes the category filter.
pub fn filter_skills(skills: &[Skill], filter: &ListFilter) -> Vec<Skill> {
    let needle = filter.search.to_lowercase();
    skills
        .iter()
        .filter(|skill| filter.category.admits(&skill.category))
        .filter(|skill| contains_folded(&skill.name, &needle))
        .cloned()
        .collect()
}

/// Keeps certificates whose title or issuer contains the search text and
/// whose category passes the category filter.
pub fn filter_certificates(certificates: &[Certificate], filter: &ListFilter) -> Vec<Certificate> {
    let needle = filter.search.to_lowercase();
    certificates
        .iter()
        .filter(|cert| filter.category.admits(&cert.category))
        .filter(|cert| contains_folded(&cert.title, &needle) || contains_folded(&cert.issuer, &needle))
        .cloned()
        .collect()
}

/// Returns `"all"` followed by distinct categories in first-seen order.
pub fn categories_of<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        let category = item.category();
        if seen.insert(category) {
            categories.push(category.to_string());
        }
    }
    categories
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || haystack.to_lowercase().contains(folded_needle)
}
