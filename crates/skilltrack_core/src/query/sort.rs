//! Sort orders offered by the skill and certificate list pages.

use crate::model::certificate::Certificate;
use crate::model::skill::Skill;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort order for skill lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillSortKey {
    /// Name ascending, case- and accent-insensitive.
    #[default]
    Name,
    /// Level descending.
    Level,
    /// Category ascending, case-insensitive.
    Category,
}

/// Sort order for certificate lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificateSortKey {
    /// Issue date descending, most recent first.
    #[default]
    Date,
    Title,
    Issuer,
}

/// Unknown sort key received from a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError(String);

impl Display for ParseSortKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown sort key `{}`", self.0)
    }
}

impl Error for ParseSortKeyError {}

impl FromStr for SkillSortKey {
    type Err = ParseSortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "level" => Ok(Self::Level),
            "category" => Ok(Self::Category),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

impl FromStr for CertificateSortKey {
    type Err = ParseSortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "date" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            "issuer" => Ok(Self::Issuer),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Returns a sorted copy of `skills`.
pub fn sort_skills(skills: &[Skill], by: SkillSortKey) -> Vec<Skill> {
    let mut sorted = skills.to_vec();
    match by {
        SkillSortKey::Name => sorted.sort_by(|a, b| compare_text(&a.name, &b.name)),
        SkillSortKey::Level => sorted.sort_by(|a, b| b.level.cmp(&a.level)),
        SkillSortKey::Category => sorted.sort_by(|a, b| compare_text(&a.category, &b.category)),
    }
    sorted
}

/// Returns a sorted copy of `certificates`.
pub fn sort_certificates(certificates: &[Certificate], by: CertificateSortKey) -> Vec<Certificate> {
    let mut sorted = certificates.to_vec();
    match by {
        CertificateSortKey::Date => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        CertificateSortKey::Title => sorted.sort_by(|a, b| compare_text(&a.title, &b.title)),
        CertificateSortKey::Issuer => sorted.sort_by(|a, b| compare_text(&a.issuer, &b.issuer)),
    }
    sorted
}

/// Case- and accent-insensitive ordering used for user-facing text.
///
/// Both sides are decomposed (NFD), stripped of combining marks and
/// lowercased, so `Éclair` sorts with the `e`s. Strings that differ only by
/// case or accents compare equal, so stable sorts keep their input order.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    fold_text(a).cmp(fold_text(b))
}

fn fold_text(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}
