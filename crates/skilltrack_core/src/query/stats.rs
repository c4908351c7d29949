//! Aggregations feeding the dashboard, charts and profile pages.

use crate::model::certificate::Certificate;
use crate::model::profile::UserProfile;
use crate::model::skill::{clamp_level, Skill, MAX_LEVEL};
use crate::query::sort::{sort_certificates, CertificateSortKey};
use serde::Serialize;
use std::collections::HashSet;

/// Number of certificates shown in the dashboard "latest" panel.
pub const DASHBOARD_LATEST_LIMIT: usize = 3;

/// Returned by [`average_level`] for an empty skill list.
pub const EMPTY_AVERAGE_LEVEL: i64 = 0;

/// Skill count for one category, in first-seen category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Display label derived from a proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ProficiencyLabel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// One spoke of the skill radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub subject: String,
    pub value: i32,
    pub full_mark: i32,
}

/// Headline numbers of the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_skills: usize,
    pub total_certificates: usize,
    pub average_level: i64,
    pub latest_certificates: Vec<Certificate>,
    pub expiring_soon: usize,
}

/// Counts skills per category.
pub fn skills_by_category(skills: &[Skill]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for skill in skills {
        match counts.iter_mut().find(|entry| entry.name == skill.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: skill.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Mean stored level rounded to the nearest integer, halves rounding up.
///
/// Returns [`EMPTY_AVERAGE_LEVEL`] for an empty slice.
pub fn average_level(skills: &[Skill]) -> i64 {
    if skills.is_empty() {
        return EMPTY_AVERAGE_LEVEL;
    }
    let total: i64 = skills.iter().map(|skill| i64::from(skill.level)).sum();
    let mean = total as f64 / skills.len() as f64;
    (mean + 0.5).floor() as i64
}

/// Maps a level to its label. Out-of-range levels are clamped first.
pub fn proficiency_label(level: i32) -> ProficiencyLabel {
    match clamp_level(level) {
        level if level < 30 => ProficiencyLabel::Beginner,
        level if level < 60 => ProficiencyLabel::Intermediate,
        level if level < 85 => ProficiencyLabel::Advanced,
        _ => ProficiencyLabel::Expert,
    }
}

/// Up to `limit` certificates, most recently issued first.
pub fn latest_certificates(certificates: &[Certificate], limit: usize) -> Vec<Certificate> {
    let mut latest = sort_certificates(certificates, CertificateSortKey::Date);
    latest.truncate(limit);
    latest
}

pub fn radar_points(skills: &[Skill]) -> Vec<RadarPoint> {
    skills
        .iter()
        .map(|skill| RadarPoint {
            subject: skill.name.clone(),
            value: skill.clamped_level(),
            full_mark: MAX_LEVEL,
        })
        .collect()
}

/// Builds the dashboard headline from current snapshots.
pub fn dashboard_summary(
    skills: &[Skill],
    certificates: &[Certificate],
    expiring_soon: usize,
) -> DashboardSummary {
    DashboardSummary {
        total_skills: skills.len(),
        total_certificates: certificates.len(),
        average_level: average_level(skills),
        latest_certificates: latest_certificates(certificates, DASHBOARD_LATEST_LIMIT),
        expiring_soon,
    }
}

/// Certificate skill labels that match no skill name exactly.
///
/// Certificates reference skills by label, so renaming or deleting a skill
/// leaves these behind.
pub fn unresolved_skill_names<'a>(certificate: &'a Certificate, skills: &[Skill]) -> Vec<&'a str> {
    let known: HashSet<&str> = skills.iter().map(|skill| skill.name.as_str()).collect();
    certificate
        .skills
        .iter()
        .map(String::as_str)
        .filter(|name| !known.contains(name))
        .collect()
}

/// Whether the public profile should render a "Connect" section.
pub fn has_social_links(profile: &UserProfile) -> bool {
    profile
        .social_links
        .as_ref()
        .is_some_and(|links| links.any())
}
