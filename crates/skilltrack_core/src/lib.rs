//! Core domain logic for SkillTrack.
//! This crate owns the session state behind every screen: skills,
//! certificates, the user profile and the views derived from them.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod query;
pub mod repo;
pub mod seed;
pub mod service;
pub mod watch;

pub use clock::{Clock, ClockError, ClockResult, FixedClock, SystemClock};
pub use config::{ConfigError, StoreConfig, DEFAULT_EXPIRY_WINDOW_DAYS};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::certificate::{Certificate, CertificateDraft};
pub use model::id::{IdGenerator, RecordId, SequentialIdGenerator, UuidIdGenerator};
pub use model::profile::{ProfilePatch, SocialLinks, UserProfile};
pub use model::skill::{Skill, SkillDraft};
pub use model::validation::ValidationError;
pub use model::Categorized;
pub use notify::{
    LogNotificationSink, Notification, NotificationKind, NotificationLog, NotificationSink,
    Severity,
};
pub use query::filter::{
    categories_of, filter_certificates, filter_skills, CategoryFilter, ListFilter, ALL_CATEGORIES,
};
pub use query::sort::{
    sort_certificates, sort_skills, CertificateSortKey, ParseSortKeyError, SkillSortKey,
};
pub use query::stats::{
    average_level, dashboard_summary, has_social_links, latest_certificates, proficiency_label,
    radar_points, skills_by_category, unresolved_skill_names, CategoryCount, DashboardSummary,
    ProficiencyLabel, RadarPoint,
};
pub use seed::{demo_seed, SessionSeed};
pub use service::domain_store::DomainStore;
pub use watch::expiry::{expiring_within, ExpiringCertificate, ExpiryWatcher, WatchState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
