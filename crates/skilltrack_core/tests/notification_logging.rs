use chrono::NaiveDate;
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use skilltrack_core::{
    demo_seed, CertificateDraft, DomainStore, FixedClock, LogNotificationSink, ProfilePatch,
    SkillDraft,
};
use std::sync::{Mutex, Once};

static LINES: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));
static INSTALL: Once = Once::new();

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LINES.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

fn captured() -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LINES.lock().unwrap().clone()
}

#[test]
fn log_sink_never_writes_record_names() {
    captured();
    let mut store = DomainStore::new(demo_seed(), LogNotificationSink)
        .with_clock(FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));

    let skill = store.add_skill(SkillDraft::new("SecretProject", 42, "Internal"));
    store.delete_skill(&skill.id);

    let mut draft = CertificateDraft::new(
        "ClassifiedBadge",
        "HiddenIssuer",
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        "Security",
    );
    draft.expiry_date = NaiveDate::from_ymd_opt(2026, 2, 1);
    let certificate = store.add_certificate(draft);
    store.delete_certificate(&certificate.id);

    store.update_user_profile(
        ProfilePatch::default()
            .name("Jane Private")
            .email("jane@private.test"),
    );

    let lines = captured();
    let notifications: Vec<&String> = lines
        .iter()
        .filter(|line| line.starts_with("event=notification"))
        .collect();
    assert!(notifications
        .iter()
        .any(|line| line.contains("kind=skill_deleted")));
    assert!(notifications
        .iter()
        .any(|line| line.contains("kind=expiring_soon")));
    for line in &lines {
        for secret in [
            "SecretProject",
            "ClassifiedBadge",
            "HiddenIssuer",
            "Jane Private",
            "jane@private.test",
        ] {
            assert!(!line.contains(secret), "log line leaks `{secret}`: {line}");
        }
    }
}
