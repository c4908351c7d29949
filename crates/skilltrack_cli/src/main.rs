//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `skilltrack_core` linkage by building a demo session store.
//! - Print the dashboard headline as stable `key=value` lines.
//!
//! Usage: `skilltrack_cli [ABSOLUTE_LOG_DIR]`

use skilltrack_core::{demo_seed, init_logging, DomainStore, LogLevel, LogNotificationSink};

fn main() {
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(LogLevel::build_default().as_str(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("skilltrack_core ping={}", skilltrack_core::ping());
    println!("skilltrack_core version={}", skilltrack_core::core_version());

    let store = DomainStore::new(demo_seed(), LogNotificationSink);
    let summary = store.dashboard();
    println!("skills={}", summary.total_skills);
    println!("certificates={}", summary.total_certificates);
    println!("average_level={}", summary.average_level);
    println!("expiring_soon={}", summary.expiring_soon);
    for entry in store.expiring_soon() {
        println!(
            "expiring id={} days_remaining={}",
            entry.certificate.id, entry.days_remaining
        );
    }
}
