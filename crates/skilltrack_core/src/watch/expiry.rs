//! Certificate expiry watcher.
//!
//! # Responsibility
//! - Track which certificates expire within the lookahead window.
//! - Recompute after every certificate mutation.
//!
//! # Invariants
//! - A certificate is expiring soon iff it has an expiry date `e` with
//!   `today <= e <= today + window_days`, compared at day granularity.
//! - Certificates without an expiry date are never included.
//! - State is `Dirty` between a mutation and the next successful recompute.
//! - A failed recompute keeps the previous result and leaves state `Dirty`.

use crate::clock::{Clock, ClockResult};
use crate::model::certificate::Certificate;
use chrono::NaiveDate;
use serde::Serialize;

/// Recompute state of the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Result reflects the current certificate collection.
    Clean,
    /// Collection changed since the last recompute.
    Dirty,
}

/// One certificate inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringCertificate {
    pub certificate: Certificate,
    /// Days from evaluation date to expiry; `0` means it expires today.
    pub days_remaining: i64,
}

/// Watches the certificate collection for upcoming expiries.
#[derive(Debug, Clone)]
pub struct ExpiryWatcher {
    window_days: u32,
    state: WatchState,
    expiring: Vec<ExpiringCertificate>,
    evaluated_on: Option<NaiveDate>,
}

impl ExpiryWatcher {
    /// Creates a dirty watcher with an empty result.
    pub fn new(window_days: u32) -> Self {
        Self {
            window_days,
            state: WatchState::Dirty,
            expiring: Vec::new(),
            evaluated_on: None,
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Latest computed result, in collection order.
    pub fn expiring(&self) -> &[ExpiringCertificate] {
        &self.expiring
    }

    /// Date used by the last successful recompute.
    pub fn evaluated_on(&self) -> Option<NaiveDate> {
        self.evaluated_on
    }

    pub fn mark_dirty(&mut self) {
        self.state = WatchState::Dirty;
    }

    /// Changes the lookahead window and marks the watcher dirty.
    ///
    /// The previous result stays readable until the next successful recompute.
    pub fn set_window_days(&mut self, window_days: u32) {
        self.window_days = window_days;
        self.mark_dirty();
    }

    /// Recomputes the result against `certificates` at the clock's current
    /// time.
    ///
    /// # Errors
    /// - Returns the clock error unchanged; the previous result is retained.
    pub fn recompute(
        &mut self,
        certificates: &[Certificate],
        clock: &dyn Clock,
    ) -> ClockResult<&[ExpiringCertificate]> {
        let today = clock.now()?.date();
        self.expiring = expiring_within(certificates, today, self.window_days);
        self.evaluated_on = Some(today);
        self.state = WatchState::Clean;
        Ok(&self.expiring)
    }
}

/// Pure selection of certificates expiring within `window_days` of `today`.
pub fn expiring_within(
    certificates: &[Certificate],
    today: NaiveDate,
    window_days: u32,
) -> Vec<ExpiringCertificate> {
    let window = 0..=i64::from(window_days);

    certificates
        .iter()
        .filter_map(|certificate| {
            let days_remaining = certificate.days_until_expiry(today)?;
            window.contains(&days_remaining).then(|| ExpiringCertificate {
                certificate: certificate.clone(),
                days_remaining,
            })
        })
        .collect()
}
