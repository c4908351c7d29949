//! Transient user-facing notifications emitted by store operations.
//!
//! # Responsibility
//! - Describe toast-style messages without any rendering concern.
//! - Let the UI collaborator choose where messages go via `NotificationSink`.
//!
//! # Invariants
//! - Notifications are fire-and-forget; sinks must not fail the operation
//!   that produced them.
//! - Message text may name user records; log output carries only the
//!   severity and `NotificationKind`.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Display severity for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Which store event produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    SkillAdded,
    SkillUpdated,
    SkillDeleted,
    CertificateAdded,
    CertificateUpdated,
    CertificateDeleted,
    ProfileUpdated,
    ExpiringSoon,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SkillAdded => "skill_added",
            Self::SkillUpdated => "skill_updated",
            Self::SkillDeleted => "skill_deleted",
            Self::CertificateAdded => "certificate_added",
            Self::CertificateUpdated => "certificate_updated",
            Self::CertificateDeleted => "certificate_deleted",
            Self::ProfileUpdated => "profile_updated",
            Self::ExpiringSoon => "expiring_soon",
        }
    }
}

/// One transient message for the notification-display collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Success, message)
    }

    pub fn warning(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Warning, message)
    }

    pub fn new(kind: NotificationKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}

/// Receiver of store notifications.
pub trait NotificationSink {
    fn publish(&mut self, notification: Notification);
}

/// Buffering sink; the UI drains it after each event.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    pending: VecDeque<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications not yet drained, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    /// Takes all pending notifications, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl NotificationSink for NotificationLog {
    fn publish(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }
}

/// Sink that only forwards to the log facade.
///
/// Used by headless callers such as the CLI smoke run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn publish(&mut self, notification: Notification) {
        let kind = notification.kind.as_str();
        match notification.severity {
            Severity::Success | Severity::Info => info!(
                "event=notification module=notify severity={:?} kind={kind}",
                notification.severity
            ),
            Severity::Warning | Severity::Error => warn!(
                "event=notification module=notify severity={:?} kind={kind}",
                notification.severity
            ),
        }
    }
}
