//! Store configuration.
//!
//! # Invariants
//! - `expiry_window_days` is within `1..=MAX_EXPIRY_WINDOW_DAYS`.
//! - Missing fields in JSON input fall back to defaults.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default lookahead for "expiring soon".
pub const DEFAULT_EXPIRY_WINDOW_DAYS: u32 = 90;
/// Upper bound accepted for the lookahead window (ten years).
pub const MAX_EXPIRY_WINDOW_DAYS: u32 = 3650;

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidWindow(u32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid store config: {err}"),
            Self::InvalidWindow(days) => write!(
                f,
                "expiry window must be within 1..={MAX_EXPIRY_WINDOW_DAYS} days, got {days}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidWindow(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Runtime options for one domain store session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Lookahead window for the expiry watcher, in days.
    pub expiry_window_days: u32,
    /// Emits the "expiring soon" summary notification when enabled.
    pub expiry_alerts_enabled: bool,
    /// Clamps skill levels into 0..=100 on add/update. Off by default, which
    /// stores levels exactly as submitted.
    pub clamp_levels_on_write: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
            expiry_alerts_enabled: true,
            clamp_levels_on_write: false,
        }
    }
}

impl StoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expiry_window_days == 0 || self.expiry_window_days > MAX_EXPIRY_WINDOW_DAYS {
            return Err(ConfigError::InvalidWindow(self.expiry_window_days));
        }
        Ok(())
    }
}
