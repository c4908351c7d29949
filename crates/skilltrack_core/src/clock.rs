//! Injectable time source for date-relative computations.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ClockResult<T> = Result<T, ClockError>;

/// Time source failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    Unavailable(String),
}

impl Display for ClockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "clock unavailable: {reason}"),
        }
    }
}

impl Error for ClockError {}

/// Provides "now" to the expiry watcher.
pub trait Clock {
    fn now(&self) -> ClockResult<NaiveDateTime>;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockResult<NaiveDateTime> {
        Ok(Local::now().naive_local())
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Midnight at the start of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ClockResult<NaiveDateTime> {
        Ok(self.now)
    }
}
