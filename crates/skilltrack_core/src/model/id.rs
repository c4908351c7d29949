//! Record identifiers and generation strategies.
//!
//! # Invariants
//! - Generators never promise uniqueness against existing data on their own;
//!   the store re-draws until the candidate is unused in its collection.

use uuid::Uuid;

/// Stable identifier for skills and certificates.
///
/// Kept as text because seeded records use short numeric ids (`"1"`, `"2"`)
/// while generated ones are UUIDs.
pub type RecordId = String;

/// Source of fresh record identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> RecordId;
}

/// Random UUID v4 identifiers. Default for interactive sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> RecordId {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic numeric identifiers (`"1"`, `"2"`, ...).
///
/// Deterministic, so useful for demos and tests that assert on ids.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Starts counting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id.to_string()
    }
}
