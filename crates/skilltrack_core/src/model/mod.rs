//! Domain model for skills, certificates and the session profile.
//!
//! # Responsibility
//! - Define the canonical records owned by the domain store.
//! - Provide presence checks that form callers run before writing.
//!
//! # Invariants
//! - Every skill and certificate is identified by a `RecordId` that is unique
//!   within its collection and never reassigned.
//! - Certificate skill lists are labels, not references to `Skill` records.

pub mod certificate;
pub mod id;
pub mod profile;
pub mod skill;
pub mod validation;

/// Records that carry a free-text category label.
///
/// Implemented by skills and certificates so category projections can be
/// shared between both list pages.
pub trait Categorized {
    fn category(&self) -> &str;
}
