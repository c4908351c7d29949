//! Storage primitives behind the domain store.
//!
//! # Responsibility
//! - Keep record ordering and id uniqueness out of use-case code.
//!
//! # Invariants
//! - Collections never hold two records with the same id.
//! - Lookups that miss return `None`; they do not error.

pub mod collection;
