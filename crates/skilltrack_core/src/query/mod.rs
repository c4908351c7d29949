//! Read-only projections over store snapshots.
//!
//! # Responsibility
//! - Filter, sort and aggregate skills and certificates for list and
//!   dashboard views.
//!
//! # Invariants
//! - Every function is pure: inputs are borrowed, outputs are freshly built.
//! - Sorting is stable; equal keys keep their input order.

pub mod filter;
pub mod sort;
pub mod stats;
