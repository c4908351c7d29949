//! Derived state recomputed after store mutations.

pub mod expiry;
