//! Core use-case services.
//!
//! # Responsibility
//! - Expose the session store that UI callers mutate through.
//! - Keep UI layers decoupled from collection details.

pub mod domain_store;
