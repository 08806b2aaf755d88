//! Contact domain model.
//!
//! # Responsibility
//! - Define validated field types and the per-contact record aggregate.
//! - Hold the pure calendar arithmetic used by birthday queries.
//!
//! # Invariants
//! - Every stored field passed its validator; there is no unchecked
//!   constructor from raw strings.

pub mod calendar;
pub mod field;
pub mod record;
