//! URL classification by purpose.
//!
//! - [`rules`] — the fixed, ordered host-substring tables.
//! - [`classifier`] — applies the tables (first match wins) and extracts hosts.

pub mod classifier;
pub mod rules;
