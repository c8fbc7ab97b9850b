//! Report construction and rendering.
//!
//! - [`builder`] — groups classified URLs into the criticality-tiered [`Report`](crate::models::Report).
//! - [`allowlist`] — renders the Markdown allowlist request from a report.
//! - [`output`] — writes the JSON report and the allowlist request to disk.
//! - [`terminal`] — colored console summary; respects `--verbose` / `--quiet`.

pub mod allowlist;
pub mod builder;
pub mod output;
pub mod terminal;
