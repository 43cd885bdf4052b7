//! Output rendering for the `wordscan` application.
//!
//! Renderers take already-counted (and optionally sorted) records and write them to an
//! injected writer, so they can be exercised against an in-memory buffer in tests.
//!
//! # Available Formatters
//!
//! - **Terminal**: Human-readable banner, totals and per-file listing

pub mod terminal;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use terminal::render as render_terminal;
