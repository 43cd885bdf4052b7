//! Terminal output formatter for counting results.
//!
//! This module writes the human-readable report: the execution mode banner, the
//! file and word totals, and optionally one line per file.

use crate::data::{ExecutionMode, FileRecord, ScanReport};
use std::io::{self, Write};

/// Writes the `Using PAR Policy` / `Using SEQ Policy` banner.
pub fn write_banner<W: Write>(out: &mut W, mode: ExecutionMode) -> io::Result<()> {
    writeln!(out, "Using {} Policy", mode.as_str())
}

/// Formats one listing line: `<path>, words: <n>` or `<path>, unreadable`.
pub fn format_record(record: &FileRecord) -> String {
    match record.word_count {
        Some(words) => format!("{}, words: {}", record.path.display(), words),
        None => format!("{}, unreadable", record.path.display()),
    }
}

/// Renders a report to `out`.
///
/// # Arguments
/// * `out` - Destination writer (stdout in the binaries)
/// * `report` - Already-counted, optionally sorted records
/// * `list` - Whether to print one line per file after the totals
///
/// # Note
/// This function contains no business logic. Unreadable files are listed with a
/// marker so they are never confused with empty files.
pub fn render<W: Write>(out: &mut W, report: &ScanReport, list: bool) -> io::Result<()> {
    writeln!(
        out,
        "word count in {} regular files: {}",
        report.file_count(),
        report.total_words
    )?;

    if report.unreadable > 0 {
        writeln!(out, "unreadable files: {}", report.unreadable)?;
    }

    if list {
        for record in &report.records {
            writeln!(out, "{}", format_record(record))?;
        }
    }

    Ok(())
}
