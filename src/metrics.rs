//! Timing and profiling utilities for `wordscan`.
//!
//! This module provides:
//! - [`PhaseTimer`] - A wrapper around `Instant` for timing different phases
//! - [`rss_after_phase`] - Optional memory usage tracking using `sysinfo`
//! - [`ProfileData`] - Structured data for performance metrics
//! - [`write_phase_timings`] / [`write_profile_summary`] - Rendering to any `io::Write`
//!
//! # Usage
//!
//! ```rust
//! use wordscan::metrics::{PhaseTimer, rss_after_phase, ProfileData};
//!
//! let mut profile = ProfileData::new();
//! let timer = PhaseTimer::new("counting words");
//!
//! // ... do work ...
//!
//! profile.add_phase(timer.finish());
//! profile.memory_peak = rss_after_phase();
//! ```

use humansize::{DECIMAL, format_size};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use sysinfo::System;

/// A timer for measuring the duration of a specific phase or operation.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    /// The name of the phase being timed
    pub name: String,
    /// The start time of the phase
    pub start: Instant,
}

impl PhaseTimer {
    /// Creates a new timer and starts timing the specified phase.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Finishes timing the phase and returns the elapsed duration.
    pub fn finish(self) -> PhaseResult {
        PhaseResult {
            name: self.name,
            duration: self.start.elapsed(),
        }
    }
}

/// The result of a completed phase timing operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseResult {
    /// The name of the phase that was timed
    pub name: String,
    /// The duration of the phase
    pub duration: Duration,
}

impl PhaseResult {
    /// Duration in fractional milliseconds.
    pub fn millis(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Profiling data collected over one run.
///
/// Phases are kept in the order they were added; metadata keeps insertion order too.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    /// Timing results for each phase
    pub phases: Vec<PhaseResult>,
    /// Peak memory usage in bytes (if available)
    pub memory_peak: Option<u64>,
    /// Additional key/value facts about the run
    pub metadata: Vec<(String, String)>,
}

impl ProfileData {
    /// Creates a new empty profile data structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a completed phase result to the profile.
    pub fn add_phase(&mut self, phase: PhaseResult) {
        self.phases.push(phase);
    }

    /// Adds a metadata entry, replacing any previous value for `key`.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        match self.metadata.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.metadata.push((key.to_string(), value.to_string())),
        }
    }

    /// Gets the total duration of all phases combined.
    pub fn total_duration(&self) -> Duration {
        self.phases.iter().map(|p| p.duration).sum()
    }
}

/// Measures the current process's RSS (Resident Set Size) in bytes.
///
/// Returns `None` on platforms `sysinfo` does not support, or if the current
/// process cannot be inspected (e.g. restricted containers).
pub fn rss_after_phase() -> Option<u64> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return None;
    }

    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_process(pid);
    system.process(pid).map(|process| process.memory())
}

/// Writes one `<title>: <ms> ms` line per phase.
///
/// # Example Output
/// ```text
/// gathering all the paths: 12.402 ms
/// filtering target files parallel: 0.913 ms
/// counting words: 31.077 ms
/// ```
pub fn write_phase_timings<W: Write>(out: &mut W, profile: &ProfileData) -> io::Result<()> {
    for phase in &profile.phases {
        writeln!(out, "{}: {:.3} ms", phase.name, phase.millis())?;
    }
    Ok(())
}

/// Writes the extended profile: total time, memory peak and metadata.
pub fn write_profile_summary<W: Write>(out: &mut W, profile: &ProfileData) -> io::Result<()> {
    writeln!(out, "\nProfile summary")?;
    writeln!(
        out,
        "  {:<18} {:.3} ms",
        "total",
        profile.total_duration().as_secs_f64() * 1000.0
    )?;

    if let Some(memory_peak) = profile.memory_peak {
        writeln!(
            out,
            "  {:<18} {}",
            "memory peak",
            format_size(memory_peak, DECIMAL)
        )?;
    }

    for (key, value) in &profile.metadata {
        writeln!(out, "  {:<18} {}", key, value)?;
    }

    Ok(())
}

/// A convenience macro for timing a block of code.
///
/// Returns a tuple `(result, PhaseResult)`.
///
/// # Example
/// ```rust
/// use wordscan::time_phase;
///
/// let (result, timing) = time_phase!("counting words", {
///     // ... some expensive operation ...
///     42
/// });
/// assert_eq!(result, 42);
/// assert_eq!(timing.name, "counting words");
/// ```
#[macro_export]
macro_rules! time_phase {
    ($name:expr, $code:block) => {{
        let timer = $crate::metrics::PhaseTimer::new($name);
        let result = $code;
        let timing = timer.finish();
        (result, timing)
    }};
}
