//! Main entry point for the `wordscan` CLI application.
//!
//! `wordscan` walks a directory tree, keeps the files with a target extension
//! (`.txt` by default) and counts the words in each, either sequentially or on
//! the rayon thread pool.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Sets up the thread pool, logging and glob-based exclusion rules
//! - Delegates traversal to [`gather_target_files`] and counting to [`count_all`]
//! - Prints phase timings, totals and the optional per-file listing
//!
//! # Usage
//! `wordscan <path> <parallel:1|0> [list]`

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use wordscan::cli::{Args, is_missing_arguments};
use wordscan::counter::count_all;
use wordscan::data::ScanReport;
use wordscan::logging::init_logging;
use wordscan::metrics::{ProfileData, rss_after_phase, write_phase_timings, write_profile_summary};
use wordscan::output::terminal::write_banner;
use wordscan::output::render_terminal;
use wordscan::scan::{ScanOptions, gather_target_files};
use wordscan::thread_pool::configure_pool;
use wordscan::time_phase;
use wordscan::utils::{
    build_exclude_matcher, expand_exclude_patterns, normalize_extension, sort_records,
};

fn usage() -> String {
    let program = std::env::args().next().unwrap_or_else(|| "wordscan".to_string());
    format!("Usage: {} <path> <parallel:1|0> [list]", program)
}

/// Builds traversal options from the CLI flags.
fn scan_options(args: &Args) -> Result<ScanOptions> {
    let patterns = expand_exclude_patterns(&args.exclude);
    let exclude = build_exclude_matcher(&patterns)?;
    Ok(ScanOptions {
        extension: normalize_extension(&args.ext).to_string(),
        exclude,
        show_progress: !args.no_progress,
    })
}

// Parse args → configure pool → gather_target_files → count_all → render
fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_banner(&mut out, args.mode)?;

    let threads = if args.mode.is_parallel() {
        configure_pool(args.threads_strategy, args.threads)?
    } else {
        debug!("sequential mode, thread pool left unconfigured");
        1
    };

    let opts = scan_options(args)?;
    let mut profile = ProfileData::new();

    let paths = gather_target_files(&args.path, &opts, args.mode, &mut profile);
    writeln!(out, "number of files: {}", paths.len())?;

    let (mut records, timing) = time_phase!("counting words", { count_all(&paths, args.mode) });
    profile.add_phase(timing);

    if let Some(key) = args.sort {
        sort_records(&mut records, key);
    }
    let report = ScanReport::new(records);

    write_phase_timings(&mut out, &profile)?;
    render_terminal(&mut out, &report, args.list_enabled())?;

    if args.profile {
        profile.memory_peak = rss_after_phase();
        profile.add_metadata("threads", &threads.to_string());
        profile.add_metadata("unreadable files", &report.unreadable.to_string());
        write_profile_summary(&mut out, &profile)?;
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if is_missing_arguments(&err) => {
            println!("{}", usage());
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => err.exit(),
    };

    init_logging(&args.log_level);
    run(&args)?;

    Ok(ExitCode::SUCCESS)
}
