//! `wordcount`: counts the words of an in-memory string with the word-count kernel.
//!
//! # Usage
//! `wordcount <input> <parallel:1|0> [--text TEXT]`
//!
//! `<input>` names a file to load, or `-` for standard input. With `--text` the
//! given string is counted and `<input>` is ignored.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use wordscan::cli::{WordCountArgs, is_missing_arguments};
use wordscan::logging::init_logging;
use wordscan::metrics::{ProfileData, write_phase_timings};
use wordscan::output::terminal::write_banner;
use wordscan::time_phase;
use wordscan::words::word_count;

fn usage() -> String {
    let program = std::env::args().next().unwrap_or_else(|| "wordcount".to_string());
    format!("Usage: {} <input> <parallel:1|0>", program)
}

/// Loads the text to count.
fn load_text(args: &WordCountArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if args.input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read standard input")?;
        return Ok(String::from_utf8_lossy(&buf).into_owned());
    }

    let bytes = fs::read(&args.input).with_context(|| format!("Failed to read '{}'", args.input))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn run(args: &WordCountArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_banner(&mut out, args.mode)?;

    let mut profile = ProfileData::new();
    let (text, timing) = time_phase!("loading input", { load_text(args) });
    let text = text?;
    profile.add_phase(timing);

    let (words, timing) = time_phase!("word count", { word_count(&text, args.mode) });
    profile.add_phase(timing);

    write_phase_timings(&mut out, &profile)?;
    writeln!(out, "word count: {}", words)?;

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = match WordCountArgs::try_parse() {
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
