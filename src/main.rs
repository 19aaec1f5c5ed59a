//! # chatframe CLI
//!
//! Command-line interface for the chatframe library.

use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatframe::cli::Args;
use chatframe::format::{OutputFormat, write_to};
use chatframe::parser::TranscriptParser;
use chatframe::{ChatframeError, authors};

fn main() {
    let args = <Args as ClapParser>::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // An already installed global subscriber is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if let Err(e) = run(&args) {
        tracing::debug!(error = ?e, "parse failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatframeError> {
    let start = Instant::now();
    let parser = TranscriptParser::with_config(args.parse_config());
    tracing::debug!(config = ?parser.config(), input = %args.input.display(), "starting parse");

    let bytes = std::fs::read(&args.input).map_err(|e| ChatframeError::io_at(&args.input, e))?;
    tracing::debug!(bytes = bytes.len(), "read transcript");

    let text = String::from_utf8(bytes)?;
    let parsed = parser.parse_detailed(&text)?;
    tracing::debug!(
        records = parsed.records.len(),
        year_format = ?parsed.year_format,
        authors = authors(&parsed.records).len(),
        elapsed_ms = start.elapsed().as_millis(),
        "parsed transcript"
    );

    let format: OutputFormat = args.format.into();
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| ChatframeError::io_at(path, e))?;
            write_to(BufWriter::new(file), &parsed.records, format)?;
            tracing::info!(path = %path.display(), %format, "records written");
        }
        None => write_to(io::stdout().lock(), &parsed.records, format)?,
    }

    tracing::debug!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}
