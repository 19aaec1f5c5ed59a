//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`FormatArg`] - Output format options, convertible to [`OutputFormat`]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_TWO_DIGIT_PIVOT, ParseConfig};
use crate::format::OutputFormat;

/// Parse an exported WhatsApp chat transcript into one record per entry,
/// with calendar fields and hour buckets.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatframe")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatframe chat.txt
    chatframe chat.txt -f jsonl -o records.jsonl
    chatframe chat.txt --strict --two-digit-pivot 50
    RUST_LOG=debug chatframe chat.txt -f json")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: PathBuf,

    /// Write records here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Fail when the input contains no timestamped entries
    #[arg(long)]
    pub strict: bool,

    /// Classify entries on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Two-digit years below this are 20xx, the rest 19xx
    #[arg(long, value_name = "YY", default_value_t = DEFAULT_TWO_DIGIT_PIVOT)]
    pub two_digit_pivot: u8,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the parser configuration these arguments describe.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new()
            .with_allow_empty(!self.strict)
            .with_parallel(self.parallel)
            .with_two_digit_pivot(self.two_digit_pivot)
    }
}

/// Output format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FormatArg {
    /// CSV with a header row
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// JSON Lines, one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}
