//! Output format selection.
//!
//! # Example
//!
//! ```rust
//! use chatframe::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("records.jsonl").unwrap();
//! assert_eq!(format, OutputFormat::Jsonl);
//! assert_eq!(format.extension(), "jsonl");
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ChatframeError, Result};
use crate::record::ChatRecord;

/// Serialization format for a record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with a header row (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// JSON Lines - one JSON object per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatframeError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatframeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatframeError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes records to `writer` in the given format.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "csv-output", feature = "json-output"))]
/// # fn main() -> chatframe::Result<()> {
/// use chatframe::format::{OutputFormat, write_to};
///
/// let records = chatframe::parse_transcript("12/11/2025, 21:55 - Alice: Hi\n")?;
/// let mut out = Vec::new();
/// write_to(&mut out, &records, OutputFormat::Jsonl)?;
///
/// assert!(String::from_utf8(out).unwrap().contains("\"author\":\"Alice\""));
/// # Ok(())
/// # }
/// # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
/// # fn main() {}
/// ```
#[allow(unused_variables)]
pub fn write_to<W: Write>(writer: W, records: &[ChatRecord], format: OutputFormat) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(records, writer),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(records, writer),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(records, writer),
        #[allow(unreachable_patterns)]
        _ => Err(ChatframeError::invalid_format(
            "output",
            format!("{format} output requires the matching cargo feature"),
        )),
    }
}

/// Renders records to a string in the given format.
pub fn render(records: &[ChatRecord], format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_to(&mut buffer, records, format)?;
    String::from_utf8(buffer).map_err(|err| ChatframeError::Utf8 {
        context: format!("{format} output"),
        source: err.utf8_error(),
    })
}
