//! Transcript-to-record pipeline.
//!
//! [`TranscriptParser`] runs the four stages in order:
//!
//! 1. split the blob into [`RawEntry`] values at each `D/M/Y, H:MM - ` boundary
//! 2. resolve all boundaries with one batch-wide [`YearFormat`]
//! 3. classify each body as authored message or system notification
//! 4. derive calendar fields and the hour bucket
//!
//! Step 2 is the only step that looks at more than one entry. Once it has
//! committed a format, steps 3 and 4 are independent per entry and may run on
//! the rayon pool (`parallel` feature, [`ParseConfig::parallel`]); output
//! order always matches transcript order.
//!
//! # Example
//!
//! ```rust
//! use chatframe::parser::TranscriptParser;
//! use chatframe::parsing::YearFormat;
//!
//! let parser = TranscriptParser::new();
//! let parsed = parser.parse_detailed("12/11/25, 21:55 - Alice: Hi\n12/11/25, 22:00 - Bob: Yo\n")?;
//!
//! assert_eq!(parsed.year_format, Some(YearFormat::TwoDigit));
//! assert_eq!(parsed.records.len(), 2);
//! # Ok::<(), chatframe::ChatframeError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::config::ParseConfig;
use crate::error::{ChatframeError, Result};
use crate::parsing::{BatchResolution, EntrySplitter, YearFormat, classify_body, resolve_batch};
use crate::record::{ChatRecord, RawEntry};

/// Records of one transcript together with the committed year format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranscript {
    /// One record per entry, in transcript order
    pub records: Vec<ChatRecord>,
    /// The format every timestamp was resolved with; `None` when there were no entries
    pub year_format: Option<YearFormat>,
}

/// Parser for `D/M/Y, H:MM - `-delimited chat transcripts.
///
/// Holds its configuration and compiled boundary regex. Parsing takes
/// `&self`, so one parser can serve many transcripts and threads.
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    config: ParseConfig,
    splitter: EntrySplitter,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParseConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config,
            splitter: EntrySplitter::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    pub fn parse(&self, path: &Path) -> Result<Vec<ChatRecord>> {
        let bytes = fs::read(path).map_err(|e| ChatframeError::io_at(path, e))?;
        self.parse_bytes(&bytes)
    }

    /// Parses transcript bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<ChatRecord>> {
        let text = std::str::from_utf8(bytes)?;
        self.parse_str(text)
    }

    /// Parses a transcript held in memory.
    pub fn parse_str(&self, text: &str) -> Result<Vec<ChatRecord>> {
        self.parse_detailed(text).map(|parsed| parsed.records)
    }

    /// Parses a transcript and reports which year format was committed.
    pub fn parse_detailed(&self, text: &str) -> Result<ParsedTranscript> {
        let entries = self.splitter.split(text);

        if entries.is_empty() {
            return if self.config.allow_empty {
                Ok(ParsedTranscript {
                    records: Vec::new(),
                    year_format: None,
                })
            } else {
                Err(ChatframeError::EmptyOrUnrecognizedInput)
            };
        }

        let raws: Vec<&str> = entries.iter().map(|e| e.timestamp_text.as_str()).collect();
        let resolution = resolve_batch(
            raws.as_slice(),
            &self.config.year_formats,
            self.config.two_digit_pivot,
        );

        let year_format = resolution.format();
        let instants = match resolution {
            BatchResolution::FourDigitYear(instants) | BatchResolution::TwoDigitYear(instants) => {
                instants
            }
            BatchResolution::Failed(failure) => {
                return Err(ChatframeError::malformed_timestamp(
                    failure.position,
                    failure.raw,
                    failure.reason,
                ));
            }
        };

        Ok(ParsedTranscript {
            records: self.build_records(&entries, instants),
            year_format,
        })
    }

    #[cfg(feature = "parallel")]
    fn build_records(&self, entries: &[RawEntry], instants: Vec<NaiveDateTime>) -> Vec<ChatRecord> {
        use rayon::prelude::*;

        if self.config.parallel {
            // Indexed parallel collect keeps transcript order
            entries
                .par_iter()
                .zip(instants.into_par_iter())
                .map(|(entry, instant)| build_record(entry, instant))
                .collect()
        } else {
            build_sequential(entries, instants)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn build_records(&self, entries: &[RawEntry], instants: Vec<NaiveDateTime>) -> Vec<ChatRecord> {
        build_sequential(entries, instants)
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

fn build_sequential(entries: &[RawEntry], instants: Vec<NaiveDateTime>) -> Vec<ChatRecord> {
    entries
        .iter()
        .zip(instants)
        .map(|(entry, instant)| build_record(entry, instant))
        .collect()
}

fn build_record(entry: &RawEntry, instant: NaiveDateTime) -> ChatRecord {
    let kind = classify_body(&entry.body_text);
    ChatRecord::from_parts(instant, &kind, &entry.timestamp_text)
}

/// Parses `text` with the default configuration.
///
/// # Example
///
/// ```rust
/// let records = chatframe::parse_transcript(
///     "12/11/2025, 21:55 - Alice: Hi there\n12/11/2025, 22:00 - Bob created group \"Test\"\n",
/// )?;
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].author(), Some("Alice"));
/// assert_eq!(records[1].author(), None);
/// # Ok::<(), chatframe::ChatframeError>(())
/// ```
pub fn parse_transcript(text: &str) -> Result<Vec<ChatRecord>> {
    TranscriptParser::new().parse_str(text)
}
