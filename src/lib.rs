//! # Chatframe
//!
//! Turns an exported WhatsApp chat transcript into an ordered sequence of
//! typed records, ready for counting, grouping and charting.
//!
//! ## Overview
//!
//! A transcript is one block of text in which every entry starts with a
//! `D/M/Y, H:MM - ` timestamp:
//!
//! ```text
//! 12/11/2025, 21:55 - Alice: Hi there
//! 12/11/2025, 22:00 - Bob created group "Test"
//! ```
//!
//! Each entry becomes a [`ChatRecord`] carrying the resolved instant, the
//! author (absent for system notifications), the message, and derived
//! calendar fields including a one-hour bucket label such as `"21-22"`.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatframe::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = parse_transcript(
//!         "12/11/2025, 21:55 - Alice: Hi there\n12/11/2025, 22:00 - Bob created group \"Test\"\n",
//!     )?;
//!
//!     assert_eq!(records[0].author(), Some("Alice"));
//!     assert_eq!(records[0].hour_bucket(), "21-22");
//!     assert!(records[1].is_notification());
//!     Ok(())
//! }
//! ```
//!
//! ## Year formats
//!
//! Exports write years as `2025` or `25`. The whole transcript is parsed with
//! four-digit years first; if any entry fails, the whole transcript is
//! reparsed with two-digit years. A transcript that fits neither yields
//! [`ChatframeError::MalformedTimestampBatch`] and no records.
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the pipeline entry point
//! - [`parsing`] - the individual stages (split, resolve, classify, derive)
//! - [`record`] - [`ChatRecord`], [`RawEntry`](record::RawEntry), [`authors`]
//! - [`config`] - [`ParseConfig`](config::ParseConfig)
//! - [`format`] / [`output`] - CSV, JSON and JSONL serializers
//! - [`error`] - [`ChatframeError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatframeError, Result};
pub use parser::parse_transcript;
pub use record::{ChatRecord, authors};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatframe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatRecord, authors, parse_transcript};

    // Error types
    pub use crate::error::{ChatframeError, Result};

    // Pipeline
    pub use crate::config::ParseConfig;
    pub use crate::parser::{ParsedTranscript, TranscriptParser};
    pub use crate::parsing::{YearFormat, hour_bucket};
    pub use crate::record::NOTIFICATION_LABEL;

    // Output
    pub use crate::format::{OutputFormat, render, write_to};
}
