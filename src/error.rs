//! Unified error types for chatframe.
//!
//! This module provides a single [`ChatframeError`] enum that covers every
//! failure the pipeline and its output helpers can report. Parsing never
//! half-succeeds: a call returns either the complete record sequence or one
//! of these errors, never both.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parsing::timestamp::TimestampError;

/// A specialized [`Result`] type for chatframe operations.
///
/// # Example
///
/// ```rust
/// use chatframe::error::Result;
/// use chatframe::ChatRecord;
///
/// fn load() -> Result<Vec<ChatRecord>> {
///     chatframe::parse_transcript("")
/// }
///
/// assert!(load().unwrap().is_empty());
/// ```
pub type Result<T> = std::result::Result<T, ChatframeError>;

/// The error type for all chatframe operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatframeError {
    /// The input contained no timestamp boundary at all.
    ///
    /// Only returned when [`ParseConfig::allow_empty`](crate::config::ParseConfig::allow_empty)
    /// is `false`; otherwise such input yields zero records.
    #[error("No chat entries found: input contains no `D/M/YY, H:MM - ` timestamp boundaries")]
    EmptyOrUnrecognizedInput,

    /// No configured year format could resolve every timestamp in the transcript.
    ///
    /// Identifies the first entry that broke the format which got furthest.
    #[error("Malformed timestamp batch: entry {position} ({raw:?}) could not be parsed: {reason}")]
    MalformedTimestampBatch {
        /// Zero-based position of the entry in the transcript
        position: usize,
        /// The exact boundary text captured for that entry
        raw: String,
        /// Why the timestamp was rejected
        #[source]
        reason: TimestampError,
    },

    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript bytes were not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// An output format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being selected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::str::Utf8Error> for ChatframeError {
    fn from(err: std::str::Utf8Error) -> Self {
        ChatframeError::Utf8 {
            context: "transcript input".to_string(),
            source: err,
        }
    }
}

impl From<std::string::FromUtf8Error> for ChatframeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        err.utf8_error().into()
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatframeError {
    /// Creates a malformed timestamp batch error.
    pub fn malformed_timestamp(
        position: usize,
        raw: impl Into<String>,
        reason: TimestampError,
    ) -> Self {
        ChatframeError::MalformedTimestampBatch {
            position,
            raw: raw.into(),
            reason,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatframeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_at(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        ChatframeError::Io(io::Error::new(
            err.kind(),
            format!("{}: {err}", path.display()),
        ))
    }

    /// Returns `true` if the input had no recognizable entries.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ChatframeError::EmptyOrUnrecognizedInput)
    }

    /// Returns `true` if the timestamp batch could not be resolved.
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, ChatframeError::MalformedTimestampBatch { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatframeError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatframeError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
