//! Configuration for the transcript pipeline.
//!
//! Everything that shapes a parse is carried in a [`ParseConfig`] value owned
//! by the [`TranscriptParser`](crate::parser::TranscriptParser). There is no
//! process-wide state, so differently configured parsers can run side by side.
//!
//! # Example
//!
//! ```rust
//! use chatframe::config::ParseConfig;
//! use chatframe::parser::TranscriptParser;
//! use chatframe::parsing::YearFormat;
//!
//! let config = ParseConfig::new()
//!     .with_year_formats(vec![YearFormat::TwoDigit])
//!     .with_allow_empty(false);
//!
//! let parser = TranscriptParser::with_config(config);
//! assert!(!parser.config().allow_empty);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::YearFormat;

/// Default two-digit year pivot: `00..=68` map to the 2000s, `69..=99` to the 1900s.
pub const DEFAULT_TWO_DIGIT_PIVOT: u8 = 69;

/// Configuration for transcript parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Year formats to try, in order, against the whole timestamp batch
    /// (default: four-digit, then two-digit)
    pub year_formats: Vec<YearFormat>,

    /// Two-digit years below this value land in the 2000s, the rest in the 1900s (default: 69)
    pub two_digit_pivot: u8,

    /// Return zero records instead of an error when no boundary is found (default: true)
    pub allow_empty: bool,

    /// Classify and derive entries on the rayon pool (default: false)
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            year_formats: vec![YearFormat::FourDigit, YearFormat::TwoDigit],
            two_digit_pivot: DEFAULT_TWO_DIGIT_PIVOT,
            allow_empty: true,
            parallel: false,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordered list of year formats attempted for the batch.
    #[must_use]
    pub fn with_year_formats(mut self, formats: Vec<YearFormat>) -> Self {
        self.year_formats = formats;
        self
    }

    /// Sets the two-digit year pivot.
    ///
    /// Values above 100 are clamped, which sends every two-digit year to the 2000s.
    #[must_use]
    pub fn with_two_digit_pivot(mut self, pivot: u8) -> Self {
        self.two_digit_pivot = pivot.min(100);
        self
    }

    /// Sets whether input without any boundary yields zero records.
    #[must_use]
    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Enables or disables parallel per-entry processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }
}
