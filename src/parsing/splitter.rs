//! Entry boundary detection.
//!
//! Android-style exports start every entry with `D/M/Y, H:MM - `:
//!
//! ```text
//! 12/11/2025, 21:55 - Alice: Hi there
//! 12/11/2025, 22:00 - Bob created group "Test"
//! ```
//!
//! The splitter does not look at lines. It scans the whole blob for boundary
//! matches, so a multi-line message stays attached to the boundary before it.

use regex::Regex;

use crate::record::RawEntry;

/// Boundary shape: day/month/2-or-4-digit year, comma, whitespace, H:MM, ` - `.
///
/// Digits are ASCII only, the same set the timestamp resolver accepts.
pub const BOUNDARY_PATTERN: &str =
    r"[0-9]{1,2}/[0-9]{1,2}/(?:[0-9]{4}|[0-9]{2}),\s[0-9]{1,2}:[0-9]{2}\s-\s";

/// Splits transcripts into timestamp-prefixed raw entries.
#[derive(Debug, Clone)]
pub struct EntrySplitter {
    boundary: Regex,
}

impl EntrySplitter {
    /// Creates a splitter for the standard boundary shape.
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(BOUNDARY_PATTERN).expect("boundary pattern is valid"),
        }
    }

    /// Returns the compiled boundary regex.
    pub fn boundary(&self) -> &Regex {
        &self.boundary
    }

    /// Splits `text` into entries, in order of appearance.
    ///
    /// Text before the first boundary is discarded. Input without any
    /// boundary yields an empty vector.
    pub fn split(&self, text: &str) -> Vec<RawEntry> {
        let boundaries: Vec<_> = self.boundary.find_iter(text).collect();

        boundaries
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let body_end = boundaries.get(i + 1).map_or(text.len(), |next| next.start());
                RawEntry::new(m.as_str(), &text[m.end()..body_end])
            })
            .collect()
    }
}

impl Default for EntrySplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `text` with a freshly compiled [`EntrySplitter`].
///
/// # Example
///
/// ```rust
/// use chatframe::parsing::split_entries;
///
/// let entries = split_entries("12/11/2025, 21:55 - Alice: Hi\n12/11/2025, 22:00 - Bob: Yo\n");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].timestamp_text, "12/11/2025, 21:55 - ");
/// assert_eq!(entries[1].body_text, "Bob: Yo\n");
/// ```
pub fn split_entries(text: &str) -> Vec<RawEntry> {
    EntrySplitter::new().split(text)
}
