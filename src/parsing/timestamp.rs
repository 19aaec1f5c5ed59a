//! Timestamp resolution with a transcript-wide year format decision.
//!
//! Exports write the year either as `2025` or as `25` in the same slot:
//! `12/11/2025, 21:55 - ` and `12/11/25, 21:55 - `. A transcript uses one
//! convention throughout, so the format is decided once for the whole batch:
//! every timestamp is tried with the first format, and only if any of them
//! fails is the entire batch reparsed with the next one.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DEFAULT_TWO_DIGIT_PIVOT;

/// Width of the year field in a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearFormat {
    /// Day/month/four-digit year, e.g. `12/11/2025, 21:55 - `
    FourDigit,
    /// Day/month/two-digit year, e.g. `12/11/25, 21:55 - `
    TwoDigit,
}

impl YearFormat {
    /// Number of digits the year field must have.
    pub fn year_digits(self) -> usize {
        match self {
            YearFormat::FourDigit => 4,
            YearFormat::TwoDigit => 2,
        }
    }

    /// strftime-style description of the accepted shape.
    pub fn pattern(self) -> &'static str {
        match self {
            YearFormat::FourDigit => "%d/%m/%Y, %H:%M - ",
            YearFormat::TwoDigit => "%d/%m/%y, %H:%M - ",
        }
    }

    /// Parses one boundary string under this year format.
    ///
    /// Two-digit years below `pivot` resolve to the 2000s, the rest to the 1900s.
    pub fn parse(self, text: &str, pivot: u8) -> Result<NaiveDateTime, TimestampError> {
        let fields = TimestampFields::split(text)?;

        if fields.year.len() != self.year_digits() {
            return Err(TimestampError::YearWidth {
                expected: self.year_digits(),
                found: fields.year.len(),
            });
        }

        let year_value: i32 = number(fields.year)?;
        let year = match self {
            YearFormat::FourDigit => year_value,
            YearFormat::TwoDigit if year_value < i32::from(pivot) => 2000 + year_value,
            YearFormat::TwoDigit => 1900 + year_value,
        };

        let hour = number(fields.hour)?;
        let minute = number(fields.minute)?;
        NaiveDate::from_ymd_opt(year, number(fields.month)?, number(fields.day)?)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .ok_or(TimestampError::OutOfRange)
    }
}

impl std::fmt::Display for YearFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearFormat::FourDigit => write!(f, "four-digit year"),
            YearFormat::TwoDigit => write!(f, "two-digit year"),
        }
    }
}

/// Why a single timestamp was rejected by a year format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The text is not `D/M/Y, H:MM - ` shaped.
    #[error("expected `D/M/Y, H:MM - `, got {0:?}")]
    Shape(String),
    /// The year field has the wrong number of digits for this format.
    #[error("year has {found} digits, expected {expected}")]
    YearWidth {
        /// Digits required by the format
        expected: usize,
        /// Digits present in the text
        found: usize,
    },
    /// The fields are numeric but do not name a real calendar minute.
    #[error("date or time out of range")]
    OutOfRange,
}

/// Numeric fields of a boundary string, still as text.
struct TimestampFields<'a> {
    day: &'a str,
    month: &'a str,
    year: &'a str,
    hour: &'a str,
    minute: &'a str,
}

impl<'a> TimestampFields<'a> {
    fn split(text: &'a str) -> Result<Self, TimestampError> {
        let shape = || TimestampError::Shape(text.to_string());

        let stripped = text.trim_end();
        let stripped = stripped.strip_suffix('-').ok_or_else(shape)?.trim_end();
        let (date, time) = stripped.split_once(',').ok_or_else(shape)?;

        let mut date_parts = date.split('/');
        let (Some(day), Some(month), Some(year), None) = (
            date_parts.next(),
            date_parts.next(),
            date_parts.next(),
            date_parts.next(),
        ) else {
            return Err(shape());
        };
        let (hour, minute) = time.trim_start().split_once(':').ok_or_else(shape)?;

        let fields = Self {
            day,
            month,
            year,
            hour,
            minute,
        };
        let all_digits = [day, month, year, hour, minute]
            .iter()
            .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()));
        if all_digits { Ok(fields) } else { Err(shape()) }
    }
}

fn number<T: std::str::FromStr>(field: &str) -> Result<T, TimestampError> {
    field.parse().map_err(|_| TimestampError::OutOfRange)
}

/// A timestamp that could not be resolved, with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFailure {
    /// Zero-based entry position
    pub position: usize,
    /// The exact boundary text
    pub raw: String,
    /// The format that was being applied
    pub format: YearFormat,
    /// Why it failed
    pub reason: TimestampError,
}

/// Outcome of resolving a whole batch of timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchResolution {
    /// Every timestamp parsed with a four-digit year.
    FourDigitYear(Vec<NaiveDateTime>),
    /// Every timestamp parsed with a two-digit year.
    TwoDigitYear(Vec<NaiveDateTime>),
    /// No configured format resolved the whole batch.
    ///
    /// Carries the first failure of the format that got furthest through
    /// the batch (ties go to the format tried first).
    Failed(TimestampFailure),
}

impl BatchResolution {
    fn resolved(format: YearFormat, instants: Vec<NaiveDateTime>) -> Self {
        match format {
            YearFormat::FourDigit => BatchResolution::FourDigitYear(instants),
            YearFormat::TwoDigit => BatchResolution::TwoDigitYear(instants),
        }
    }

    /// The committed format, if the batch resolved.
    pub fn format(&self) -> Option<YearFormat> {
        match self {
            BatchResolution::FourDigitYear(_) => Some(YearFormat::FourDigit),
            BatchResolution::TwoDigitYear(_) => Some(YearFormat::TwoDigit),
            BatchResolution::Failed(_) => None,
        }
    }
}

/// Resolves every timestamp in `raws` with one shared year format.
///
/// Formats are tried in order; the first one that parses all timestamps is
/// committed. An empty batch resolves under the first format.
///
/// # Example
///
/// ```rust
/// use chatframe::parsing::{BatchResolution, YearFormat, resolve_batch};
///
/// let raws = ["12/11/25, 21:55 - ", "13/11/25, 08:01 - "];
/// let resolution = resolve_batch(&raws, &[YearFormat::FourDigit, YearFormat::TwoDigit], 69);
///
/// assert!(matches!(resolution, BatchResolution::TwoDigitYear(ref v) if v.len() == 2));
/// ```
pub fn resolve_batch<S: AsRef<str>>(
    raws: &[S],
    formats: &[YearFormat],
    pivot: u8,
) -> BatchResolution {
    let mut furthest: Option<TimestampFailure> = None;

    for &format in formats {
        match resolve_with(raws, format, pivot) {
            Ok(instants) => return BatchResolution::resolved(format, instants),
            Err(failure) => {
                if furthest.as_ref().is_none_or(|f| failure.position > f.position) {
                    furthest = Some(failure);
                }
            }
        }
    }

    match furthest {
        Some(failure) => BatchResolution::Failed(failure),
        // No formats configured: nothing can resolve, report the first entry
        None => BatchResolution::Failed(TimestampFailure {
            position: 0,
            raw: raws.first().map(|r| r.as_ref().to_string()).unwrap_or_default(),
            format: YearFormat::FourDigit,
            reason: TimestampError::Shape("no year formats configured".to_string()),
        }),
    }
}

/// Resolves a batch with the default order and pivot.
pub fn resolve_batch_default<S: AsRef<str>>(raws: &[S]) -> BatchResolution {
    resolve_batch(
        raws,
        &[YearFormat::FourDigit, YearFormat::TwoDigit],
        DEFAULT_TWO_DIGIT_PIVOT,
    )
}

fn resolve_with<S: AsRef<str>>(
    raws: &[S],
    format: YearFormat,
    pivot: u8,
) -> Result<Vec<NaiveDateTime>, TimestampFailure> {
    raws.iter()
        .enumerate()
        .map(|(position, raw)| {
            format
                .parse(raw.as_ref(), pivot)
                .map_err(|reason| TimestampFailure {
                    position,
                    raw: raw.as_ref().to_string(),
                    format,
                    reason,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_four_digit() {
        let ts = YearFormat::FourDigit
            .parse("12/11/2025, 21:55 - ", 69)
            .unwrap();
        assert_eq!(ts, ymd_hm(2025, 11, 12, 21, 55));
    }

    #[test]
    fn test_parse_two_digit() {
        let ts = YearFormat::TwoDigit.parse("1/2/25, 9:05 - ", 69).unwrap();
        assert_eq!(ts, ymd_hm(2025, 2, 1, 9, 5));
    }

    #[test]
    fn test_two_digit_pivot_window() {
        let low = YearFormat::TwoDigit.parse("1/1/68, 00:00 - ", 69).unwrap();
        let high = YearFormat::TwoDigit.parse("1/1/69, 00:00 - ", 69).unwrap();
        assert_eq!(low.year(), 2068);
        assert_eq!(high.year(), 1969);

        let all_modern = YearFormat::TwoDigit.parse("1/1/99, 00:00 - ", 100).unwrap();
        assert_eq!(all_modern.year(), 2099);
    }

    #[test]
    fn test_four_digit_rejects_two_digit_year() {
        let err = YearFormat::FourDigit
            .parse("12/11/25, 21:55 - ", 69)
            .unwrap_err();
        assert_eq!(
            err,
            TimestampError::YearWidth {
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_two_digit_rejects_four_digit_year() {
        let err = YearFormat::TwoDigit
            .parse("12/11/2025, 21:55 - ", 69)
            .unwrap_err();
        assert!(matches!(err, TimestampError::YearWidth { expected: 2, found: 4 }));
    }

    #[test]
    fn test_impossible_calendar_values() {
        assert_eq!(
            YearFormat::FourDigit.parse("32/13/2025, 25:70 - ", 69),
            Err(TimestampError::OutOfRange)
        );
        assert_eq!(
            YearFormat::FourDigit.parse("29/02/2023, 10:00 - ", 69),
            Err(TimestampError::OutOfRange)
        );
        assert!(YearFormat::FourDigit.parse("29/02/2024, 10:00 - ", 69).is_ok());
    }

    #[test]
    fn test_shape_errors() {
        for bad in ["", "12/11/2025 21:55 - ", "12-11-2025, 21:55 - ", "a/b/2025, 1:00 - "] {
            assert!(
                matches!(YearFormat::FourDigit.parse(bad, 69), Err(TimestampError::Shape(_))),
                "{bad:?} should be a shape error"
            );
        }
    }

    #[test]
    fn test_minute_precision() {
        let ts = YearFormat::FourDigit
            .parse("01/01/2024, 00:00 - ", 69)
            .unwrap();
        assert_eq!(ts.second(), 0);
        assert_eq!(ts.nanosecond(), 0);
    }

    #[test]
    fn test_batch_all_four_digit() {
        let raws = ["12/11/2025, 21:55 - ", "13/11/2025, 08:00 - "];
        let resolution = resolve_batch_default(&raws);
        assert_eq!(resolution.format(), Some(YearFormat::FourDigit));
        assert_eq!(
            resolution,
            BatchResolution::FourDigitYear(vec![
                ymd_hm(2025, 11, 12, 21, 55),
                ymd_hm(2025, 11, 13, 8, 0),
            ])
        );
    }

    #[test]
    fn test_batch_falls_back_as_a_whole() {
        let raws = ["12/11/25, 21:55 - ", "13/11/25, 08:00 - "];
        let resolution = resolve_batch_default(&raws);
        assert_eq!(resolution.format(), Some(YearFormat::TwoDigit));
    }

    #[test]
    fn test_batch_mixed_widths_fail() {
        let raws = ["12/11/2025, 21:55 - ", "13/11/25, 08:00 - "];
        let BatchResolution::Failed(failure) = resolve_batch_default(&raws) else {
            panic!("mixed widths must not resolve");
        };
        // The four-digit pass got further, so its failure names the odd entry out
        assert_eq!(failure.position, 1);
        assert_eq!(failure.format, YearFormat::FourDigit);
        assert_eq!(failure.raw, "13/11/25, 08:00 - ");
    }

    #[test]
    fn test_batch_malformed_single() {
        let BatchResolution::Failed(failure) = resolve_batch_default(&["32/13/2025, 25:70 - "])
        else {
            panic!("impossible date must not resolve");
        };
        assert_eq!(failure.position, 0);
        assert_eq!(failure.raw, "32/13/2025, 25:70 - ");
        assert_eq!(failure.format, YearFormat::FourDigit);
        assert_eq!(failure.reason, TimestampError::OutOfRange);
    }

    #[test]
    fn test_batch_failure_points_at_bad_entry() {
        let raws = ["1/1/2024, 10:00 - ", "2/1/2024, 10:00 - ", "30/2/2024, 10:00 - "];
        let BatchResolution::Failed(failure) = resolve_batch_default(&raws) else {
            panic!("30 February must not resolve");
        };
        assert_eq!(failure.position, 2);
        assert_eq!(failure.raw, "30/2/2024, 10:00 - ");
    }

    #[test]
    fn test_batch_failure_in_two_digit_transcript() {
        // The four-digit pass stops at entry 0, the two-digit pass at the bad date
        let raws = ["1/1/24, 10:00 - ", "2/1/24, 10:00 - ", "30/2/24, 10:00 - "];
        let BatchResolution::Failed(failure) = resolve_batch_default(&raws) else {
            panic!("30 February must not resolve");
        };
        assert_eq!(failure.position, 2);
        assert_eq!(failure.format, YearFormat::TwoDigit);
        assert_eq!(failure.raw, "30/2/24, 10:00 - ");
        assert_eq!(failure.reason, TimestampError::OutOfRange);
    }

    #[test]
    fn test_batch_empty_resolves_first_format() {
        let raws: [&str; 0] = [];
        assert_eq!(
            resolve_batch_default(&raws),
            BatchResolution::FourDigitYear(vec![])
        );
    }

    #[test]
    fn test_batch_no_formats() {
        let resolution = resolve_batch(&["12/11/2025, 21:55 - "], &[], 69);
        assert!(matches!(resolution, BatchResolution::Failed(_)));
    }
}
