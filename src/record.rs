//! Records produced by the transcript pipeline.
//!
//! [`RawEntry`] is the transient output of the splitter. [`ChatRecord`] is the
//! finished unit handed to aggregation and charting code: one per entry, in
//! transcript order.
//!
//! # Example
//!
//! ```
//! use chatframe::parse_transcript;
//!
//! let records = parse_transcript("12/11/2025, 21:55 - Alice: Hi there\n")?;
//! let record = &records[0];
//!
//! assert_eq!(record.author(), Some("Alice"));
//! assert_eq!(record.message(), "Hi there");
//! assert_eq!(record.hour_bucket(), "21-22");
//! assert_eq!(record.day_name(), "Wednesday");
//! # Ok::<(), chatframe::ChatframeError>(())
//! ```

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::{EntryKind, TemporalFeatures, derive_features};

/// User label given to system notifications by tabular consumers.
pub const NOTIFICATION_LABEL: &str = "group_notification";

/// One timestamp-prefixed slice of the transcript, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// The exact boundary text, e.g. `"12/11/2025, 21:55 - "`
    pub timestamp_text: String,
    /// Everything up to the next boundary or end of input
    pub body_text: String,
}

impl RawEntry {
    /// Creates an entry from its boundary text and body.
    pub fn new(timestamp_text: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            timestamp_text: timestamp_text.into(),
            body_text: body_text.into(),
        }
    }
}

/// A parsed chat entry with its derived time-of-day features.
///
/// Fields are read through accessors; a record never changes after the
/// pipeline builds it. `author` is either a non-empty string or absent
/// for system notifications.
///
/// # Serialization
///
/// Serializes with the field names below. `author` is `null` for
/// notifications and `instant` is an ISO 8601 local datetime.
///
/// | Field | Type |
/// |-------|------|
/// | `instant` | `NaiveDateTime` (minute precision) |
/// | `author` | `Option<String>` |
/// | `message` | `String` |
/// | `date_only` | `NaiveDate` |
/// | `year`, `month_number`, `day_of_month`, `hour`, `minute` | integers |
/// | `month_name`, `day_name`, `hour_bucket` | `String` |
/// | `raw_timestamp` | `String` |
///
/// Deserialization rebuilds the derived fields from `instant`. A payload
/// with an empty author, a sub-minute instant, or derived fields that
/// disagree with `instant` is rejected with an [`InvalidRecord`] message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct ChatRecord {
    instant: NaiveDateTime,
    author: Option<String>,
    message: String,
    date_only: NaiveDate,
    year: i32,
    month_number: u32,
    month_name: String,
    day_of_month: u32,
    day_name: String,
    hour: u32,
    minute: u32,
    hour_bucket: String,
    raw_timestamp: String,
}

/// Why a deserialized payload cannot become a [`ChatRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecord {
    /// `author` was `""`; notifications use `null`.
    #[error("author must be non-empty or null")]
    EmptyAuthor,
    /// `instant` carried seconds or fractions of a second.
    #[error("instant {0} is not at minute precision")]
    SubMinuteInstant(NaiveDateTime),
    /// A derived field does not match the value computed from `instant`.
    #[error("field `{field}` disagrees with instant {instant}")]
    Inconsistent {
        /// Name of the offending field
        field: &'static str,
        /// The instant the field was checked against
        instant: NaiveDateTime,
    },
}

/// Wire shape of a record. Derived fields are optional and only checked.
#[derive(Deserialize)]
struct RecordFields {
    instant: NaiveDateTime,
    author: Option<String>,
    message: String,
    #[serde(default)]
    raw_timestamp: String,
    date_only: Option<NaiveDate>,
    year: Option<i32>,
    month_number: Option<u32>,
    month_name: Option<String>,
    day_of_month: Option<u32>,
    day_name: Option<String>,
    hour: Option<u32>,
    minute: Option<u32>,
    hour_bucket: Option<String>,
}

impl TryFrom<RecordFields> for ChatRecord {
    type Error = InvalidRecord;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        let instant = fields.instant;
        if instant.second() != 0 || instant.nanosecond() != 0 {
            return Err(InvalidRecord::SubMinuteInstant(instant));
        }
        if fields.author.as_deref() == Some("") {
            return Err(InvalidRecord::EmptyAuthor);
        }

        let record = Self {
            instant,
            author: fields.author,
            message: fields.message,
            raw_timestamp: fields.raw_timestamp,
            ..Self::from_parts(instant, &EntryKind::Notification { message: "" }, "")
        };

        let check = |field: &'static str, agrees: bool| {
            if agrees {
                Ok(())
            } else {
                Err(InvalidRecord::Inconsistent { field, instant })
            }
        };
        check("date_only", fields.date_only.is_none_or(|v| v == record.date_only))?;
        check("year", fields.year.is_none_or(|v| v == record.year))?;
        check("month_number", fields.month_number.is_none_or(|v| v == record.month_number))?;
        check("month_name", fields.month_name.is_none_or(|v| v == record.month_name))?;
        check("day_of_month", fields.day_of_month.is_none_or(|v| v == record.day_of_month))?;
        check("day_name", fields.day_name.is_none_or(|v| v == record.day_name))?;
        check("hour", fields.hour.is_none_or(|v| v == record.hour))?;
        check("minute", fields.minute.is_none_or(|v| v == record.minute))?;
        check("hour_bucket", fields.hour_bucket.is_none_or(|v| v == record.hour_bucket))?;

        Ok(record)
    }
}

impl ChatRecord {
    /// Builds a record from a resolved instant and a classified body.
    pub fn from_parts(instant: NaiveDateTime, kind: &EntryKind<'_>, raw_timestamp: &str) -> Self {
        let TemporalFeatures {
            date_only,
            year,
            month_number,
            month_name,
            day_of_month,
            day_name,
            hour,
            minute,
            hour_bucket,
        } = derive_features(instant);

        Self {
            instant,
            author: kind
                .author()
                .filter(|a| !a.is_empty())
                .map(str::to_string),
            message: kind.message().to_string(),
            date_only,
            year,
            month_number,
            month_name,
            day_of_month,
            day_name,
            hour,
            minute,
            hour_bucket,
            raw_timestamp: raw_timestamp.to_string(),
        }
    }

    /// The resolved local date and time, at minute precision.
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// The author, or `None` for a system notification.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// The author, or [`NOTIFICATION_LABEL`] for a system notification.
    pub fn user(&self) -> &str {
        self.author().unwrap_or(NOTIFICATION_LABEL)
    }

    /// Returns `true` if this entry has no author.
    pub fn is_notification(&self) -> bool {
        self.author.is_none()
    }

    /// The message text, or the notification text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Calendar date of the instant.
    pub fn date_only(&self) -> NaiveDate {
        self.date_only
    }

    /// Four-digit year, even when the export wrote two digits.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month as 1-12.
    pub fn month_number(&self) -> u32 {
        self.month_number
    }

    /// Full English month name, e.g. "November".
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// Day of the month as 1-31.
    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    /// Full English weekday name, e.g. "Wednesday".
    pub fn day_name(&self) -> &str {
        &self.day_name
    }

    /// Hour as 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute as 0-59.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// One-hour bucket label, see [`hour_bucket`](crate::parsing::hour_bucket).
    pub fn hour_bucket(&self) -> &str {
        &self.hour_bucket
    }

    /// The boundary text this record was parsed from.
    pub fn raw_timestamp(&self) -> &str {
        &self.raw_timestamp
    }
}

/// Distinct authors in `records`, sorted, without system notifications.
///
/// # Example
///
/// ```
/// use chatframe::{authors, parse_transcript};
///
/// let records = parse_transcript(
///     "1/1/24, 10:00 - Bob: hi\n1/1/24, 10:01 - Alice added Carol\n1/1/24, 10:02 - Alice: hey\n",
/// )?;
/// assert_eq!(authors(&records), vec!["Alice", "Bob"]);
/// # Ok::<(), chatframe::ChatframeError>(())
/// ```
pub fn authors(records: &[ChatRecord]) -> Vec<&str> {
    records
        .iter()
        .filter_map(ChatRecord::author)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
