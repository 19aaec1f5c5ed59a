//! Calendar fields and hour buckets derived from a resolved instant.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Calendar breakdown of one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalFeatures {
    /// Calendar date of the instant
    pub date_only: NaiveDate,
    /// Four-digit year
    pub year: i32,
    /// Month as 1-12
    pub month_number: u32,
    /// Full English month name
    pub month_name: String,
    /// Day of the month as 1-31
    pub day_of_month: u32,
    /// Full English weekday name
    pub day_name: String,
    /// Hour as 0-23
    pub hour: u32,
    /// Minute as 0-59
    pub minute: u32,
    /// One-hour bucket label, see [`hour_bucket`]
    pub hour_bucket: String,
}

/// Expands `instant` into its calendar sub-fields.
///
/// Month and weekday names are full English names ("November", "Wednesday").
pub fn derive_features(instant: NaiveDateTime) -> TemporalFeatures {
    let date = instant.date();
    let hour = instant.hour();

    TemporalFeatures {
        date_only: date,
        year: date.year(),
        month_number: date.month(),
        month_name: date.format("%B").to_string(),
        day_of_month: date.day(),
        day_name: date.format("%A").to_string(),
        hour,
        minute: instant.minute(),
        hour_bucket: hour_bucket(hour),
    }
}

/// One-hour bucket label for `hour`.
///
/// `0` is `"00-1"`, `23` is `"23-00"`, everything else is `"{hour}-{hour + 1}"`
/// without zero padding. Downstream grouping matches these labels literally.
///
/// # Example
///
/// ```rust
/// use chatframe::parsing::hour_bucket;
///
/// assert_eq!(hour_bucket(0), "00-1");
/// assert_eq!(hour_bucket(9), "9-10");
/// assert_eq!(hour_bucket(23), "23-00");
/// ```
pub fn hour_bucket(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}
