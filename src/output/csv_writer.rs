//! CSV output writer.

use std::io::Write;

use crate::error::{ChatframeError, Result};
use crate::record::ChatRecord;

/// Writes records as CSV with a header row.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: every [`ChatRecord`] field in declaration order
/// - `author` is an empty cell for system notifications
/// - Encoding: UTF-8
pub fn write_csv<W: Write>(records: &[ChatRecord], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(writer);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders records as a CSV string.
pub fn to_csv(records: &[ChatRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| ChatframeError::Utf8 {
        context: "CSV output".to_string(),
        source: err.utf8_error(),
    })
}
