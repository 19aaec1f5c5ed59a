//! JSON output writer.

use std::io::Write;

use crate::error::Result;
use crate::record::ChatRecord;

/// Writes records as a pretty-printed JSON array.
///
/// # Format
/// ```json
/// [
///   {"instant": "2025-11-12T21:55:00", "author": "Alice", "message": "Hi", ...},
///   {"instant": "2025-11-12T22:00:00", "author": null, "message": "Bob left", ...}
/// ]
/// ```
pub fn write_json<W: Write>(records: &[ChatRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Renders records as a pretty-printed JSON array string.
pub fn to_json(records: &[ChatRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
