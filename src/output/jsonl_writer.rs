//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits streaming consumers and dataframe
//! loaders that read newline-delimited JSON.

use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::record::ChatRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"instant":"2025-11-12T21:55:00","author":"Alice","message":"Hi",...}
/// {"instant":"2025-11-12T22:00:00","author":null,"message":"Bob left",...}
/// ```
pub fn write_jsonl<W: Write>(records: &[ChatRecord], writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders records as a JSONL string.
pub fn to_jsonl(records: &[ChatRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
