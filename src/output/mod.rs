//! Record serializers for downstream tooling.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with a header row - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Writers take any [`std::io::Write`]; nothing here opens files.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatframe::Result<()> {
//! use chatframe::output::{to_csv, to_jsonl};
//!
//! let records = chatframe::parse_transcript("12/11/2025, 21:55 - Alice: Hi\n")?;
//!
//! let csv = to_csv(&records)?;
//! assert!(csv.starts_with("instant,author,message"));
//!
//! let jsonl = to_jsonl(&records)?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
