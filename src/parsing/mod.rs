//! The four transcript stages.
//!
//! - [`splitter`] finds `D/M/Y, H:MM - ` boundaries and cuts [`RawEntry`](crate::record::RawEntry) values
//! - [`timestamp`] resolves every boundary with one batch-wide [`YearFormat`]
//! - [`classifier`] separates author and message, or marks a system notification
//! - [`temporal`] derives calendar fields and the hour bucket
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) wires them together.

pub mod classifier;
pub mod splitter;
pub mod temporal;
pub mod timestamp;

pub use classifier::{AUTHOR_SEPARATOR, EntryKind, classify_body};
pub use splitter::{BOUNDARY_PATTERN, EntrySplitter, split_entries};
pub use temporal::{TemporalFeatures, derive_features, hour_bucket};
pub use timestamp::{
    BatchResolution, TimestampError, TimestampFailure, YearFormat, resolve_batch,
    resolve_batch_default,
};
