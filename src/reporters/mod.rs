//! Output reporters for trustscore results
//!
//! The only output format is NDJSON: one record per artifact, one line
//! per record.

mod ndjson;

pub use ndjson::{build_record, render_line, NdjsonWriter};
