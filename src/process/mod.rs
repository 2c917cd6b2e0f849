//! File processing and batch orchestration.
//!
//! - [`pipeline`]: Formats one file's line stream with a fresh per-file
//!   formatter (the entry point is [`format_file`])
//! - [`batch`]: Walks a source tree, mirrors it to a destination tree,
//!   and formats every eligible file, refusing pre-existing output

pub mod batch;
pub mod pipeline;

pub use batch::{collect_jobs, run_batch, run_batch_sequential, BatchOptions, BatchSummary, FileJob};
pub use pipeline::{format_file, format_str};
