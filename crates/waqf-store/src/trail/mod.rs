//! JSONL trail: per-entity append-only mutation logs.
//!
//! - [`writer::TrailWriter`] appends one [`TrailOperation`](waqf_core::trail::TrailOperation)
//!   per mutation to `{trail_dir}/{entity}.jsonl`.
//! - [`replayer::TrailReplayer`] folds those files back into a backend.

pub mod replayer;
pub mod writer;

pub use replayer::{ReplaySummary, TrailReplayer};
pub use writer::TrailWriter;
