//! Remediation backlog.
//!
//! - [`generate`] turns evidence into candidate items (pure, clock injected)
//! - [`board`] groups items by status for display
//! - [`workflow`] applies one-step status moves
//!
//! Persistence and the generate-at-most-once rule live in
//! [`GrcEngine::synthesize_backlog_on`](crate::GrcEngine::synthesize_backlog_on).

pub mod board;
pub mod generate;
pub mod workflow;

pub use board::{BacklogBoard, BacklogCounts};
pub use generate::{Evidence, generate_candidates};
pub use workflow::{TransitionOutcome, apply_transition};
