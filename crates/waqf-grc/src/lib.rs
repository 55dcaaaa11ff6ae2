//! # waqf-grc
//!
//! Governance risk & compliance derivation for waqf institutions.
//!
//! Pure building blocks:
//! - [`scoring`]: compliance risk score and risk-register severity tiers
//! - [`aggregate`]: per-axis averages, compliance gaps, risk tier counts
//! - [`backlog`]: remediation item generation, board grouping, and the
//!   three-state workflow
//! - [`report`] and [`portfolio`]: display-ready projections
//!
//! [`engine::GrcEngine`] binds them to a [`waqf_store::WaqfService`] and a
//! [`waqf_config::WaqfConfig`]. Every engine call takes an explicit
//! [`CycleContext`](waqf_core::context::CycleContext).

pub mod aggregate;
pub mod backlog;
pub mod engine;
pub mod error;
pub mod portfolio;
pub mod report;
pub mod scoring;

pub use engine::GrcEngine;
pub use error::GrcError;
