//! # waqf-core
//!
//! Core types, ID prefixes, and error types for waqf governance evaluation.
//!
//! This crate provides the foundational types shared across all waqf crates:
//! - Entity structs for institutions, compliance records, the risk register,
//!   evaluations, indicators, responses, and improvement (backlog) items
//! - Status enums, with the improvement workflow state machine
//! - `CycleContext` and `EvaluationRef`, the explicit scoping values threaded
//!   through every governance call
//! - Cross-cutting error types
//! - Trail operation envelope for JSONL persistence

pub mod audit_detail;
pub mod context;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod trail;
