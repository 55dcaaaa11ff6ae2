//! # waqf-schema
//!
//! JSON Schema generation, validation, and registry for waqf records.
//!
//! Entity types are defined in `waqf-core` with `#[derive(JsonSchema)]`.
//! This crate builds the registry and validation layer on top of them; the
//! store validates every newly created record against it.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::{SchemaRegistry, schema_name};
