//! Explicit scoping for governance calls.
//!
//! The presentation layer keeps a "currently selected institution"; the core
//! never does. Every aggregation, synthesis, and report call receives the
//! institution and cycle it applies to.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Institution + cycle year that a governance operation applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CycleContext {
    pub institution_id: String,
    pub cycle_year: i32,
}

impl CycleContext {
    #[must_use]
    pub fn new(institution_id: impl Into<String>, cycle_year: i32) -> Self {
        Self {
            institution_id: institution_id.into(),
            cycle_year,
        }
    }
}
