//! Typed detail payloads attached to trail operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ImprovementStatus;

/// Detail for `TrailOp::Transition` on an improvement item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangedDetail {
    pub from: ImprovementStatus,
    pub to: ImprovementStatus,
}
