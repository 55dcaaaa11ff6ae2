use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single evaluated statement, belonging to exactly one maturity axis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Indicator {
    pub id: String,
    pub axis: String,
    pub text: String,
}
