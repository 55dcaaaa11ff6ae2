use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Highest score an indicator can receive.
pub const MAX_SCORE: f64 = 5.0;

/// A scored answer to one indicator within one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvaluationResponse {
    pub id: String,
    pub evaluation_id: String,
    pub indicator_id: String,
    pub score: f64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EvaluationResponse {
    /// Reject scores outside `[0, 5]`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for NaN or out-of-range scores.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=MAX_SCORE).contains(&self.score) {
            return Err(CoreError::Validation(format!(
                "response score must be between 0 and 5, got {}",
                self.score
            )));
        }
        Ok(())
    }
}
