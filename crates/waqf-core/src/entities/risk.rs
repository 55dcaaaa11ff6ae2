use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RiskCategory, RiskStatus};
use crate::errors::CoreError;

/// Lowest and highest accepted probability / impact rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// An entry in an institution's risk register.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskRegisterItem {
    pub id: String,
    pub institution_id: String,
    pub title: String,
    pub category: RiskCategory,
    pub probability: u8,
    pub impact: u8,
    #[serde(default)]
    pub mitigation_plan: Option<String>,
    pub status: RiskStatus,
    pub created_at: DateTime<Utc>,
}

impl RiskRegisterItem {
    /// Probability × impact, in `1..=25` for validated entries.
    #[must_use]
    pub const fn severity(&self) -> u8 {
        self.probability.saturating_mul(self.impact)
    }

    /// Mitigation plan text, treating blank text as absent.
    #[must_use]
    pub fn mitigation(&self) -> Option<&str> {
        self.mitigation_plan
            .as_deref()
            .map(str::trim)
            .filter(|plan| !plan.is_empty())
    }

    /// Reject ratings outside `1..=5` and blank titles.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` describing the offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("risk title is required".into()));
        }
        for (field, value) in [("probability", self.probability), ("impact", self.impact)] {
            if !RATING_RANGE.contains(&value) {
                return Err(CoreError::Validation(format!(
                    "risk {field} must be between 1 and 5, got {value}"
                )));
            }
        }
        Ok(())
    }
}
