//! Scoring and aggregation parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Highest number of decimals accepted for rounded averages.
pub const MAX_PRECISION: u32 = 6;

const fn default_precision() -> u32 {
    1
}

const fn default_weakness_threshold() -> f64 {
    3.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Decimals kept on per-axis averages.
    #[serde(default = "default_precision")]
    pub axis_precision: u32,

    /// Decimals kept on the overall average score.
    #[serde(default = "default_precision")]
    pub average_precision: u32,

    /// Responses scoring strictly below this value raise a performance item.
    #[serde(default = "default_weakness_threshold")]
    pub weakness_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            axis_precision: default_precision(),
            average_precision: default_precision(),
            weakness_threshold: default_weakness_threshold(),
        }
    }
}

impl ScoringConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for precisions above
    /// [`MAX_PRECISION`] or a threshold outside `(0, 5]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scoring.axis_precision", self.axis_precision),
            ("scoring.average_precision", self.average_precision),
        ] {
            if value > MAX_PRECISION {
                return Err(ConfigError::invalid(
                    field,
                    format!("at most {MAX_PRECISION} decimals, got {value}"),
                ));
            }
        }
        if !(self.weakness_threshold > 0.0 && self.weakness_threshold <= 5.0) {
            return Err(ConfigError::invalid(
                "scoring.weakness_threshold",
                format!("must be in (0, 5], got {}", self.weakness_threshold),
            ));
        }
        Ok(())
    }
}
