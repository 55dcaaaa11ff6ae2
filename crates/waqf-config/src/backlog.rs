//! Improvement backlog generation parameters: default owners and due offsets.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_summary_max_chars() -> usize {
    60
}

fn default_performance_owner() -> String {
    "Operations Manager".into()
}

fn default_risk_owner() -> String {
    "Risk Committee".into()
}

fn default_compliance_owner() -> String {
    "Board Secretary / Manager".into()
}

const fn default_one_month() -> u32 {
    1
}

const fn default_risk_due_days() -> u32 {
    14
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BacklogConfig {
    /// Maximum characters of indicator/risk text quoted in an item summary.
    #[serde(default = "default_summary_max_chars")]
    pub summary_max_chars: usize,

    #[serde(default = "default_performance_owner")]
    pub performance_owner: String,

    #[serde(default = "default_risk_owner")]
    pub risk_owner: String,

    #[serde(default = "default_compliance_owner")]
    pub compliance_owner: String,

    /// Calendar months until a performance item is due.
    #[serde(default = "default_one_month")]
    pub performance_due_months: u32,

    /// Days until a critical-risk item is due.
    #[serde(default = "default_risk_due_days")]
    pub risk_due_days: u32,

    /// Calendar months until a compliance item is due.
    #[serde(default = "default_one_month")]
    pub compliance_due_months: u32,
}

impl Default for BacklogConfig {
    fn default() -> Self {
        Self {
            summary_max_chars: default_summary_max_chars(),
            performance_owner: default_performance_owner(),
            risk_owner: default_risk_owner(),
            compliance_owner: default_compliance_owner(),
            performance_due_months: default_one_month(),
            risk_due_days: default_risk_due_days(),
            compliance_due_months: default_one_month(),
        }
    }
}

impl BacklogConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero summary length or a
    /// blank owner.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summary_max_chars == 0 {
            return Err(ConfigError::invalid(
                "backlog.summary_max_chars",
                "must be greater than zero",
            ));
        }
        for (field, owner) in [
            ("backlog.performance_owner", &self.performance_owner),
            ("backlog.risk_owner", &self.risk_owner),
            ("backlog.compliance_owner", &self.compliance_owner),
        ] {
            if owner.trim().is_empty() {
                return Err(ConfigError::invalid(field, "owner must not be blank"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = BacklogConfig::default();
        assert_eq!(config.summary_max_chars, 60);
        assert_eq!(config.performance_owner, "Operations Manager");
        assert_eq!(config.risk_owner, "Risk Committee");
        assert_eq!(config.compliance_owner, "Board Secretary / Manager");
        assert_eq!(config.performance_due_months, 1);
        assert_eq!(config.risk_due_days, 14);
        assert_eq!(config.compliance_due_months, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_blank_owner() {
        let config = BacklogConfig {
            risk_owner: " ".into(),
            ..BacklogConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("backlog.risk_owner"));
    }
}
