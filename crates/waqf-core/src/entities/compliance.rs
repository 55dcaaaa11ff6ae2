use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BoardStatus, InstitutionStatus};

/// An institution-specific requirement tracked next to the statutory flags.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequirementItem {
    pub id: String,
    pub text: String,
    pub met: bool,
}

/// Statutory compliance status of one institution for one cycle year.
///
/// At most one record exists per `(institution_id, cycle_year)`. Every status
/// and flag is optional: records are filled in gradually, and an absent value
/// always counts as "requirement not met".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplianceRecord {
    pub id: String,
    pub institution_id: String,
    pub cycle_year: i32,
    #[serde(default)]
    pub institution_status: Option<InstitutionStatus>,
    #[serde(default)]
    pub board_status: Option<BoardStatus>,
    #[serde(default)]
    pub has_executive_management: Option<bool>,
    #[serde(default)]
    pub has_auditor: Option<bool>,
    #[serde(default)]
    pub has_minutes_prev_year: Option<bool>,
    #[serde(default)]
    pub has_financial_report_prev_year: Option<bool>,
    #[serde(default)]
    pub custom_requirements: Vec<RequirementItem>,
    #[serde(default)]
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ComplianceRecord {
    /// An empty record for the given institution and year. The ID is assigned
    /// by the store on first save.
    #[must_use]
    pub fn draft(institution_id: impl Into<String>, cycle_year: i32) -> Self {
        Self {
            id: String::new(),
            institution_id: institution_id.into(),
            cycle_year,
            institution_status: None,
            board_status: None,
            has_executive_management: None,
            has_auditor: None,
            has_minutes_prev_year: None,
            has_financial_report_prev_year: None,
            custom_requirements: Vec::new(),
            notes: None,
            updated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn institution_active(&self) -> bool {
        self.institution_status == Some(InstitutionStatus::Active)
    }

    #[must_use]
    pub fn board_active(&self) -> bool {
        self.board_status == Some(BoardStatus::Active)
    }

    #[must_use]
    pub fn executive_management(&self) -> bool {
        self.has_executive_management.unwrap_or(false)
    }

    #[must_use]
    pub fn auditor(&self) -> bool {
        self.has_auditor.unwrap_or(false)
    }

    #[must_use]
    pub fn minutes_prev_year(&self) -> bool {
        self.has_minutes_prev_year.unwrap_or(false)
    }

    #[must_use]
    pub fn financial_report_prev_year(&self) -> bool {
        self.has_financial_report_prev_year.unwrap_or(false)
    }

    /// Texts of custom requirements that are not met, in record order.
    #[must_use]
    pub fn custom_unmet(&self) -> Vec<String> {
        self.custom_requirements
            .iter()
            .filter(|item| !item.met)
            .map(|item| item.text.clone())
            .collect()
    }
}
