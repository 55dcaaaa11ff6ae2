use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EvaluationRef;
use crate::enums::{ComplianceGap, ImprovementStatus, Priority};
use crate::ids::{TAG_COMPLIANCE, TAG_PERFORMANCE, TAG_RISK};

/// The evidence an improvement item was raised from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BacklogSource {
    /// An evaluation response scored below the weakness threshold.
    PerformanceGap { indicator_id: String, score: f64 },
    /// A register risk in the high severity tier.
    CriticalRisk { risk_id: String, severity: u8 },
    /// A failed statutory compliance predicate.
    ComplianceGap { gap: ComplianceGap },
}

impl BacklogSource {
    /// Provenance tag: `PERF`, `RISK`, or `COMP`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::PerformanceGap { .. } => TAG_PERFORMANCE,
            Self::CriticalRisk { .. } => TAG_RISK,
            Self::ComplianceGap { .. } => TAG_COMPLIANCE,
        }
    }

    /// Tagged reference to the originating record, e.g. `PERF-ind-1a2b3c4d`.
    #[must_use]
    pub fn provenance_ref(&self) -> String {
        let subject = match self {
            Self::PerformanceGap { indicator_id, .. } => indicator_id.as_str(),
            Self::CriticalRisk { risk_id, .. } => risk_id.as_str(),
            Self::ComplianceGap { gap } => gap.as_str(),
        };
        format!("{}-{subject}", self.tag())
    }
}

/// A remediation task on an evaluation's improvement board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImprovementItem {
    pub id: String,
    pub evaluation: EvaluationRef,
    pub source: BacklogSource,
    pub priority: Priority,
    pub issue: String,
    pub action: String,
    pub owner: String,
    pub due_date: NaiveDate,
    pub status: ImprovementStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ImprovementItem {
    #[must_use]
    pub fn provenance_ref(&self) -> String {
        self.source.provenance_ref()
    }
}
