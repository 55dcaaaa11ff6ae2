use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A formal maturity evaluation of one institution for one cycle year.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evaluation {
    pub id: String,
    pub institution_id: String,
    pub cycle_year: i32,
    pub created_at: DateTime<Utc>,
}

/// The evaluation an improvement backlog is grouped under.
///
/// Institutions without a formal evaluation for the cycle still get a backlog;
/// it hangs off a provisional reference derived from the institution ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationRef {
    Formal { id: String },
    Provisional { institution_id: String },
}

impl EvaluationRef {
    #[must_use]
    pub fn formal(id: impl Into<String>) -> Self {
        Self::Formal { id: id.into() }
    }

    #[must_use]
    pub fn provisional(institution_id: impl Into<String>) -> Self {
        Self::Provisional {
            institution_id: institution_id.into(),
        }
    }

    /// ID of the formal evaluation, if this reference points at one.
    #[must_use]
    pub fn formal_id(&self) -> Option<&str> {
        match self {
            Self::Formal { id } => Some(id),
            Self::Provisional { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_provisional(&self) -> bool {
        matches!(self, Self::Provisional { .. })
    }
}

impl fmt::Display for EvaluationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formal { id } => f.write_str(id),
            Self::Provisional { institution_id } => write!(f, "provisional:{institution_id}"),
        }
    }
}
