//! Status enums, categories, and workflow types for waqf governance records.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `ImprovementStatus` carries the backlog state machine: `allowed_next_states()`
//! enumerates the legal edges and `step()` resolves a forward/backward request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// InstitutionKind
// ---------------------------------------------------------------------------

/// Legal form of a waqf institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionKind {
    PublicWaqf,
    PrivateWaqf,
}

impl InstitutionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublicWaqf => "public_waqf",
            Self::PrivateWaqf => "private_waqf",
        }
    }
}

impl fmt::Display for InstitutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InstitutionStatus
// ---------------------------------------------------------------------------

/// Operating status of an institution as recorded in its compliance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionStatus {
    Active,
    Inactive,
    InLiquidation,
    Suspended,
    Other,
}

impl InstitutionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::InLiquidation => "in_liquidation",
            Self::Suspended => "suspended",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for InstitutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BoardStatus
// ---------------------------------------------------------------------------

/// Status of the board of directors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    Active,
    Expired,
    Absent,
}

impl BoardStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskCategory / RiskStatus
// ---------------------------------------------------------------------------

/// Category of a risk register entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Operational,
    Financial,
    Legal,
    Strategic,
}

impl RiskCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Financial => "financial",
            Self::Legal => "legal",
            Self::Strategic => "strategic",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling status of a risk register entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Open,
    Mitigated,
    Closed,
}

impl RiskStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Mitigated => "mitigated",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskTier
// ---------------------------------------------------------------------------

/// Severity tier of a register risk (probability × impact).
///
/// ```text
/// severity >= 15      → high
/// 8 <= severity < 15  → medium
/// severity < 8        → low
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskScoreLabel
// ---------------------------------------------------------------------------

/// Label attached to a compliance risk score. A single cut, no middle band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskScoreLabel {
    High,
    Acceptable,
}

impl RiskScoreLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Acceptable => "acceptable",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::High => "High risk",
            Self::Acceptable => "Low / acceptable risk",
        }
    }
}

impl fmt::Display for RiskScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of an improvement item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ImprovementStatus
// ---------------------------------------------------------------------------

/// Direction of a workflow move on the improvement board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDirection {
    Forward,
    Backward,
}

impl TransitionDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for TransitionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of an improvement item on the three-column board.
///
/// ```text
/// todo ⇄ doing ⇄ done
/// ```
///
/// Moves are one step at a time. `todo` has no backward edge and `done` has
/// no forward edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementStatus {
    Todo,
    Doing,
    Done,
}

impl ImprovementStatus {
    /// Board columns in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Todo => &[Self::Doing],
            Self::Doing => &[Self::Done, Self::Todo],
            Self::Done => &[Self::Doing],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Resolve a one-step move. `None` when the edge does not exist.
    #[must_use]
    pub const fn step(self, direction: TransitionDirection) -> Option<Self> {
        match (self, direction) {
            (Self::Todo, TransitionDirection::Forward) => Some(Self::Doing),
            (Self::Doing, TransitionDirection::Forward) => Some(Self::Done),
            (Self::Doing, TransitionDirection::Backward) => Some(Self::Todo),
            (Self::Done, TransitionDirection::Backward) => Some(Self::Doing),
            (Self::Todo, TransitionDirection::Backward)
            | (Self::Done, TransitionDirection::Forward) => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for ImprovementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComplianceGap
// ---------------------------------------------------------------------------

/// A failed statutory compliance predicate.
///
/// The first six variants are the fixed predicates in evaluation order;
/// `NoRecordForCycle` is the sentinel emitted when no compliance record exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceGap {
    InstitutionInactive,
    BoardNotActive,
    NoExecutiveManagement,
    NoExternalAuditor,
    MissingPriorYearMinutes,
    MissingPriorYearFinancialReport,
    NoRecordForCycle,
}

impl ComplianceGap {
    /// The six statutory predicates in evaluation order.
    pub const PREDICATES: [Self; 6] = [
        Self::InstitutionInactive,
        Self::BoardNotActive,
        Self::NoExecutiveManagement,
        Self::NoExternalAuditor,
        Self::MissingPriorYearMinutes,
        Self::MissingPriorYearFinancialReport,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InstitutionInactive => "institution_inactive",
            Self::BoardNotActive => "board_not_active",
            Self::NoExecutiveManagement => "no_executive_management",
            Self::NoExternalAuditor => "no_external_auditor",
            Self::MissingPriorYearMinutes => "missing_prior_year_minutes",
            Self::MissingPriorYearFinancialReport => "missing_prior_year_financial_report",
            Self::NoRecordForCycle => "no_record_for_cycle",
        }
    }

    /// Human-readable description of the gap.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InstitutionInactive => "Institution is not in active status",
            Self::BoardNotActive => "Board of directors is not in place",
            Self::NoExecutiveManagement => "No executive management",
            Self::NoExternalAuditor => "No external auditor appointed",
            Self::MissingPriorYearMinutes => "Prior-year meeting minutes are missing",
            Self::MissingPriorYearFinancialReport => "Prior-year financial report is missing",
            Self::NoRecordForCycle => "No compliance record for this cycle",
        }
    }
}

impl fmt::Display for ComplianceGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Persisted entity collections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Institution,
    Compliance,
    Risk,
    Evaluation,
    Indicator,
    Response,
    Improvement,
}

impl EntityType {
    pub const ALL: [Self; 7] = [
        Self::Institution,
        Self::Compliance,
        Self::Risk,
        Self::Evaluation,
        Self::Indicator,
        Self::Response,
        Self::Improvement,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Institution => "institution",
            Self::Compliance => "compliance",
            Self::Risk => "risk",
            Self::Evaluation => "evaluation",
            Self::Indicator => "indicator",
            Self::Response => "response",
            Self::Improvement => "improvement",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrailOp
// ---------------------------------------------------------------------------

/// Operation type recorded in JSONL trail files.
///
/// - Mutation ops: `Create`, `Update`, `Delete`
/// - State machine op: `Transition`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrailOp {
    Create,
    Update,
    Delete,
    Transition,
}

impl TrailOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Transition => "transition",
        }
    }
}

impl fmt::Display for TrailOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        institution_kind_private,
        InstitutionKind,
        InstitutionKind::PrivateWaqf,
        "private_waqf"
    );
    test_serde_roundtrip!(
        institution_in_liquidation,
        InstitutionStatus,
        InstitutionStatus::InLiquidation,
        "in_liquidation"
    );
    test_serde_roundtrip!(board_expired, BoardStatus, BoardStatus::Expired, "expired");
    test_serde_roundtrip!(
        risk_category_strategic,
        RiskCategory,
        RiskCategory::Strategic,
        "strategic"
    );
    test_serde_roundtrip!(improvement_todo, ImprovementStatus, ImprovementStatus::Todo, "todo");
    test_serde_roundtrip!(
        gap_financial_report,
        ComplianceGap,
        ComplianceGap::MissingPriorYearFinancialReport,
        "missing_prior_year_financial_report"
    );
    test_serde_roundtrip!(entity_improvement, EntityType, EntityType::Improvement, "improvement");
    test_serde_roundtrip!(trail_op_transition, TrailOp, TrailOp::Transition, "transition");

    // --- Transition tests ---

    #[rstest]
    #[case(ImprovementStatus::Todo, TransitionDirection::Forward, Some(ImprovementStatus::Doing))]
    #[case(ImprovementStatus::Doing, TransitionDirection::Forward, Some(ImprovementStatus::Done))]
    #[case(ImprovementStatus::Done, TransitionDirection::Forward, None)]
    #[case(ImprovementStatus::Todo, TransitionDirection::Backward, None)]
    #[case(ImprovementStatus::Doing, TransitionDirection::Backward, Some(ImprovementStatus::Todo))]
    #[case(ImprovementStatus::Done, TransitionDirection::Backward, Some(ImprovementStatus::Doing))]
    fn improvement_steps(
        #[case] from: ImprovementStatus,
        #[case] direction: TransitionDirection,
        #[case] expected: Option<ImprovementStatus>,
    ) {
        assert_eq!(from.step(direction), expected);
    }

    #[test]
    fn steps_agree_with_allowed_next_states() {
        for from in ImprovementStatus::ALL {
            for direction in [TransitionDirection::Forward, TransitionDirection::Backward] {
                if let Some(to) = from.step(direction) {
                    assert!(from.can_transition_to(to), "{from} -> {to}");
                }
            }
        }
    }

    #[test]
    fn improvement_skips_are_not_allowed() {
        assert!(!ImprovementStatus::Todo.can_transition_to(ImprovementStatus::Done));
        assert!(!ImprovementStatus::Done.can_transition_to(ImprovementStatus::Todo));
        assert!(!ImprovementStatus::Doing.can_transition_to(ImprovementStatus::Doing));
    }

    #[test]
    fn predicates_exclude_sentinel() {
        assert_eq!(ComplianceGap::PREDICATES.len(), 6);
        assert!(!ComplianceGap::PREDICATES.contains(&ComplianceGap::NoRecordForCycle));
    }

    #[test]
    fn risk_score_label_display_is_text() {
        assert_eq!(RiskScoreLabel::High.to_string(), "High risk");
        assert_eq!(RiskScoreLabel::Acceptable.as_str(), "acceptable");
    }
}
