//! One-step status moves on a backlog item.
//!
//! Moves outside the allowed edges leave the item untouched; they are a
//! normal outcome, not an error.

use chrono::{DateTime, Utc};
use serde::Serialize;
use waqf_core::audit_detail::StatusChangedDetail;
use waqf_core::entities::ImprovementItem;
use waqf_core::enums::{ImprovementStatus, TransitionDirection};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransitionOutcome {
    Moved {
        item: ImprovementItem,
        from: ImprovementStatus,
    },
    Unchanged {
        item: ImprovementItem,
    },
}

impl TransitionOutcome {
    #[must_use]
    pub const fn item(&self) -> &ImprovementItem {
        match self {
            Self::Moved { item, .. } | Self::Unchanged { item } => item,
        }
    }

    #[must_use]
    pub fn into_item(self) -> ImprovementItem {
        match self {
            Self::Moved { item, .. } | Self::Unchanged { item } => item,
        }
    }

    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Move `item` one step in `direction`, stamping `updated_at` on success.
///
/// Returns the edge taken, or `None` when the move is not allowed.
pub fn apply_transition(
    item: &mut ImprovementItem,
    direction: TransitionDirection,
    now: DateTime<Utc>,
) -> Option<StatusChangedDetail> {
    let from = item.status;
    let to = from.step(direction)?;
    debug_assert!(from.can_transition_to(to));
    item.status = to;
    item.updated_at = now;
    Some(StatusChangedDetail { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use waqf_core::entities::{BacklogSource, EvaluationRef};
    use waqf_core::enums::{ComplianceGap, Priority};

    fn item(status: ImprovementStatus) -> ImprovementItem {
        let now = Utc::now();
        ImprovementItem {
            id: "imp-00000001".into(),
            evaluation: EvaluationRef::formal("evl-1"),
            source: BacklogSource::ComplianceGap {
                gap: ComplianceGap::BoardNotActive,
            },
            priority: Priority::High,
            issue: "Board".into(),
            action: "Form the board".into(),
            owner: "Secretary".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            status,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[case(ImprovementStatus::Todo, TransitionDirection::Forward, Some(ImprovementStatus::Doing))]
    #[case(ImprovementStatus::Doing, TransitionDirection::Forward, Some(ImprovementStatus::Done))]
    #[case(ImprovementStatus::Done, TransitionDirection::Forward, None)]
    #[case(ImprovementStatus::Todo, TransitionDirection::Backward, None)]
    #[case(ImprovementStatus::Doing, TransitionDirection::Backward, Some(ImprovementStatus::Todo))]
    #[case(ImprovementStatus::Done, TransitionDirection::Backward, Some(ImprovementStatus::Doing))]
    fn one_step_edges(
        #[case] start: ImprovementStatus,
        #[case] direction: TransitionDirection,
        #[case] expected: Option<ImprovementStatus>,
    ) {
        let mut it = item(start);
        let before = it.clone();
        let detail = apply_transition(&mut it, direction, Utc::now());

        match expected {
            Some(to) => {
                assert_eq!(detail, Some(StatusChangedDetail { from: start, to }));
                assert_eq!(it.status, to);
            }
            None => {
                assert_eq!(detail, None);
                assert_eq!(it, before);
            }
        }
    }
}
