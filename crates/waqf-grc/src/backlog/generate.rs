//! Candidate generation from the three evidence sources.
//!
//! Output order is fixed: performance weaknesses in response order, then
//! critical risks in register order, then compliance gaps in predicate order.
//! Candidates carry no ID; the store mints one on save.

use std::collections::HashMap;

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use waqf_config::{BacklogConfig, ScoringConfig};
use waqf_core::entities::{
    BacklogSource, ComplianceRecord, EvaluationRef, EvaluationResponse, ImprovementItem, Indicator,
    RiskRegisterItem,
};
use waqf_core::enums::{ComplianceGap, ImprovementStatus, Priority, RiskTier};

use crate::aggregate::compliance_summary;
use crate::scoring::severity_tier;

const PERFORMANCE_ACTION: &str =
    "Prepare a corrective plan for this indicator and raise it to the expected level";
const RISK_FALLBACK_ACTION: &str =
    "Activate the emergency response plan and contain this risk immediately";
const COMPLIANCE_ACTION: &str = "Satisfy this statutory requirement immediately";
const MISSING_RECORD_ACTION: &str = "Complete the compliance record for this cycle";

/// Evidence for one institution and cycle.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    /// Responses of the cycle's evaluation; empty while it is provisional.
    pub responses: &'a [EvaluationResponse],
    pub indicators: &'a [Indicator],
    /// The institution's risk register.
    pub risks: &'a [RiskRegisterItem],
    pub compliance: Option<&'a ComplianceRecord>,
}

/// Build the candidate backlog for `evaluation`, all in `Todo`.
#[must_use]
pub fn generate_candidates(
    evaluation: &EvaluationRef,
    evidence: &Evidence<'_>,
    scoring: &ScoringConfig,
    backlog: &BacklogConfig,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Vec<ImprovementItem> {
    let item = |source: BacklogSource,
                priority: Priority,
                issue: String,
                action: &str,
                owner: &str,
                due_date: NaiveDate| ImprovementItem {
        id: String::new(),
        evaluation: evaluation.clone(),
        source,
        priority,
        issue,
        action: action.to_string(),
        owner: owner.to_string(),
        due_date,
        status: ImprovementStatus::Todo,
        notes: None,
        created_at: now,
        updated_at: now,
    };

    let mut items = Vec::new();
    let max = backlog.summary_max_chars;

    let indicator_text: HashMap<&str, &str> = evidence
        .indicators
        .iter()
        .map(|i| (i.id.as_str(), i.text.as_str()))
        .collect();
    let performance_due = add_months(today, backlog.performance_due_months);
    for response in evidence
        .responses
        .iter()
        .filter(|r| r.score < scoring.weakness_threshold)
    {
        let text = indicator_text
            .get(response.indicator_id.as_str())
            .copied()
            .unwrap_or(response.indicator_id.as_str());
        items.push(item(
            BacklogSource::PerformanceGap {
                indicator_id: response.indicator_id.clone(),
                score: response.score,
            },
            Priority::Medium,
            format!("Weak indicator: {}", truncate_chars(text, max)),
            PERFORMANCE_ACTION,
            &backlog.performance_owner,
            performance_due,
        ));
    }

    let risk_due = add_days(today, backlog.risk_due_days);
    for risk in evidence
        .risks
        .iter()
        .filter(|r| severity_tier(r.probability, r.impact) == RiskTier::High)
    {
        items.push(item(
            BacklogSource::CriticalRisk {
                risk_id: risk.id.clone(),
                severity: risk.severity(),
            },
            Priority::High,
            format!("Critical risk: {}", truncate_chars(&risk.title, max)),
            risk.mitigation().unwrap_or(RISK_FALLBACK_ACTION),
            &backlog.risk_owner,
            risk_due,
        ));
    }

    let compliance_due = add_months(today, backlog.compliance_due_months);
    for gap in compliance_summary(evidence.compliance).gaps {
        let action = if gap == ComplianceGap::NoRecordForCycle {
            MISSING_RECORD_ACTION
        } else {
            COMPLIANCE_ACTION
        };
        items.push(item(
            BacklogSource::ComplianceGap { gap },
            Priority::High,
            format!("Compliance gap: {}", gap.description()),
            action,
            &backlog.compliance_owner,
            compliance_due,
        ));
    }

    items
}

/// First `max` characters of `text`, with `…` appended when cut.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Calendar-month offset, clamped to the last day of the target month.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

#[must_use]
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn truncation_is_char_based() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("مجلس الإدارة", 4), "مجلس…");
    }

    #[test]
    fn month_offset_clamps_to_month_end() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 12, 15), 1), date(2026, 1, 15));
        assert_eq!(add_days(date(2025, 12, 25), 14), date(2026, 1, 8));
    }

    #[test]
    fn clean_evidence_generates_nothing() {
        let mut record = ComplianceRecord::draft("ins-1", 2025);
        record.institution_status = Some(waqf_core::enums::InstitutionStatus::Active);
        record.board_status = Some(waqf_core::enums::BoardStatus::Active);
        record.has_executive_management = Some(true);
        record.has_auditor = Some(true);
        record.has_minutes_prev_year = Some(true);
        record.has_financial_report_prev_year = Some(true);

        let evidence = Evidence {
            responses: &[],
            indicators: &[],
            risks: &[],
            compliance: Some(&record),
        };
        let items = generate_candidates(
            &EvaluationRef::provisional("ins-1"),
            &evidence,
            &ScoringConfig::default(),
            &BacklogConfig::default(),
            date(2025, 6, 1),
            Utc::now(),
        );
        assert!(items.is_empty());
    }
}
