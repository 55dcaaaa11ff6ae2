//! Evidence aggregators.
//!
//! Each aggregator degrades to an empty or zero result on missing input;
//! absent records are never an error.

use std::collections::HashMap;

use serde::Serialize;
use waqf_core::entities::{ComplianceRecord, EvaluationResponse, Indicator, RiskRegisterItem};
use waqf_core::enums::{ComplianceGap, RiskTier};

use crate::scoring::{round_to, severity_tier};

// ---------------------------------------------------------------------------
// Per-axis performance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisAverage {
    pub axis: String,
    pub average: f64,
    pub responses: usize,
}

/// Mean score per axis, in order of each axis's first response.
///
/// Responses whose indicator is not in the catalogue are skipped; axes with
/// no responses are omitted.
#[must_use]
pub fn axis_averages(
    responses: &[EvaluationResponse],
    indicators: &[Indicator],
    precision: u32,
) -> Vec<AxisAverage> {
    let axis_of: HashMap<&str, &str> = indicators
        .iter()
        .map(|i| (i.id.as_str(), i.axis.as_str()))
        .collect();

    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for response in responses {
        let Some(&axis) = axis_of.get(response.indicator_id.as_str()) else {
            tracing::debug!(indicator_id = %response.indicator_id, "response references unknown indicator");
            continue;
        };
        let entry = totals.entry(axis).or_insert_with(|| {
            order.push(axis);
            (0.0, 0)
        });
        entry.0 += response.score;
        entry.1 += 1;
    }

    order
        .into_iter()
        .filter_map(|axis| {
            let &(sum, count) = totals.get(axis)?;
            Some(AxisAverage {
                axis: axis.to_string(),
                average: round_to(mean(sum, count), precision),
                responses: count,
            })
        })
        .collect()
}

/// Mean of every response score, `0.0` when there are none.
#[must_use]
pub fn overall_average(responses: &[EvaluationResponse], precision: u32) -> f64 {
    let sum: f64 = responses.iter().map(|r| r.score).sum();
    round_to(mean(sum, responses.len()), precision)
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

// ---------------------------------------------------------------------------
// Compliance gaps
// ---------------------------------------------------------------------------

/// Number of statutory predicates.
pub const PREDICATE_COUNT: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub satisfied: u32,
    pub total: u32,
    pub percentage: u32,
    /// Failed predicates in evaluation order.
    pub gaps: Vec<ComplianceGap>,
    /// Texts of custom requirements not yet met.
    pub custom_unmet: Vec<String>,
}

impl ComplianceSummary {
    #[must_use]
    pub fn gap_descriptions(&self) -> Vec<&'static str> {
        self.gaps.iter().map(|gap| gap.description()).collect()
    }
}

fn predicate_met(record: &ComplianceRecord, gap: ComplianceGap) -> bool {
    match gap {
        ComplianceGap::InstitutionInactive => record.institution_active(),
        ComplianceGap::BoardNotActive => record.board_active(),
        ComplianceGap::NoExecutiveManagement => record.executive_management(),
        ComplianceGap::NoExternalAuditor => record.auditor(),
        ComplianceGap::MissingPriorYearMinutes => record.minutes_prev_year(),
        ComplianceGap::MissingPriorYearFinancialReport => record.financial_report_prev_year(),
        ComplianceGap::NoRecordForCycle => false,
    }
}

/// Evaluate the six predicates; a missing record yields the sentinel gap.
#[must_use]
pub fn compliance_summary(record: Option<&ComplianceRecord>) -> ComplianceSummary {
    let Some(record) = record else {
        return ComplianceSummary {
            satisfied: 0,
            total: PREDICATE_COUNT,
            percentage: 0,
            gaps: vec![ComplianceGap::NoRecordForCycle],
            custom_unmet: Vec::new(),
        };
    };

    let gaps: Vec<ComplianceGap> = ComplianceGap::PREDICATES
        .into_iter()
        .filter(|&gap| !predicate_met(record, gap))
        .collect();
    let satisfied = ComplianceGap::PREDICATES
        .len()
        .saturating_sub(gaps.len())
        .try_into()
        .unwrap_or(0);

    ComplianceSummary {
        satisfied,
        total: PREDICATE_COUNT,
        percentage: percentage_of(satisfied, PREDICATE_COUNT),
        gaps,
        custom_unmet: record.custom_unmet(),
    }
}

/// `round(part / whole × 100)`, halves rounding up.
const fn percentage_of(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part * 200 + whole) / (whole * 2)
}

// ---------------------------------------------------------------------------
// Risk tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskTierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

#[must_use]
pub fn risk_tier_counts<'a>(risks: impl IntoIterator<Item = &'a RiskRegisterItem>) -> RiskTierCounts {
    risks
        .into_iter()
        .fold(RiskTierCounts::default(), |mut counts, risk| {
            match severity_tier(risk.probability, risk.impact) {
                RiskTier::High => counts.high += 1,
                RiskTier::Medium => counts.medium += 1,
                RiskTier::Low => counts.low += 1,
            }
            counts.total += 1;
            counts
        })
}
