//! Scoring and aggregation properties.

mod common;

use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use waqf_core::entities::{ComplianceRecord, EvaluationResponse, Indicator};
use waqf_core::enums::{
    BoardStatus, ComplianceGap, InstitutionStatus, RiskScoreLabel, RiskTier,
};
use waqf_grc::aggregate::{AxisAverage, axis_averages, compliance_summary, overall_average};
use waqf_grc::scoring::{calculate_risk_score, severity_tier};

use common::clean_compliance;

#[test]
fn all_four_factors_unmet_scores_nine() {
    let mut record = ComplianceRecord::draft("ins-1", 2025);
    record.board_status = Some(BoardStatus::Absent);
    record.has_executive_management = Some(false);
    record.has_auditor = Some(false);
    record.has_financial_report_prev_year = Some(false);

    let score = calculate_risk_score(&record);
    assert_eq!(score.score, 9);
    assert_eq!(score.label, RiskScoreLabel::High);
    assert_eq!(score.label.to_string(), "High risk");
}

#[test]
fn absent_flags_score_like_unmet() {
    let score = calculate_risk_score(&ComplianceRecord::draft("ins-1", 2025));
    assert_eq!(score.score, 9);
}

#[test]
fn all_four_factors_met_scores_zero() {
    let score = calculate_risk_score(&clean_compliance("ins-1", 2025));
    assert_eq!(score.score, 0);
    assert_eq!(score.label, RiskScoreLabel::Acceptable);
}

#[test]
fn severity_tier_matches_product_bands() {
    for probability in 1..=5u8 {
        for impact in 1..=5u8 {
            let product = probability * impact;
            let expected = if product >= 15 {
                RiskTier::High
            } else if product >= 8 {
                RiskTier::Medium
            } else {
                RiskTier::Low
            };
            assert_eq!(
                severity_tier(probability, impact),
                expected,
                "{probability}x{impact}"
            );
        }
    }
}

#[rstest]
#[case(3, 5, RiskTier::High)]
#[case(5, 3, RiskTier::High)]
#[case(2, 4, RiskTier::Medium)]
#[case(2, 7, RiskTier::Medium)]
#[case(2, 3, RiskTier::Low)]
#[case(1, 1, RiskTier::Low)]
#[case(5, 5, RiskTier::High)]
fn severity_boundaries(#[case] probability: u8, #[case] impact: u8, #[case] tier: RiskTier) {
    assert_eq!(severity_tier(probability, impact), tier);
}

#[test]
fn three_of_six_is_fifty_percent() {
    let mut record = ComplianceRecord::draft("ins-1", 2025);
    record.institution_status = Some(InstitutionStatus::Active);
    record.has_auditor = Some(true);
    record.has_minutes_prev_year = Some(true);

    let summary = compliance_summary(Some(&record));
    assert_eq!(summary.satisfied, 3);
    assert_eq!(summary.percentage, 50);
    assert_eq!(
        summary.gaps,
        vec![
            ComplianceGap::BoardNotActive,
            ComplianceGap::NoExecutiveManagement,
            ComplianceGap::MissingPriorYearFinancialReport,
        ]
    );
}

#[test]
fn custom_requirements_do_not_change_the_percentage() {
    let mut record = clean_compliance("ins-1", 2025);
    record.custom_requirements.push(waqf_core::entities::RequirementItem {
        id: "req-00000001".into(),
        text: "Annual sharia review filed".into(),
        met: false,
    });

    let summary = compliance_summary(Some(&record));
    assert_eq!(summary.percentage, 100);
    assert!(summary.gaps.is_empty());
    assert_eq!(summary.custom_unmet, vec!["Annual sharia review filed".to_string()]);
}

fn response(indicator_id: &str, score: f64) -> EvaluationResponse {
    EvaluationResponse {
        id: String::new(),
        evaluation_id: "evl-1".into(),
        indicator_id: indicator_id.into(),
        score,
        comment: None,
        created_at: Utc::now(),
    }
}

fn indicator(id: &str, axis: &str) -> Indicator {
    Indicator {
        id: id.into(),
        axis: axis.into(),
        text: format!("{axis} indicator"),
    }
}

#[test]
fn axis_averages_group_by_indicator_axis() {
    let indicators = vec![indicator("ind-f1", "Financial"), indicator("ind-l1", "Legal"), indicator("ind-a1", "Administrative")];
    let responses = vec![
        response("ind-f1", 4.0),
        response("ind-l1", 5.0),
        response("ind-f1", 2.0),
        response("ind-unknown", 0.0),
    ];

    let averages = axis_averages(&responses, &indicators, 1);
    assert_eq!(
        averages,
        vec![
            AxisAverage {
                axis: "Financial".into(),
                average: 3.0,
                responses: 2
            },
            AxisAverage {
                axis: "Legal".into(),
                average: 5.0,
                responses: 1
            },
        ]
    );
}

#[test]
fn overall_average_uses_every_response() {
    let responses = vec![response("a", 4.0), response("b", 2.0), response("c", 5.0)];
    assert!((overall_average(&responses, 1) - 3.7).abs() < 1e-9);
}
