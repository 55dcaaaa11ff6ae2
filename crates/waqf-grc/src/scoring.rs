//! Score calculators.
//!
//! Both calculators are pure: the compliance risk score reads a record whose
//! flags may be absent (absent counts as unmet), and the severity tier assumes
//! ratings already validated to 1–5.

use serde::Serialize;
use waqf_core::entities::ComplianceRecord;
use waqf_core::enums::{RiskScoreLabel, RiskTier};

pub const BOARD_NOT_ACTIVE_POINTS: u32 = 3;
pub const NO_EXECUTIVE_MANAGEMENT_POINTS: u32 = 2;
pub const NO_AUDITOR_POINTS: u32 = 2;
pub const NO_FINANCIAL_REPORT_POINTS: u32 = 2;

/// Scores at or above this are labelled high risk.
pub const HIGH_RISK_SCORE: u32 = 6;

/// Severity at or above which a register risk is High (and critical).
pub const HIGH_SEVERITY: u16 = 15;
/// Severity at or above which a register risk is at least Medium.
pub const MEDIUM_SEVERITY: u16 = 8;

/// Live-computed risk score of a compliance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceRiskScore {
    pub score: u32,
    pub label: RiskScoreLabel,
}

/// Additive risk points for a compliance record.
#[must_use]
pub fn calculate_risk_score(record: &ComplianceRecord) -> ComplianceRiskScore {
    let factors = [
        (!record.board_active(), BOARD_NOT_ACTIVE_POINTS),
        (!record.executive_management(), NO_EXECUTIVE_MANAGEMENT_POINTS),
        (!record.auditor(), NO_AUDITOR_POINTS),
        (!record.financial_report_prev_year(), NO_FINANCIAL_REPORT_POINTS),
    ];
    let score = factors
        .iter()
        .filter(|(unmet, _)| *unmet)
        .map(|(_, points)| points)
        .sum();

    let label = if score >= HIGH_RISK_SCORE {
        RiskScoreLabel::High
    } else {
        RiskScoreLabel::Acceptable
    };
    ComplianceRiskScore { score, label }
}

/// Tier of `probability × impact`.
#[must_use]
pub fn severity_tier(probability: u8, impact: u8) -> RiskTier {
    tier_for_severity(u16::from(probability) * u16::from(impact))
}

#[must_use]
pub const fn tier_for_severity(severity: u16) -> RiskTier {
    if severity >= HIGH_SEVERITY {
        RiskTier::High
    } else if severity >= MEDIUM_SEVERITY {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Round half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = (0..decimals).fold(1.0_f64, |f, _| f * 10.0);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use waqf_core::enums::BoardStatus;

    #[test]
    fn partial_record_counts_every_absent_flag() {
        let mut record = ComplianceRecord::draft("ins-1", 2025);
        record.has_auditor = Some(true);
        let score = calculate_risk_score(&record);
        assert_eq!(score.score, 7);
        assert_eq!(score.label, RiskScoreLabel::High);
    }

    #[test]
    fn just_below_cut_is_acceptable() {
        let mut record = ComplianceRecord::draft("ins-1", 2025);
        record.board_status = Some(BoardStatus::Active);
        record.has_executive_management = Some(true);
        // auditor (2) + financial report (2)
        let score = calculate_risk_score(&record);
        assert_eq!(score.score, 4);
        assert_eq!(score.label, RiskScoreLabel::Acceptable);

        record.board_status = Some(BoardStatus::Expired);
        assert_eq!(calculate_risk_score(&record).score, 7);
    }

    #[test]
    fn round_to_precision() {
        assert!((round_to(3.0, 1) - 3.0).abs() < f64::EPSILON);
        assert!((round_to(2.666_666, 2) - 2.67).abs() < 1e-9);
        assert!((round_to(3.45, 0) - 3.0).abs() < f64::EPSILON);
    }
}
