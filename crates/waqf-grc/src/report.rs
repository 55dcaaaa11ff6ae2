//! Single-institution reporting projection.
//!
//! Assembles aggregator outputs into one bundle for presentation; no
//! computation happens here beyond what [`crate::aggregate`] provides.

use serde::Serialize;
use waqf_core::entities::EvaluationRef;

use crate::aggregate::{AxisAverage, ComplianceSummary, RiskTierCounts};
use crate::backlog::BacklogCounts;
use crate::scoring::ComplianceRiskScore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBundle {
    pub institution_id: String,
    pub cycle_year: i32,
    pub evaluation: EvaluationRef,
    /// Radar series: one entry per axis with responses.
    pub axes: Vec<AxisAverage>,
    pub overall_average: f64,
    pub backlog: BacklogCounts,
    pub risks: RiskTierCounts,
    pub compliance: ComplianceSummary,
    pub compliance_risk: ComplianceRiskScore,
}
