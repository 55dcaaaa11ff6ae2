//! Fixtures shared by the waqf-grc integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use waqf_core::entities::{
    ComplianceRecord, EvaluationResponse, Indicator, Institution, RiskRegisterItem,
};
use waqf_core::enums::{BoardStatus, InstitutionKind, InstitutionStatus, RiskCategory, RiskStatus};
use waqf_grc::GrcEngine;

/// Install a test subscriber filtered by `WAQF_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("WAQF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn institution(name: &str, kind: InstitutionKind, capital_omr: f64) -> Institution {
    Institution {
        id: String::new(),
        name: name.into(),
        kind,
        capital_omr,
        employees_omani: 3,
        employees_non_omani: 1,
        governorate: "Muscat".into(),
        wilayat: "Seeb".into(),
        license_number: "W-0001".into(),
        manager_name: "Aisha Al-Balushi".into(),
        contact_phone: "+968 2400 0001".into(),
        email: "waqf@example.om".into(),
        establishment_date: date(2020, 1, 15),
        created_at: Utc::now(),
    }
}

pub fn indicator(engine: &mut GrcEngine, axis: &str, text: &str) -> Indicator {
    engine
        .store_mut()
        .save_indicator(Indicator {
            id: String::new(),
            axis: axis.into(),
            text: text.into(),
        })
        .unwrap()
}

pub fn respond(engine: &mut GrcEngine, evaluation_id: &str, indicator_id: &str, score: f64) {
    engine
        .store_mut()
        .save_response(EvaluationResponse {
            id: String::new(),
            evaluation_id: evaluation_id.into(),
            indicator_id: indicator_id.into(),
            score,
            comment: None,
            created_at: Utc::now(),
        })
        .unwrap();
}

pub fn risk(
    engine: &mut GrcEngine,
    institution_id: &str,
    title: &str,
    probability: u8,
    impact: u8,
) -> RiskRegisterItem {
    engine
        .store_mut()
        .save_risk(RiskRegisterItem {
            id: String::new(),
            institution_id: institution_id.into(),
            title: title.into(),
            category: RiskCategory::Operational,
            probability,
            impact,
            mitigation_plan: None,
            status: RiskStatus::Open,
            created_at: Utc::now(),
        })
        .unwrap()
}

/// A record satisfying all six predicates.
pub fn clean_compliance(institution_id: &str, cycle_year: i32) -> ComplianceRecord {
    ComplianceRecord {
        institution_status: Some(InstitutionStatus::Active),
        board_status: Some(BoardStatus::Active),
        has_executive_management: Some(true),
        has_auditor: Some(true),
        has_minutes_prev_year: Some(true),
        has_financial_report_prev_year: Some(true),
        ..ComplianceRecord::draft(institution_id, cycle_year)
    }
}
