//! Shared fixtures for waqf-store unit tests.

pub(crate) mod helpers {
    use chrono::{NaiveDate, Utc};
    use waqf_core::entities::{ComplianceRecord, Indicator, Institution, RiskRegisterItem};
    use waqf_core::enums::{InstitutionKind, RiskCategory, RiskStatus};

    pub fn sample_indicator(id: &str, axis: &str, text: &str) -> Indicator {
        Indicator {
            id: id.into(),
            axis: axis.into(),
            text: text.into(),
        }
    }

    pub fn sample_institution(name: &str) -> Institution {
        Institution {
            id: String::new(),
            name: name.into(),
            kind: InstitutionKind::PublicWaqf,
            capital_omr: 250_000.0,
            employees_omani: 4,
            employees_non_omani: 1,
            governorate: "Muscat".into(),
            wilayat: "Bawshar".into(),
            license_number: "W-1021".into(),
            manager_name: "Salim Al-Harthy".into(),
            contact_phone: "+968 2400 0000".into(),
            email: "office@example.om".into(),
            establishment_date: NaiveDate::from_ymd_opt(2019, 3, 10).unwrap(),
            created_at: Utc::now(),
        }
    }

    pub fn sample_risk(institution_id: &str, probability: u8, impact: u8) -> RiskRegisterItem {
        RiskRegisterItem {
            id: String::new(),
            institution_id: institution_id.into(),
            title: "Single-tenant rental income".into(),
            category: RiskCategory::Financial,
            probability,
            impact,
            mitigation_plan: None,
            status: RiskStatus::Open,
            created_at: Utc::now(),
        }
    }

    pub fn sample_compliance(institution_id: &str, cycle_year: i32) -> ComplianceRecord {
        ComplianceRecord::draft(institution_id, cycle_year)
    }
}
