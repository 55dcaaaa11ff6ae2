//! Compliance record repository.
//!
//! At most one record exists per (institution, cycle year). Saving a record
//! for a pair that already has one replaces it under the original ID. A
//! supplied ID owned by another pair is replaced with a fresh one.

use chrono::Utc;
use waqf_core::entities::ComplianceRecord;
use waqf_core::enums::EntityType;
use waqf_core::ids::{PREFIX_REQUIREMENT, format_id};

use crate::error::StoreError;
use crate::helpers::random_suffix;
use crate::service::WaqfService;

impl WaqfService {
    pub fn get_all_compliance(&self) -> Result<Vec<ComplianceRecord>, StoreError> {
        self.load_all()
    }

    pub fn get_compliance(
        &self,
        institution_id: &str,
        cycle_year: i32,
    ) -> Result<Option<ComplianceRecord>, StoreError> {
        let record = self
            .get_all_compliance()?
            .into_iter()
            .find(|r| r.institution_id == institution_id && r.cycle_year == cycle_year);
        tracing::debug!(institution_id, cycle_year, found = record.is_some(), "compliance lookup");
        Ok(record)
    }

    /// Upsert by (institution, cycle year), stamping `updated_at`.
    ///
    /// Custom requirement items without an ID get one.
    pub fn save_compliance(
        &mut self,
        mut record: ComplianceRecord,
    ) -> Result<ComplianceRecord, StoreError> {
        match self.get_compliance(&record.institution_id, record.cycle_year)? {
            Some(existing) => record.id = existing.id,
            None if record.id.is_empty() || self.compliance_id_taken(&record.id)? => {
                record.id = self.generate_id(EntityType::Compliance)?;
            }
            None => {}
        }

        for item in &mut record.custom_requirements {
            if item.id.is_empty() {
                item.id = format_id(PREFIX_REQUIREMENT, &random_suffix()?);
            }
        }

        record.updated_at = Utc::now();
        self.upsert(&record)?;
        Ok(record)
    }

    /// An ID already owned by another (institution, cycle year) pair.
    fn compliance_id_taken(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.load::<ComplianceRecord>(id)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_compliance;
    use waqf_core::entities::RequirementItem;
    use waqf_core::enums::BoardStatus;

    #[test]
    fn repeated_saves_keep_one_record_and_its_id() {
        let mut svc = WaqfService::in_memory();
        let first = svc.save_compliance(sample_compliance("ins-1", 2025)).unwrap();

        let mut revised = sample_compliance("ins-1", 2025);
        revised.board_status = Some(BoardStatus::Active);
        let second = svc.save_compliance(revised).unwrap();

        assert_eq!(first.id, second.id);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(svc.get_all_compliance().unwrap().len(), 1);
        assert_eq!(
            svc.get_compliance("ins-1", 2025).unwrap().unwrap().board_status,
            Some(BoardStatus::Active)
        );
    }

    #[test]
    fn cycles_are_separate_records() {
        let mut svc = WaqfService::in_memory();
        let a = svc.save_compliance(sample_compliance("ins-1", 2024)).unwrap();
        let b = svc.save_compliance(sample_compliance("ins-1", 2025)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(svc.get_compliance("ins-2", 2025).unwrap(), None);
    }

    #[test]
    fn copied_record_for_new_cycle_gets_its_own_id() {
        let mut svc = WaqfService::in_memory();
        let last_year = svc.save_compliance(sample_compliance("ins-1", 2024)).unwrap();

        let mut carried = last_year.clone();
        carried.cycle_year = 2025;
        let this_year = svc.save_compliance(carried).unwrap();

        assert_ne!(this_year.id, last_year.id);
        let years: Vec<i32> = svc
            .get_all_compliance()
            .unwrap()
            .iter()
            .map(|r| r.cycle_year)
            .collect();
        assert_eq!(years, vec![2024, 2025]);
        assert_eq!(
            svc.get_compliance("ins-1", 2024).unwrap().map(|r| r.id),
            Some(last_year.id)
        );
    }

    #[test]
    fn unknown_supplied_id_is_kept_on_first_save() {
        let mut svc = WaqfService::in_memory();
        let mut record = sample_compliance("ins-1", 2025);
        record.id = "cmp-0000abcd".into();
        let saved = svc.save_compliance(record).unwrap();
        assert_eq!(saved.id, "cmp-0000abcd");
    }

    #[test]
    fn custom_requirements_get_ids() {
        let mut svc = WaqfService::in_memory();
        let mut record = sample_compliance("ins-1", 2025);
        record.custom_requirements.push(RequirementItem {
            id: String::new(),
            text: "Waqf deed registered with the ministry".into(),
            met: false,
        });
        let saved = svc.save_compliance(record).unwrap();
        assert!(saved.custom_requirements[0].id.starts_with("req-"));
    }
}
