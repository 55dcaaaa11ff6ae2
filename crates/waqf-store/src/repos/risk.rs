//! Risk register repository.

use waqf_core::entities::RiskRegisterItem;
use waqf_core::enums::EntityType;

use crate::error::StoreError;
use crate::service::WaqfService;

impl WaqfService {
    pub fn get_all_risks(&self) -> Result<Vec<RiskRegisterItem>, StoreError> {
        self.load_all()
    }

    /// Register entries of one institution in stored order.
    pub fn get_risks(&self, institution_id: &str) -> Result<Vec<RiskRegisterItem>, StoreError> {
        Ok(self
            .get_all_risks()?
            .into_iter()
            .filter(|r| r.institution_id == institution_id)
            .collect())
    }

    /// # Errors
    ///
    /// Returns `StoreError::Core` if probability or impact is outside 1–5 or
    /// the title is blank.
    pub fn save_risk(&mut self, mut risk: RiskRegisterItem) -> Result<RiskRegisterItem, StoreError> {
        risk.validate()?;
        if risk.id.is_empty() {
            risk.id = self.generate_id(EntityType::Risk)?;
        }
        self.upsert(&risk)?;
        Ok(risk)
    }

    pub fn delete_risk(&mut self, id: &str) -> Result<bool, StoreError> {
        self.remove::<RiskRegisterItem>(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_risk;
    use rstest::rstest;

    #[rstest]
    #[case(0, 3)]
    #[case(3, 6)]
    #[case(6, 6)]
    fn out_of_range_ratings_are_rejected(#[case] probability: u8, #[case] impact: u8) {
        let mut svc = WaqfService::in_memory();
        assert!(svc.save_risk(sample_risk("ins-1", probability, impact)).is_err());
    }

    #[test]
    fn risks_filter_by_institution_and_delete() {
        let mut svc = WaqfService::in_memory();
        let kept = svc.save_risk(sample_risk("ins-1", 5, 4)).unwrap();
        svc.save_risk(sample_risk("ins-2", 1, 1)).unwrap();
        let dropped = svc.save_risk(sample_risk("ins-1", 2, 2)).unwrap();

        assert!(svc.delete_risk(&dropped.id).unwrap());
        let remaining = svc.get_risks("ins-1").unwrap();
        assert_eq!(remaining, vec![kept]);
    }
}
