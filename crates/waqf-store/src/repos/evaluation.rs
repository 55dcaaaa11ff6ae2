//! Evaluation repository.

use chrono::Utc;
use waqf_core::entities::Evaluation;
use waqf_core::enums::EntityType;

use crate::error::StoreError;
use crate::service::WaqfService;

impl WaqfService {
    pub fn get_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        self.load_all()
    }

    /// The formal evaluation of an institution for a cycle, if one exists.
    pub fn find_evaluation(
        &self,
        institution_id: &str,
        cycle_year: i32,
    ) -> Result<Option<Evaluation>, StoreError> {
        Ok(self
            .get_evaluations()?
            .into_iter()
            .find(|e| e.institution_id == institution_id && e.cycle_year == cycle_year))
    }

    /// Return the cycle's evaluation, creating it on first use.
    pub fn open_evaluation(
        &mut self,
        institution_id: &str,
        cycle_year: i32,
    ) -> Result<Evaluation, StoreError> {
        if let Some(existing) = self.find_evaluation(institution_id, cycle_year)? {
            return Ok(existing);
        }
        let evaluation = Evaluation {
            id: self.generate_id(EntityType::Evaluation)?,
            institution_id: institution_id.to_string(),
            cycle_year,
            created_at: Utc::now(),
        };
        self.insert(&evaluation)?;
        tracing::debug!(id = %evaluation.id, institution_id, cycle_year, "evaluation opened");
        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_evaluation_is_one_per_cycle() {
        let mut svc = WaqfService::in_memory();
        let first = svc.open_evaluation("ins-1", 2025).unwrap();
        let again = svc.open_evaluation("ins-1", 2025).unwrap();
        let next_year = svc.open_evaluation("ins-1", 2026).unwrap();

        assert_eq!(first, again);
        assert_ne!(first.id, next_year.id);
        assert_eq!(svc.get_evaluations().unwrap().len(), 2);
        assert_eq!(svc.find_evaluation("ins-2", 2025).unwrap(), None);
    }
}
