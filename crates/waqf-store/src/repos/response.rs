//! Evaluation response repository.

use waqf_core::entities::EvaluationResponse;
use waqf_core::enums::EntityType;

use crate::error::StoreError;
use crate::service::WaqfService;

impl WaqfService {
    pub fn get_all_responses(&self) -> Result<Vec<EvaluationResponse>, StoreError> {
        self.load_all()
    }

    /// Responses of one evaluation in stored order.
    pub fn get_responses(&self, evaluation_id: &str) -> Result<Vec<EvaluationResponse>, StoreError> {
        let responses: Vec<EvaluationResponse> = self
            .get_all_responses()?
            .into_iter()
            .filter(|r| r.evaluation_id == evaluation_id)
            .collect();
        tracing::debug!(evaluation_id, count = responses.len(), "responses loaded");
        Ok(responses)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Core` if the score is outside [0, 5].
    pub fn save_response(
        &mut self,
        mut response: EvaluationResponse,
    ) -> Result<EvaluationResponse, StoreError> {
        response.validate()?;
        if response.id.is_empty() {
            response.id = self.generate_id(EntityType::Response)?;
        }
        self.upsert(&response)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn response(evaluation_id: &str, score: f64) -> EvaluationResponse {
        EvaluationResponse {
            id: String::new(),
            evaluation_id: evaluation_id.into(),
            indicator_id: "ind-00000001".into(),
            score,
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn responses_filter_by_evaluation() {
        let mut svc = WaqfService::in_memory();
        svc.save_response(response("evl-a", 4.0)).unwrap();
        svc.save_response(response("evl-b", 2.0)).unwrap();
        svc.save_response(response("evl-a", 1.0)).unwrap();

        let scores: Vec<f64> = svc.get_responses("evl-a").unwrap().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![4.0, 1.0]);
        assert_eq!(svc.get_all_responses().unwrap().len(), 3);
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let mut svc = WaqfService::in_memory();
        assert!(svc.save_response(response("evl-a", 5.5)).is_err());
        assert!(svc.get_all_responses().unwrap().is_empty());
    }
}
