//! Improvement (backlog) item repository.

use waqf_core::entities::{EvaluationRef, ImprovementItem};
use waqf_core::enums::EntityType;
use waqf_core::errors::CoreError;

use crate::error::StoreError;
use crate::service::WaqfService;

impl WaqfService {
    pub fn get_all_improvements(&self) -> Result<Vec<ImprovementItem>, StoreError> {
        self.load_all()
    }

    /// Items grouped under one evaluation, in stored order.
    pub fn get_improvements(
        &self,
        evaluation: &EvaluationRef,
    ) -> Result<Vec<ImprovementItem>, StoreError> {
        let items: Vec<ImprovementItem> = self
            .get_all_improvements()?
            .into_iter()
            .filter(|item| &item.evaluation == evaluation)
            .collect();
        tracing::debug!(%evaluation, count = items.len(), "improvements loaded");
        Ok(items)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if no item has this ID.
    pub fn get_improvement(&self, id: &str) -> Result<ImprovementItem, StoreError> {
        self.load(id)?
            .ok_or_else(|| CoreError::not_found(EntityType::Improvement, id).into())
    }

    /// Save an item, minting an ID when it has none.
    pub fn save_improvement(
        &mut self,
        mut item: ImprovementItem,
    ) -> Result<ImprovementItem, StoreError> {
        if item.id.is_empty() {
            item.id = self.generate_id(EntityType::Improvement)?;
        }
        self.upsert(&item)?;
        Ok(item)
    }

    pub fn delete_improvement(&mut self, id: &str) -> Result<bool, StoreError> {
        self.remove::<ImprovementItem>(id)
    }
}
