//! Indicator catalogue repository.

use waqf_core::entities::Indicator;
use waqf_core::enums::EntityType;

use crate::error::StoreError;
use crate::service::WaqfService;

impl WaqfService {
    pub fn get_indicators(&self) -> Result<Vec<Indicator>, StoreError> {
        self.load_all()
    }

    pub fn get_indicator(&self, id: &str) -> Result<Option<Indicator>, StoreError> {
        self.load(id)
    }

    pub fn save_indicator(&mut self, mut indicator: Indicator) -> Result<Indicator, StoreError> {
        if indicator.id.is_empty() {
            indicator.id = self.generate_id(EntityType::Indicator)?;
        }
        self.upsert(&indicator)?;
        Ok(indicator)
    }
}
