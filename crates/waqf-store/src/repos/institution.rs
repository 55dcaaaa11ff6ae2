//! Institution repository.

use waqf_core::entities::Institution;
use waqf_core::enums::EntityType;
use waqf_core::errors::CoreError;

use crate::error::StoreError;
use crate::service::WaqfService;

impl WaqfService {
    pub fn get_institutions(&self) -> Result<Vec<Institution>, StoreError> {
        self.load_all()
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if no institution has this ID.
    pub fn get_institution(&self, id: &str) -> Result<Institution, StoreError> {
        self.load(id)?
            .ok_or_else(|| CoreError::not_found(EntityType::Institution, id).into())
    }

    /// Validate and save a profile, minting an ID when it has none.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the profile is incomplete, or a
    /// persistence error.
    pub fn save_institution(&mut self, mut institution: Institution) -> Result<Institution, StoreError> {
        institution.validate()?;
        if institution.id.is_empty() {
            institution.id = self.generate_id(EntityType::Institution)?;
        }
        self.upsert(&institution)?;
        tracing::debug!(id = %institution.id, name = %institution.name, "institution saved");
        Ok(institution)
    }

    pub fn delete_institution(&mut self, id: &str) -> Result<bool, StoreError> {
        self.remove::<Institution>(id)
    }
}
