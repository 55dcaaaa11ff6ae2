//! Error types for the GRC engine.

use thiserror::Error;
use waqf_config::ConfigError;
use waqf_core::errors::CoreError;
use waqf_store::StoreError;

#[derive(Debug, Error)]
pub enum GrcError {
    /// Persistence collaborator failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GrcError {
    /// Whether the caller named an entity that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Core(CoreError::NotFound { .. })
                | Self::Store(StoreError::Core(CoreError::NotFound { .. }))
        )
    }
}
