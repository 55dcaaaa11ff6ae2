//! JSONL trail writer.
//!
//! Appends `TrailOperation` records to per-entity `{trail_dir}/{entity}.jsonl`
//! files. Uses `serde_jsonlines::append_json_lines` for per-line appends.

use std::path::{Path, PathBuf};

use waqf_core::enums::{EntityType, TrailOp};
use waqf_core::trail::TrailOperation;
use waqf_schema::SchemaRegistry;

use crate::error::StoreError;

/// Appends trail operations to per-entity JSONL files.
pub struct TrailWriter {
    trail_dir: PathBuf,
    enabled: bool,
}

impl TrailWriter {
    /// Create a writer rooted at `trail_dir`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(trail_dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&trail_dir)?;
        Ok(Self {
            trail_dir,
            enabled: true,
        })
    }

    /// A writer that drops every operation. Used by memory-only stores.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            trail_dir: PathBuf::new(),
            enabled: false,
        }
    }

    /// Disabled while replaying so replayed operations are not re-appended.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// File holding the operations of one entity collection.
    #[must_use]
    pub fn file_for(&self, entity: EntityType) -> PathBuf {
        self.trail_dir.join(format!("{entity}.jsonl"))
    }

    /// Append an operation to its entity's file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the append fails.
    pub fn append(&self, op: &TrailOperation) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }
        serde_jsonlines::append_json_lines(self.file_for(op.entity), [op])?;
        Ok(())
    }

    /// Append, first checking `Create` payloads against the entity schema.
    ///
    /// Validation is warn-only; a mismatch is logged and the write proceeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the append fails.
    pub fn append_validated(
        &self,
        op: &TrailOperation,
        schema: &SchemaRegistry,
    ) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        if op.op == TrailOp::Create {
            if let Err(e) = schema.validate_entity(op.entity, &op.data) {
                tracing::warn!(entity = %op.entity, id = %op.id, error = %e, "trail payload failed schema validation");
            }
        }

        self.append(op)
    }

    #[must_use]
    pub fn trail_dir(&self) -> &Path {
        &self.trail_dir
    }
}
