//! Service layer orchestrating backend writes with the JSONL trail.
//!
//! `WaqfService` wraps a [`KvBackend`], a [`TrailWriter`], and the
//! [`SchemaRegistry`]. The typed repositories in [`crate::repos`] are all
//! implemented as `impl WaqfService`.
//!
//! Every mutation follows the same protocol:
//! 1. Snapshot the previous document
//! 2. Write the backend
//! 3. Append the trail operation
//! 4. On trail failure, restore the snapshot and return the error

use std::path::Path;

use waqf_config::StoreConfig;
use waqf_core::audit_detail::StatusChangedDetail;
use waqf_core::enums::{EntityType, TrailOp};
use waqf_core::ids::{format_id, prefix_for};
use waqf_core::trail::TrailOperation;
use waqf_schema::SchemaRegistry;

use crate::backend::{KvBackend, MemoryBackend};
use crate::error::StoreError;
use crate::helpers::{Record, decode, encode, random_suffix};
use crate::trail::{ReplaySummary, TrailReplayer, TrailWriter};

/// Attempts at minting an unused ID before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

pub struct WaqfService {
    backend: Box<dyn KvBackend>,
    trail: TrailWriter,
    schema: SchemaRegistry,
}

impl WaqfService {
    /// Memory-only service with the trail disabled.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryBackend::new()), TrailWriter::disabled())
    }

    /// Service over an arbitrary backend and trail writer.
    #[must_use]
    pub fn with_backend(backend: Box<dyn KvBackend>, trail: TrailWriter) -> Self {
        Self {
            backend,
            trail,
            schema: SchemaRegistry::new(),
        }
    }

    /// Open a trail-backed store under `data_dir`, replaying existing history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the trail directory cannot be created or the
    /// existing trail cannot be replayed.
    pub fn open_local(data_dir: &Path) -> Result<Self, StoreError> {
        Self::open_local_with(data_dir, false)
    }

    /// Like [`open_local`](Self::open_local), optionally schema-checking the
    /// replayed `Create` payloads.
    ///
    /// # Errors
    ///
    /// Same as [`open_local`](Self::open_local).
    pub fn open_local_with(data_dir: &Path, validate_on_replay: bool) -> Result<Self, StoreError> {
        let trail_dir = data_dir.join("trail");
        let mut service = Self::with_backend(
            Box::new(MemoryBackend::new()),
            TrailWriter::new(trail_dir.clone())?,
        );
        let summary = service.replay(&trail_dir, validate_on_replay)?;
        tracing::info!(
            data_dir = %data_dir.display(),
            operations = summary.operations_replayed,
            invalid_payloads = summary.invalid_payloads,
            "store opened"
        );
        Ok(service)
    }

    /// Open the store described by configuration.
    ///
    /// # Errors
    ///
    /// Same as [`open_local`](Self::open_local).
    pub fn open_from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        if config.trail_enabled {
            Self::open_local_with(Path::new(&config.data_dir), config.validate_on_replay)
        } else {
            Ok(Self::in_memory())
        }
    }

    /// Replay a trail directory into the backend with trail writing paused.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` from [`TrailReplayer::replay`].
    pub fn replay(
        &mut self,
        trail_dir: &Path,
        validate: bool,
    ) -> Result<ReplaySummary, StoreError> {
        let was_enabled = self.trail.is_enabled();
        self.trail.set_enabled(false);
        let result = TrailReplayer::replay(self.backend.as_mut(), trail_dir, validate);
        self.trail.set_enabled(was_enabled);
        result
    }

    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    #[must_use]
    pub const fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    /// Mint `"{prefix}-{8 hex}"`, retrying while the ID is taken.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdGeneration` if no free ID was found.
    pub fn generate_id(&self, entity: EntityType) -> Result<String, StoreError> {
        self.generate_prefixed_id(entity, prefix_for(entity))
    }

    pub(crate) fn generate_prefixed_id(
        &self,
        entity: EntityType,
        prefix: &str,
    ) -> Result<String, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = format_id(prefix, &random_suffix()?);
            if self.backend.read(entity, &id)?.is_none() {
                return Ok(id);
            }
        }
        Err(StoreError::IdGeneration(format!(
            "no free {entity} id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    // -----------------------------------------------------------------------
    // Generic record access
    // -----------------------------------------------------------------------

    /// Read one record by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read or decode fails.
    pub fn load<T: Record>(&self, id: &str) -> Result<Option<T>, StoreError> {
        self.backend.read(T::ENTITY, id)?.map(decode).transpose()
    }

    /// Read a whole collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read or any decode fails.
    pub fn load_all<T: Record>(&self) -> Result<Vec<T>, StoreError> {
        self.backend
            .scan(T::ENTITY)?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Insert a new record, appending a schema-checked `Create` operation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend write or trail append fails.
    pub fn insert<T: Record>(&mut self, record: &T) -> Result<(), StoreError> {
        let data = encode(record)?;
        let op = TrailOperation::now(TrailOp::Create, T::ENTITY, record.id(), data.clone());
        self.persist(T::ENTITY, record.id(), data, &op)
    }

    /// Replace an existing record, appending an `Update` operation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend write or trail append fails.
    pub fn update<T: Record>(&mut self, record: &T) -> Result<(), StoreError> {
        let data = encode(record)?;
        let op = TrailOperation::now(TrailOp::Update, T::ENTITY, record.id(), data.clone());
        self.persist(T::ENTITY, record.id(), data, &op)
    }

    /// Insert the record if its ID is new, replace it otherwise.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend access or trail append fails.
    pub fn upsert<T: Record>(&mut self, record: &T) -> Result<(), StoreError> {
        if self.backend.read(T::ENTITY, record.id())?.is_some() {
            self.update(record)
        } else {
            self.insert(record)
        }
    }

    /// Replace a record after a status change, recording the edge taken.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend write or trail append fails.
    pub fn record_transition<T: Record>(
        &mut self,
        record: &T,
        detail: StatusChangedDetail,
    ) -> Result<(), StoreError> {
        let data = encode(record)?;
        let op = TrailOperation::now(TrailOp::Transition, T::ENTITY, record.id(), data.clone())
            .with_detail(detail);
        self.persist(T::ENTITY, record.id(), data, &op)
    }

    /// Delete a record. Returns whether it existed; absent IDs leave no trail.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend removal or trail append fails.
    pub fn remove<T: Record>(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(previous) = self.backend.read(T::ENTITY, id)? else {
            return Ok(false);
        };
        let Some(index) = self.backend.remove(T::ENTITY, id)? else {
            return Ok(false);
        };

        let op = TrailOperation::now(TrailOp::Delete, T::ENTITY, id, serde_json::Value::Null);
        if let Err(e) = self.trail.append(&op) {
            tracing::warn!(entity = %T::ENTITY, %id, error = %e, "trail append failed; restoring");
            self.backend.restore(T::ENTITY, id, previous, index)?;
            return Err(e);
        }
        Ok(true)
    }

    fn persist(
        &mut self,
        entity: EntityType,
        id: &str,
        data: serde_json::Value,
        op: &TrailOperation,
    ) -> Result<(), StoreError> {
        let previous = self.backend.read(entity, id)?;
        self.backend.write(entity, id, data)?;

        if let Err(e) = self.trail.append_validated(op, &self.schema) {
            tracing::warn!(%entity, %id, error = %e, "trail append failed; rolling back");
            match previous {
                Some(value) => self.backend.write(entity, id, value)?,
                None => {
                    self.backend.remove(entity, id)?;
                }
            }
            return Err(e);
        }
        Ok(())
    }
}
