//! Storage backends.
//!
//! A backend is an opaque synchronous map of JSON documents keyed by
//! `(EntityType, id)`. Writes are upserts: an existing ID is replaced in place,
//! a new ID is appended, so `scan` returns records in first-insertion order.

use std::collections::BTreeMap;

use waqf_core::enums::EntityType;

use crate::error::StoreError;

/// Synchronous key-value collaborator behind [`WaqfService`](crate::WaqfService).
pub trait KvBackend {
    /// Read one record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the backend cannot be read.
    fn read(&self, entity: EntityType, id: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Read every record of a collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the backend cannot be read.
    fn scan(&self, entity: EntityType) -> Result<Vec<serde_json::Value>, StoreError>;

    /// Insert or replace a record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the write is rejected. A rejected write
    /// leaves the previous value untouched.
    fn write(
        &mut self,
        entity: EntityType,
        id: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError>;

    /// Remove a record. Returns the position it held in `scan` order, or
    /// `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the removal is rejected.
    fn remove(&mut self, entity: EntityType, id: &str) -> Result<Option<usize>, StoreError>;

    /// Put a removed record back at the position [`remove`](Self::remove)
    /// reported. Positions past the end append.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the write is rejected.
    fn restore(
        &mut self,
        entity: EntityType,
        id: &str,
        value: serde_json::Value,
        index: usize,
    ) -> Result<(), StoreError>;
}

/// In-process backend: one ordered list of `(id, document)` per collection.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    collections: BTreeMap<EntityType, Vec<(String, serde_json::Value)>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in one collection.
    #[must_use]
    pub fn len(&self, entity: EntityType) -> usize {
        self.collections.get(&entity).map_or(0, Vec::len)
    }

    /// Whether every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.values().all(Vec::is_empty)
    }
}

impl KvBackend for MemoryBackend {
    fn read(&self, entity: EntityType, id: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.collections.get(&entity).and_then(|records| {
            records
                .iter()
                .find(|(key, _)| key == id)
                .map(|(_, value)| value.clone())
        }))
    }

    fn scan(&self, entity: EntityType) -> Result<Vec<serde_json::Value>, StoreError> {
        Ok(self
            .collections
            .get(&entity)
            .map(|records| records.iter().map(|(_, value)| value.clone()).collect())
            .unwrap_or_default())
    }

    fn write(
        &mut self,
        entity: EntityType,
        id: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        let records = self.collections.entry(entity).or_default();
        match records.iter_mut().find(|(key, _)| key == id) {
            Some((_, existing)) => *existing = value,
            None => records.push((id.to_string(), value)),
        }
        Ok(())
    }

    fn remove(&mut self, entity: EntityType, id: &str) -> Result<Option<usize>, StoreError> {
        let Some(records) = self.collections.get_mut(&entity) else {
            return Ok(None);
        };
        let index = records.iter().position(|(key, _)| key == id);
        if let Some(i) = index {
            records.remove(i);
        }
        Ok(index)
    }

    fn restore(
        &mut self,
        entity: EntityType,
        id: &str,
        value: serde_json::Value,
        index: usize,
    ) -> Result<(), StoreError> {
        let records = self.collections.entry(entity).or_default();
        records.retain(|(key, _)| key != id);
        let index = index.min(records.len());
        records.insert(index, (id.to_string(), value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn write_appends_then_replaces_in_place() {
        let mut backend = MemoryBackend::new();
        backend.write(EntityType::Risk, "rsk-1", json!({"n": 1})).unwrap();
        backend.write(EntityType::Risk, "rsk-2", json!({"n": 2})).unwrap();
        backend.write(EntityType::Risk, "rsk-1", json!({"n": 3})).unwrap();

        let all = backend.scan(EntityType::Risk).unwrap();
        assert_eq!(all, vec![json!({"n": 3}), json!({"n": 2})]);
        assert_eq!(backend.len(EntityType::Risk), 2);
    }

    #[test]
    fn collections_are_isolated() {
        let mut backend = MemoryBackend::new();
        backend.write(EntityType::Risk, "x", json!(1)).unwrap();
        assert_eq!(backend.read(EntityType::Improvement, "x").unwrap(), None);
        assert!(backend.scan(EntityType::Institution).unwrap().is_empty());
    }

    #[test]
    fn remove_reports_position() {
        let mut backend = MemoryBackend::new();
        backend.write(EntityType::Indicator, "ind-1", json!({})).unwrap();
        backend.write(EntityType::Indicator, "ind-2", json!({})).unwrap();
        assert_eq!(backend.remove(EntityType::Indicator, "ind-2").unwrap(), Some(1));
        assert_eq!(backend.remove(EntityType::Indicator, "ind-1").unwrap(), Some(0));
        assert_eq!(backend.remove(EntityType::Indicator, "ind-1").unwrap(), None);
        assert_eq!(backend.remove(EntityType::Evaluation, "evl-1").unwrap(), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn restore_reinserts_at_original_position() {
        let mut backend = MemoryBackend::new();
        for (id, n) in [("rsk-a", 1), ("rsk-b", 2), ("rsk-c", 3)] {
            backend.write(EntityType::Risk, id, json!({"n": n})).unwrap();
        }
        let index = backend.remove(EntityType::Risk, "rsk-a").unwrap().unwrap();
        backend
            .restore(EntityType::Risk, "rsk-a", json!({"n": 1}), index)
            .unwrap();
        assert_eq!(
            backend.scan(EntityType::Risk).unwrap(),
            vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]
        );

        backend.restore(EntityType::Risk, "rsk-z", json!({"n": 9}), 99).unwrap();
        assert_eq!(backend.len(EntityType::Risk), 4);
    }
}
