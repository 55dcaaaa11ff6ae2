//! Document encoding helpers and ID minting.
//!
//! Every repo converts between typed entities and the JSON documents held by
//! the backend. These helpers isolate that conversion so decode failures carry
//! the collection and ID they came from.

use serde::Serialize;
use serde::de::DeserializeOwned;
use waqf_core::entities::{
    ComplianceRecord, Evaluation, EvaluationResponse, ImprovementItem, Indicator, Institution,
    RiskRegisterItem,
};
use waqf_core::enums::EntityType;

use crate::error::StoreError;

/// A typed entity stored in one backend collection.
pub trait Record: Serialize + DeserializeOwned {
    const ENTITY: EntityType;

    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($ty:ty, $entity:expr) => {
        impl Record for $ty {
            const ENTITY: EntityType = $entity;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

impl_record!(Institution, EntityType::Institution);
impl_record!(ComplianceRecord, EntityType::Compliance);
impl_record!(RiskRegisterItem, EntityType::Risk);
impl_record!(Evaluation, EntityType::Evaluation);
impl_record!(Indicator, EntityType::Indicator);
impl_record!(EvaluationResponse, EntityType::Response);
impl_record!(ImprovementItem, EntityType::Improvement);

/// Encode an entity as a backend document.
///
/// # Errors
///
/// Returns `StoreError::Serialization` if the entity cannot be encoded.
pub fn encode<T: Record>(record: &T) -> Result<serde_json::Value, StoreError> {
    Ok(serde_json::to_value(record)?)
}

/// Decode a backend document into an entity.
///
/// # Errors
///
/// Returns `StoreError::InvalidState` naming the collection if the document
/// does not match the entity shape.
pub fn decode<T: Record>(value: serde_json::Value) -> Result<T, StoreError> {
    serde_json::from_value(value).map_err(|e| {
        StoreError::InvalidState(format!("Failed to decode {} document: {e}", T::ENTITY))
    })
}

/// Eight lowercase hex characters from the OS random source.
///
/// # Errors
///
/// Returns `StoreError::IdGeneration` if the random source is unavailable.
pub fn random_suffix() -> Result<String, StoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| StoreError::IdGeneration(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_suffix_is_eight_hex_chars() {
        let suffix = random_suffix().unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn decode_names_collection_on_failure() {
        let err = decode::<Indicator>(serde_json::json!({"id": "ind-1"})).unwrap_err();
        assert!(err.to_string().contains("indicator"), "{err}");
    }
}
