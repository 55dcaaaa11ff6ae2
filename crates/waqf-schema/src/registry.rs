//! Central schema registry for all waqf record types.
//!
//! The `SchemaRegistry` builds JSON Schemas from waqf-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use waqf_core::enums::EntityType;

use crate::error::SchemaError;

/// Central store of all JSON Schemas for persisted records.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

/// Registry name of the schema describing one entity collection.
#[must_use]
pub const fn schema_name(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Institution => "institution",
        EntityType::Compliance => "compliance_record",
        EntityType::Risk => "risk_register_item",
        EntityType::Evaluation => "evaluation",
        EntityType::Indicator => "indicator",
        EntityType::Response => "evaluation_response",
        EntityType::Improvement => "improvement_item",
    }
}

impl SchemaRegistry {
    /// Build a new registry containing all entity, trail, and detail schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema, which `schemars` output never triggers.
    #[must_use]
    pub fn new() -> Self {
        use waqf_core::entities::{
            ComplianceRecord, Evaluation, EvaluationResponse, ImprovementItem, Indicator,
            Institution, RiskRegisterItem,
        };

        let mut schemas = HashMap::new();

        // --- Entity types (7) ---
        register!(schemas, schema_name(EntityType::Institution), Institution);
        register!(schemas, schema_name(EntityType::Compliance), ComplianceRecord);
        register!(schemas, schema_name(EntityType::Risk), RiskRegisterItem);
        register!(schemas, schema_name(EntityType::Evaluation), Evaluation);
        register!(schemas, schema_name(EntityType::Indicator), Indicator);
        register!(schemas, schema_name(EntityType::Response), EvaluationResponse);
        register!(schemas, schema_name(EntityType::Improvement), ImprovementItem);

        // --- Trail envelope + detail (2) ---
        register!(schemas, "trail_operation", waqf_core::trail::TrailOperation);
        register!(
            schemas,
            "status_changed_detail",
            waqf_core::audit_detail::StatusChangedDetail
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// Validate a JSON value against the schema of an entity collection.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn validate_entity(
        &self,
        entity: EntityType,
        instance: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        self.validate(schema_name(entity), instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
