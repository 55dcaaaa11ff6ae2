//! Schema registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("Unknown schema: {0}")]
    NotFound(String),

    /// A document did not match its entity schema.
    #[error("Document does not match schema '{schema}': {}", errors.join("; "))]
    ValidationFailed { schema: String, errors: Vec<String> },

    /// A registered schema could not be compiled.
    #[error("Schema compilation failed: {0}")]
    Generation(String),
}
