//! Rebuild a backend from the JSONL trail.
//!
//! Each entity file is replayed in append order. Files are independent: every
//! operation touches exactly one collection, so cross-file ordering does not
//! change the result.

use std::path::Path;

use waqf_core::enums::{EntityType, TrailOp};
use waqf_core::trail::{TRAIL_VERSION, TrailOperation};
use waqf_schema::SchemaRegistry;

use crate::backend::KvBackend;
use crate::error::StoreError;

/// Counts from one replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub trail_files: u32,
    pub operations_replayed: u32,
    pub entities_created: u32,
    pub entities_deleted: u32,
    /// `Create` payloads that failed schema validation. Only counted when
    /// validation was requested.
    pub invalid_payloads: u32,
}

pub struct TrailReplayer;

impl TrailReplayer {
    /// Fold every trail file under `trail_dir` into `backend`.
    ///
    /// A missing directory replays nothing. With `validate`, `Create` payloads
    /// are checked against their schema; mismatches are logged and counted
    /// but still applied.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` on an unsupported trail version or
    /// an operation filed under the wrong entity, and `StoreError::Io` if a
    /// file cannot be read or parsed.
    pub fn replay(
        backend: &mut dyn KvBackend,
        trail_dir: &Path,
        validate: bool,
    ) -> Result<ReplaySummary, StoreError> {
        let mut summary = ReplaySummary::default();
        if !trail_dir.exists() {
            return Ok(summary);
        }

        let schema = validate.then(SchemaRegistry::new);

        for entity in EntityType::ALL {
            let path = trail_dir.join(format!("{entity}.jsonl"));
            if !path.exists() {
                continue;
            }
            summary.trail_files += 1;

            let ops: Vec<TrailOperation> =
                serde_jsonlines::json_lines(&path)?.collect::<Result<Vec<_>, _>>()?;

            for op in &ops {
                if op.v != TRAIL_VERSION {
                    return Err(StoreError::InvalidState(format!(
                        "Unsupported trail version {} for op {}",
                        op.v, op.id
                    )));
                }
                if op.entity != entity {
                    return Err(StoreError::InvalidState(format!(
                        "Operation {} for {} found in {} trail",
                        op.id, op.entity, entity
                    )));
                }

                if let Some(ref registry) = schema {
                    if op.op == TrailOp::Create {
                        if let Err(e) = registry.validate_entity(op.entity, &op.data) {
                            summary.invalid_payloads += 1;
                            tracing::warn!(entity = %op.entity, id = %op.id, error = %e, "replayed payload failed schema validation");
                        }
                    }
                }

                apply(backend, op, &mut summary)?;
                summary.operations_replayed += 1;
            }
        }

        tracing::debug!(
            files = summary.trail_files,
            ops = summary.operations_replayed,
            "trail replayed"
        );
        Ok(summary)
    }
}

fn apply(
    backend: &mut dyn KvBackend,
    op: &TrailOperation,
    summary: &mut ReplaySummary,
) -> Result<(), StoreError> {
    match op.op {
        TrailOp::Create => {
            backend.write(op.entity, &op.id, op.data.clone())?;
            summary.entities_created += 1;
        }
        TrailOp::Update | TrailOp::Transition => {
            backend.write(op.entity, &op.id, op.data.clone())?;
        }
        TrailOp::Delete => {
            if backend.remove(op.entity, &op.id)?.is_some() {
                summary.entities_deleted += 1;
            }
        }
    }
    Ok(())
}
