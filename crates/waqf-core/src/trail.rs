//! JSONL trail operation envelope.
//!
//! Every mutation is recorded as a `TrailOperation` in per-entity
//! `{data_dir}/trail/{entity}.jsonl` files. The store is rebuildable from
//! these trail files.
//!
//! Old trail files without a `v` field deserialize with `v == 1` via
//! `#[serde(default)]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::audit_detail::StatusChangedDetail;
use crate::enums::{EntityType, TrailOp};

/// Current trail schema version.
pub const TRAIL_VERSION: u32 = 1;

/// Default trail version for backward compatibility with old JSONL files.
const fn default_trail_version() -> u32 {
    TRAIL_VERSION
}

/// A single operation recorded in the JSONL trail.
///
/// The `data` field contains the full entity state for `Create`, `Update`,
/// and `Transition` ops, and `null` for `Delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrailOperation {
    /// Schema version. Defaults to 1 for old trails without this field.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    /// RFC 3339 timestamp of the operation (UTC, microsecond precision).
    pub ts: String,

    /// What kind of mutation this represents.
    pub op: TrailOp,

    /// Which entity collection was affected.
    pub entity: EntityType,

    /// ID of the affected entity.
    pub id: String,

    /// Operation payload.
    pub data: serde_json::Value,

    /// Status change detail, present on `Transition` ops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<StatusChangedDetail>,
}

impl TrailOperation {
    /// Build a version-1 operation stamped with the current time.
    #[must_use]
    pub fn now(op: TrailOp, entity: EntityType, id: &str, data: serde_json::Value) -> Self {
        Self {
            v: TRAIL_VERSION,
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            op,
            entity,
            id: id.to_string(),
            data,
            detail: None,
        }
    }

    #[must_use]
    pub const fn with_detail(mut self, detail: StatusChangedDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}
