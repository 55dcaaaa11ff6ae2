//! ID prefixes for every persisted entity.
//!
//! IDs are minted as `"{prefix}-{8 hex chars}"` by the store (see
//! `waqf_store::WaqfService::generate_id`).

use crate::enums::EntityType;

pub const PREFIX_INSTITUTION: &str = "ins";
pub const PREFIX_COMPLIANCE: &str = "cmp";
pub const PREFIX_REQUIREMENT: &str = "req";
pub const PREFIX_RISK: &str = "rsk";
pub const PREFIX_EVALUATION: &str = "evl";
pub const PREFIX_INDICATOR: &str = "ind";
pub const PREFIX_RESPONSE: &str = "rsp";
pub const PREFIX_IMPROVEMENT: &str = "imp";

/// ID prefix used when minting IDs for an entity collection.
#[must_use]
pub const fn prefix_for(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Institution => PREFIX_INSTITUTION,
        EntityType::Compliance => PREFIX_COMPLIANCE,
        EntityType::Risk => PREFIX_RISK,
        EntityType::Evaluation => PREFIX_EVALUATION,
        EntityType::Indicator => PREFIX_INDICATOR,
        EntityType::Response => PREFIX_RESPONSE,
        EntityType::Improvement => PREFIX_IMPROVEMENT,
    }
}

/// Provenance tag for backlog items raised by weak evaluation responses.
pub const TAG_PERFORMANCE: &str = "PERF";
/// Provenance tag for backlog items raised by critical register risks.
pub const TAG_RISK: &str = "RISK";
/// Provenance tag for backlog items raised by compliance gaps.
pub const TAG_COMPLIANCE: &str = "COMP";

/// Format a full ID from a prefix and a hex suffix.
#[must_use]
pub fn format_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}

/// Return the prefix part of an ID, if it has one.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}
