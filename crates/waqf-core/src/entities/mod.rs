//! Entity structs for all waqf domain objects.
//!
//! Each entity is one collection in the key-value store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod compliance;
mod evaluation;
mod improvement;
mod indicator;
mod institution;
mod response;
mod risk;

pub use compliance::{ComplianceRecord, RequirementItem};
pub use evaluation::{Evaluation, EvaluationRef};
pub use improvement::{BacklogSource, ImprovementItem};
pub use indicator::Indicator;
pub use institution::Institution;
pub use response::EvaluationResponse;
pub use risk::RiskRegisterItem;
