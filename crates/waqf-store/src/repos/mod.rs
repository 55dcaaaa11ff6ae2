//! Typed repositories over [`WaqfService`](crate::WaqfService).
//!
//! Each module adds the read/save/delete surface of one entity collection.
//! Reads scan the whole collection and filter in memory.

pub mod compliance;
pub mod evaluation;
pub mod improvement;
pub mod indicator;
pub mod institution;
pub mod response;
pub mod risk;
