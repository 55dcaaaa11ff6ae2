//! # waqf-store
//!
//! Synchronous key-value persistence for waqf governance records.
//!
//! The store is a single global namespace keyed by entity collection and ID.
//! Callers read whole collections and filter in memory, which is the intended
//! access pattern at the scale of tens to low hundreds of institutions.
//!
//! - [`backend::KvBackend`] is the storage seam; [`backend::MemoryBackend`]
//!   is the in-process implementation.
//! - [`trail`] appends every mutation to per-entity JSONL files and rebuilds
//!   a backend from them on open.
//! - [`service::WaqfService`] ties backend, trail, and schema validation
//!   together; the typed read/save/delete surface lives in [`repos`].

pub mod backend;
pub mod error;
pub mod helpers;
pub mod repos;
pub mod service;
pub mod trail;

pub use backend::{KvBackend, MemoryBackend};
pub use error::StoreError;
pub use service::WaqfService;

#[cfg(test)]
mod test_support;
