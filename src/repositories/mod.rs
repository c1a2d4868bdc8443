// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data holders
// - NO business logic
// - NO event emission
// - Invariants are enforced by entities and services, not here

pub mod diagram_store;
pub mod key_value_repository;

pub use diagram_store::{Change, DiagramStore};
pub use key_value_repository::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore};
