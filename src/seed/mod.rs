// src/seed/mod.rs
//
// Mock catalog bootstrap
//
// Used only when nothing usable is persisted. Shapes are fixed by the
// catalog; content inside each record is randomized.

pub mod catalog;
pub mod generator;

pub use catalog::{CatalogEntry, DIAGRAM_CATALOG, SUBJECTS, TAG_VOCABULARY};
pub use generator::{MockDataGenerator, SeedSource};
