// src/infrastructure/persistence.rs
//
// Persistence Bridge
//
// RULES:
// - The whole catalog is one JSON document under one key
// - Every save is a full overwrite
// - A document that does not parse is reported, never repaired
// - Like counters that disagree with their liker list are reset to it and re-saved
// - Write failures are logged and swallowed; memory stays authoritative

use std::sync::Arc;

use crate::domain::{validate_diagram, Diagram};
use crate::repositories::KeyValueStore;

/// Result of reading the persisted catalog
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Diagram>),
    Missing,
    Corrupt(String),
}

pub struct PersistenceBridge {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PersistenceBridge {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the catalog
    ///
    /// Timestamps come back as `DateTime<Utc>`, so a round trip preserves
    /// instants even when the text differs (`.000Z` vs `Z`).
    pub fn load(&self) -> LoadOutcome {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Missing,
            Err(e) => {
                log::warn!("Could not read '{}' from storage: {}", self.key, e);
                return LoadOutcome::Corrupt(e.to_string());
            }
        };

        match serde_json::from_str::<Vec<Diagram>>(&raw) {
            Ok(mut diagrams) => {
                let mut repaired = 0;
                for diagram in &mut diagrams {
                    if diagram.reconcile_likes() {
                        repaired += 1;
                    }
                    if let Err(e) = validate_diagram(diagram) {
                        log::warn!("Stored diagram {} violates an invariant: {}", diagram.id, e);
                    }
                }

                // Like counters follow the liker list
                if repaired > 0 {
                    log::warn!(
                        "Reconciled like counters on {} stored diagrams under '{}'",
                        repaired,
                        self.key
                    );
                    self.save(&diagrams);
                }
                log::debug!("Loaded {} diagrams from '{}'", diagrams.len(), self.key);
                LoadOutcome::Loaded(diagrams)
            }
            Err(e) => {
                log::error!("Error parsing stored diagrams under '{}': {}", self.key, e);
                LoadOutcome::Corrupt(e.to_string())
            }
        }
    }

    /// Serialize and write the full catalog
    ///
    /// Returns whether the write landed.
    pub fn save(&self, diagrams: &[Diagram]) -> bool {
        let document = match serde_json::to_string(diagrams) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Could not serialize {} diagrams: {}", diagrams.len(), e);
                return false;
            }
        };

        match self.store.set(&self.key, &document) {
            Ok(()) => true,
            Err(e) => {
                log::warn!(
                    "Persisting {} diagrams to '{}' failed, keeping in-memory state: {}",
                    diagrams.len(),
                    self.key,
                    e
                );
                false
            }
        }
    }

    /// Drop the persisted document so the next load is a miss
    pub fn clear(&self) -> bool {
        match self.store.remove(&self.key) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not clear '{}': {}", self.key, e);
                false
            }
        }
    }
}
