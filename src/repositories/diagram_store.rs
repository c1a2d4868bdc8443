// src/repositories/diagram_store.rs
//
// Record Store - the authoritative in-memory catalog
//
// RULES:
// - Ordered Vec, linear scans, no secondary index
// - Reads and writes are synchronous critical sections
// - A committed write is persisted before the write lock is released
// - One store per process or test; nothing is global

use std::sync::{Arc, RwLock};

use crate::domain::Diagram;
use crate::error::AppResult;
use crate::infrastructure::{LoadOutcome, PersistenceBridge};
use crate::seed::generator::SeedSource;

/// Outcome of a write closure
#[derive(Debug)]
pub enum Change<R> {
    /// The collection changed and must be persisted
    Committed(R),
    /// Nothing changed; skip the save
    Unchanged(R),
}

pub struct DiagramStore {
    diagrams: RwLock<Vec<Diagram>>,
    bridge: Arc<PersistenceBridge>,
}

impl DiagramStore {
    pub fn new(diagrams: Vec<Diagram>, bridge: Arc<PersistenceBridge>) -> Self {
        Self {
            diagrams: RwLock::new(diagrams),
            bridge,
        }
    }

    /// Bootstrap from storage, falling back to the seed on a miss
    ///
    /// A corrupt document is discarded and replaced by fresh seed data.
    pub fn open(bridge: Arc<PersistenceBridge>, seed: &dyn SeedSource) -> Self {
        let diagrams = match bridge.load() {
            LoadOutcome::Loaded(diagrams) => diagrams,
            LoadOutcome::Missing => {
                log::info!("No stored catalog under '{}', seeding", bridge.key());
                Self::seed_and_save(&bridge, seed)
            }
            LoadOutcome::Corrupt(reason) => {
                log::warn!("Discarding unreadable catalog ({}), seeding", reason);
                Self::seed_and_save(&bridge, seed)
            }
        };

        Self::new(diagrams, bridge)
    }

    fn seed_and_save(bridge: &PersistenceBridge, seed: &dyn SeedSource) -> Vec<Diagram> {
        let diagrams = seed.generate();
        bridge.save(&diagrams);
        diagrams
    }

    pub fn read<R>(&self, f: impl FnOnce(&[Diagram]) -> R) -> AppResult<R> {
        let diagrams = self.diagrams.read()?;
        Ok(f(&diagrams))
    }

    /// Run a mutation; persist the whole collection if it reports a change
    pub fn write<R>(&self, f: impl FnOnce(&mut Vec<Diagram>) -> Change<R>) -> AppResult<R> {
        let mut diagrams = self.diagrams.write()?;

        match f(&mut diagrams) {
            Change::Committed(value) => {
                self.bridge.save(&diagrams);
                Ok(value)
            }
            Change::Unchanged(value) => Ok(value),
        }
    }

    /// Swap in a new catalog and persist it
    pub fn replace(&self, diagrams: Vec<Diagram>) -> AppResult<()> {
        self.write(|current| {
            *current = diagrams;
            Change::Committed(())
        })
    }

    pub fn snapshot(&self) -> AppResult<Vec<Diagram>> {
        self.read(|diagrams| diagrams.to_vec())
    }

    pub fn len(&self) -> AppResult<usize> {
        self.read(|diagrams| diagrams.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn bridge(&self) -> &Arc<PersistenceBridge> {
        &self.bridge
    }
}
