// src/services/moderation_service.rs
//
// Approval queue and catalog administration
//
// Every operation passes through a ModerationPolicy first. The open policy
// lets anyone moderate; the admin-only policy requires Role::Admin.

use std::sync::Arc;

use super::simulate_latency;
use crate::config::LatencyProfile;
use crate::domain::{Diagram, User};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogReset, DiagramApproved, DiagramDeleted, EventBus};
use crate::repositories::{Change, DiagramStore};
use crate::seed::generator::SeedSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    ViewPending,
    Approve,
    Delete,
    ResetCatalog,
}

/// Authorization seam in front of moderation
pub trait ModerationPolicy: Send + Sync {
    fn authorize(&self, actor: Option<&User>, action: ModerationAction) -> AppResult<()>;
}

/// Anyone, signed in or not, may moderate
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenPolicy;

impl ModerationPolicy for OpenPolicy {
    fn authorize(&self, _actor: Option<&User>, _action: ModerationAction) -> AppResult<()> {
        Ok(())
    }
}

/// Only signed-in admins may moderate
#[derive(Debug, Default, Clone, Copy)]
pub struct AdminOnlyPolicy;

impl ModerationPolicy for AdminOnlyPolicy {
    fn authorize(&self, actor: Option<&User>, action: ModerationAction) -> AppResult<()> {
        match actor {
            Some(user) if user.is_admin() => Ok(()),
            Some(user) => {
                log::warn!("User {} ({}) denied {:?}", user.id, user.role, action);
                Err(AppError::Forbidden)
            }
            None => {
                log::warn!("Anonymous caller denied {:?}", action);
                Err(AppError::Forbidden)
            }
        }
    }
}

pub struct ModerationService {
    store: Arc<DiagramStore>,
    policy: Arc<dyn ModerationPolicy>,
    seed: Arc<dyn SeedSource>,
    event_bus: Arc<EventBus>,
    latency: LatencyProfile,
}

impl ModerationService {
    pub fn new(
        store: Arc<DiagramStore>,
        policy: Arc<dyn ModerationPolicy>,
        seed: Arc<dyn SeedSource>,
        event_bus: Arc<EventBus>,
        latency: LatencyProfile,
    ) -> Self {
        Self {
            store,
            policy,
            seed,
            event_bus,
            latency,
        }
    }

    /// Diagrams waiting for approval, in store order
    pub async fn get_unapproved(&self, actor: Option<&User>) -> AppResult<Vec<Diagram>> {
        self.policy.authorize(actor, ModerationAction::ViewPending)?;
        simulate_latency(self.latency.list_unapproved).await;
        self.store
            .read(|diagrams| diagrams.iter().filter(|d| !d.approved).cloned().collect())
    }

    /// Pending diagrams whose title, category or uploader name contains `query`
    pub async fn filter_pending(&self, actor: Option<&User>, query: &str) -> AppResult<Vec<Diagram>> {
        let query = query.to_lowercase();
        let pending = self.get_unapproved(actor).await?;

        Ok(pending
            .into_iter()
            .filter(|d| {
                d.title.to_lowercase().contains(&query)
                    || d.category.as_str().to_lowercase().contains(&query)
                    || d.uploader_name.to_lowercase().contains(&query)
            })
            .collect())
    }

    /// Approve a diagram; approving twice succeeds and changes nothing
    pub async fn approve_diagram(&self, actor: Option<&User>, diagram_id: &str) -> AppResult<bool> {
        self.policy.authorize(actor, ModerationAction::Approve)?;
        simulate_latency(self.latency.approve).await;

        let outcome = self.store.write(|diagrams| {
            match diagrams.iter_mut().find(|d| d.id == diagram_id) {
                None => Change::Unchanged(None),
                Some(diagram) => {
                    if diagram.approve() {
                        Change::Committed(Some(true))
                    } else {
                        Change::Unchanged(Some(false))
                    }
                }
            }
        })?;

        match outcome {
            None => Ok(false),
            Some(newly_approved) => {
                if newly_approved {
                    log::info!("Diagram {} approved", diagram_id);
                    self.event_bus.emit(DiagramApproved::new(
                        diagram_id.to_string(),
                        actor.map(|u| u.id.clone()),
                    ));
                }
                Ok(true)
            }
        }
    }

    /// Hard-delete a diagram and its discussion
    pub async fn delete_diagram(&self, actor: Option<&User>, diagram_id: &str) -> AppResult<bool> {
        self.policy.authorize(actor, ModerationAction::Delete)?;
        simulate_latency(self.latency.delete_diagram).await;

        let deleted = self.store.write(|diagrams| {
            match diagrams.iter().position(|d| d.id == diagram_id) {
                Some(index) => {
                    diagrams.remove(index);
                    Change::Committed(true)
                }
                None => Change::Unchanged(false),
            }
        })?;

        if deleted {
            log::info!("Diagram {} deleted", diagram_id);
            self.event_bus.emit(DiagramDeleted::new(
                diagram_id.to_string(),
                actor.map(|u| u.id.clone()),
            ));
        }
        Ok(deleted)
    }

    /// Drop the persisted catalog and reseed; returns the new size
    pub async fn reset_catalog(&self, actor: Option<&User>) -> AppResult<usize> {
        self.policy.authorize(actor, ModerationAction::ResetCatalog)?;

        let bridge = self.store.bridge();
        if !bridge.clear() {
            log::warn!(
                "Old catalog under '{}' was not dropped; it stays until the reseed is saved",
                bridge.key()
            );
        }
        let diagrams = self.seed.generate();
        let count = diagrams.len();
        self.store.replace(diagrams)?;

        log::warn!("Catalog reset to {} seeded diagrams", count);
        self.event_bus.emit(CatalogReset::new(count));
        Ok(count)
    }
}
