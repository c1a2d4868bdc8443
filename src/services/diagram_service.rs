// src/services/diagram_service.rs
//
// Public catalog reads, likes and uploads

use std::sync::Arc;

use chrono::{Datelike, Utc};

use super::simulate_latency;
use crate::config::LatencyProfile;
use crate::domain::{
    catalog_categories, generate_citation, Category, CitationFormat, Diagram, NewDiagram,
};
use crate::error::AppResult;
use crate::events::{DiagramLikeChanged, DiagramUploaded, EventBus};
use crate::repositories::{Change, DiagramStore};

pub struct DiagramService {
    store: Arc<DiagramStore>,
    event_bus: Arc<EventBus>,
    latency: LatencyProfile,
}

impl DiagramService {
    pub fn new(store: Arc<DiagramStore>, event_bus: Arc<EventBus>, latency: LatencyProfile) -> Self {
        Self {
            store,
            event_bus,
            latency,
        }
    }

    /// Approved diagrams in store order
    pub async fn get_all(&self) -> AppResult<Vec<Diagram>> {
        simulate_latency(self.latency.list_approved).await;
        self.store
            .read(|diagrams| diagrams.iter().filter(|d| d.approved).cloned().collect())
    }

    /// Any diagram by id, approved or not
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Diagram>> {
        simulate_latency(self.latency.get_by_id).await;
        self.store
            .read(|diagrams| diagrams.iter().find(|d| d.id == id).cloned())
    }

    /// Approved diagrams whose category matches, ignoring case
    pub async fn get_by_category(&self, category: &str) -> AppResult<Vec<Diagram>> {
        simulate_latency(self.latency.by_category).await;
        self.store.read(|diagrams| {
            diagrams
                .iter()
                .filter(|d| d.approved && d.in_category(category))
                .cloned()
                .collect()
        })
    }

    /// Approved diagrams matching `query` in title, description, subject or tags
    pub async fn search(&self, query: &str) -> AppResult<Vec<Diagram>> {
        simulate_latency(self.latency.search).await;
        self.store.read(|diagrams| {
            diagrams
                .iter()
                .filter(|d| d.approved && d.matches_query(query))
                .cloned()
                .collect()
        })
    }

    /// Like on behalf of `user_id`; repeating a like changes nothing
    pub async fn like(&self, diagram_id: &str, user_id: &str) -> AppResult<Option<Diagram>> {
        simulate_latency(self.latency.like).await;
        self.toggle_like(diagram_id, user_id, true)
    }

    /// Withdraw `user_id`'s like; unliking without a like changes nothing
    pub async fn unlike(&self, diagram_id: &str, user_id: &str) -> AppResult<Option<Diagram>> {
        simulate_latency(self.latency.like).await;
        self.toggle_like(diagram_id, user_id, false)
    }

    fn toggle_like(&self, diagram_id: &str, user_id: &str, liked: bool) -> AppResult<Option<Diagram>> {
        let (updated, changed) = self.store.write(|diagrams| {
            let Some(diagram) = diagrams.iter_mut().find(|d| d.id == diagram_id) else {
                return Change::Unchanged((None, false));
            };

            let changed = if liked {
                diagram.like(user_id)
            } else {
                diagram.unlike(user_id)
            };

            let snapshot = Some(diagram.clone());
            if changed {
                Change::Committed((snapshot, true))
            } else {
                Change::Unchanged((snapshot, false))
            }
        })?;

        if let (Some(diagram), true) = (&updated, changed) {
            self.event_bus.emit(DiagramLikeChanged::new(
                diagram.id.clone(),
                user_id.to_string(),
                liked,
                diagram.likes,
            ));
        }

        Ok(updated)
    }

    /// Store a new, unapproved diagram at the head of the catalog
    pub async fn upload(&self, payload: NewDiagram) -> AppResult<Diagram> {
        simulate_latency(self.latency.upload).await;

        let diagram = Diagram::new(payload);
        let created = diagram.clone();
        self.store.write(move |diagrams| {
            diagrams.insert(0, diagram);
            Change::Committed(())
        })?;

        log::info!("Diagram {} uploaded by {}", created.id, created.uploader_id);
        self.event_bus.emit(DiagramUploaded::new(
            created.id.clone(),
            created.title.clone(),
            created.uploader_id.clone(),
        ));

        Ok(created)
    }

    /// Citation text for `diagram`; no latency and no store access
    pub fn citation(&self, diagram: &Diagram, format: CitationFormat) -> String {
        generate_citation(diagram, format, Utc::now().year())
    }

    pub fn categories(&self) -> Vec<Category> {
        catalog_categories()
    }
}
