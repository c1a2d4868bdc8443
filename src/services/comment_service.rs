// src/services/comment_service.rs
//
// Comment threads on diagrams
//
// Threads are two levels deep: comments, and replies to comments.
// Only the author of an entry may delete it.

use std::sync::Arc;

use super::simulate_latency;
use crate::config::LatencyProfile;
use crate::error::AppResult;
use crate::events::{DiscussionEntryAdded, DiscussionEntryDeleted, EventBus};
use crate::repositories::{Change, DiagramStore};

pub struct CommentService {
    store: Arc<DiagramStore>,
    event_bus: Arc<EventBus>,
    latency: LatencyProfile,
}

impl CommentService {
    pub fn new(store: Arc<DiagramStore>, event_bus: Arc<EventBus>, latency: LatencyProfile) -> Self {
        Self {
            store,
            event_bus,
            latency,
        }
    }

    /// Append a comment; false if the diagram does not exist
    pub async fn add_comment(
        &self,
        diagram_id: &str,
        user_id: &str,
        user_name: &str,
        text: &str,
    ) -> AppResult<bool> {
        simulate_latency(self.latency.comment).await;

        let added = self.store.write(|diagrams| {
            match diagrams.iter_mut().find(|d| d.id == diagram_id) {
                Some(diagram) => {
                    let comment =
                        diagram.add_comment(user_id.to_string(), user_name.to_string(), text.to_string());
                    Change::Committed(Some(comment.id.clone()))
                }
                None => Change::Unchanged(None),
            }
        })?;

        Ok(match added {
            Some(comment_id) => {
                self.event_bus.emit(DiscussionEntryAdded::new(
                    diagram_id.to_string(),
                    comment_id,
                    None,
                    user_id.to_string(),
                ));
                true
            }
            None => false,
        })
    }

    /// Append a reply under `comment_id`; false if diagram or comment is missing
    pub async fn add_reply(
        &self,
        diagram_id: &str,
        comment_id: &str,
        user_id: &str,
        user_name: &str,
        text: &str,
    ) -> AppResult<bool> {
        simulate_latency(self.latency.comment).await;

        let added = self.store.write(|diagrams| {
            let comment = diagrams
                .iter_mut()
                .find(|d| d.id == diagram_id)
                .and_then(|d| d.comment_mut(comment_id));

            match comment {
                Some(comment) => {
                    let reply =
                        comment.add_reply(user_id.to_string(), user_name.to_string(), text.to_string());
                    Change::Committed(Some(reply.id.clone()))
                }
                None => Change::Unchanged(None),
            }
        })?;

        Ok(match added {
            Some(reply_id) => {
                self.event_bus.emit(DiscussionEntryAdded::new(
                    diagram_id.to_string(),
                    reply_id,
                    Some(comment_id.to_string()),
                    user_id.to_string(),
                ));
                true
            }
            None => false,
        })
    }

    /// Delete a comment or reply authored by `user_id`
    ///
    /// `target_id` may name a top-level comment or any reply in the diagram.
    /// A mismatched author leaves everything untouched and returns false.
    pub async fn delete_comment(&self, diagram_id: &str, target_id: &str, user_id: &str) -> AppResult<bool> {
        simulate_latency(self.latency.delete_comment).await;

        let removed = self.store.write(|diagrams| {
            match diagrams
                .iter_mut()
                .find(|d| d.id == diagram_id)
                .and_then(|d| d.remove_entry(target_id, user_id))
            {
                Some(entry) => Change::Committed(Some(entry)),
                None => Change::Unchanged(None),
            }
        })?;

        let Some(entry) = removed else {
            log::debug!("No entry {} by {} on diagram {}", target_id, user_id, diagram_id);
            return Ok(false);
        };

        self.event_bus.emit(DiscussionEntryDeleted::new(
            diagram_id.to_string(),
            entry.id().to_string(),
            entry.is_reply(),
        ));
        Ok(true)
    }
}
