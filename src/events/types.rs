// src/events/types.rs
//
// All domain events in the catalog.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - Emitted only after the store has committed the change

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// DIAGRAM EVENTS
// ============================================================================

/// Emitted when a diagram is uploaded (always unapproved)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramUploaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub diagram_id: String,
    pub title: String,
    pub uploader_id: String,
}

impl DiagramUploaded {
    pub fn new(diagram_id: String, title: String, uploader_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            diagram_id,
            title,
            uploader_id,
        }
    }
}

impl DomainEvent for DiagramUploaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DiagramUploaded" }
}

/// Emitted when a diagram first becomes visible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramApproved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub diagram_id: String,
    pub approved_by: Option<String>,
}

impl DiagramApproved {
    pub fn new(diagram_id: String, approved_by: Option<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            diagram_id,
            approved_by,
        }
    }
}

impl DomainEvent for DiagramApproved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DiagramApproved" }
}

/// Emitted when a diagram is hard-deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub diagram_id: String,
    pub deleted_by: Option<String>,
}

impl DiagramDeleted {
    pub fn new(diagram_id: String, deleted_by: Option<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            diagram_id,
            deleted_by,
        }
    }
}

impl DomainEvent for DiagramDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DiagramDeleted" }
}

/// Emitted when a like or unlike actually changed the counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramLikeChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub diagram_id: String,
    pub user_id: String,
    pub liked: bool,
    pub likes: u32,
}

impl DiagramLikeChanged {
    pub fn new(diagram_id: String, user_id: String, liked: bool, likes: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            diagram_id,
            user_id,
            liked,
            likes,
        }
    }
}

impl DomainEvent for DiagramLikeChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DiagramLikeChanged" }
}

/// Emitted when the catalog is wiped and reseeded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReset {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub diagram_count: usize,
}

impl CatalogReset {
    pub fn new(diagram_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            diagram_count,
        }
    }
}

impl DomainEvent for CatalogReset {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogReset" }
}

// ============================================================================
// DISCUSSION EVENTS
// ============================================================================

/// Emitted when a comment or reply is posted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionEntryAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub diagram_id: String,
    pub entry_id: String,
    /// Set for replies
    pub parent_id: Option<String>,
    pub user_id: String,
}

impl DiscussionEntryAdded {
    pub fn new(diagram_id: String, entry_id: String, parent_id: Option<String>, user_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            diagram_id,
            entry_id,
            parent_id,
            user_id,
        }
    }
}

impl DomainEvent for DiscussionEntryAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DiscussionEntryAdded" }
}

/// Emitted when a comment or reply is removed by its author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionEntryDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub diagram_id: String,
    pub entry_id: String,
    pub was_reply: bool,
}

impl DiscussionEntryDeleted {
    pub fn new(diagram_id: String, entry_id: String, was_reply: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            diagram_id,
            entry_id,
            was_reply,
        }
    }
}

impl DomainEvent for DiscussionEntryDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DiscussionEntryDeleted" }
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedIn {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub newly_registered: bool,
}

impl UserSignedIn {
    pub fn new(user_id: String, newly_registered: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            newly_registered,
        }
    }
}

impl DomainEvent for UserSignedIn {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserSignedIn" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedOut {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
}

impl UserSignedOut {
    pub fn new(user_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

impl DomainEvent for UserSignedOut {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserSignedOut" }
}
