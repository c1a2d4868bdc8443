// src/lib.rs
// Diagram Encyclopedia - local-first catalog of scientific diagrams
//
// Architecture:
// - Domain-centric: diagrams own their likes and discussion threads
// - One in-memory store, persisted whole after every committed change
// - Async façade with simulated network latency in front of the store
// - Event-driven: services announce committed changes on the event bus
// - Application layer: wiring, session and input translation

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod seed;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    catalog_categories,
    generate_citation,
    mint_id,
    validate_comment,
    validate_diagram,
    Category,
    CitationFormat,
    // Comment
    Comment,
    Complexity,
    // Diagram
    Diagram,
    DiagramCategory,
    DiscussionEntry,
    NewDiagram,
    Reply,
    // User
    Role,
    User,
};

// ============================================================================
// PUBLIC API - Configuration & Errors
// ============================================================================

pub use config::{AppConfig, LatencyProfile};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    CatalogReset,
    DiagramApproved,
    DiagramDeleted,
    DiagramLikeChanged,
    DiagramUploaded,
    DiscussionEntryAdded,
    DiscussionEntryDeleted,
    DomainEvent,
    EventBus,
    EventLogEntry,
    UserSignedIn,
    UserSignedOut,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use infrastructure::{LoadOutcome, PersistenceBridge, SessionStorage};
pub use repositories::{
    Change, DiagramStore, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore,
};
pub use seed::{MockDataGenerator, SeedSource};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AdminOnlyPolicy,
    CommentService,
    DiagramService,
    ModerationAction,
    ModerationPolicy,
    ModerationService,
    OpenPolicy,
    UserService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppState, DiagramSort, DiagramSummaryDto, ErrorResponse, ListingQuery, SessionContext,
    UploadForm,
};
