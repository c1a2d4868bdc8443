// src/application/state.rs
//
// Wiring of the whole data core
//
// Built once per process (or per test). Every field is Arc-shared so
// callers can clone handles into spawned tasks.

use std::sync::Arc;

use crate::application::session::SessionContext;
use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_connection, get_database_path, initialize_database,
    verify_database_integrity, ConnectionPool,
};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::infrastructure::{PersistenceBridge, SessionStorage};
use crate::repositories::{DiagramStore, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore};
use crate::seed::{MockDataGenerator, SeedSource};
use crate::services::{
    AdminOnlyPolicy, CommentService, DiagramService, ModerationPolicy, ModerationService,
    OpenPolicy, UserService,
};

pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub store: Arc<DiagramStore>,
    pub diagram_service: Arc<DiagramService>,
    pub comment_service: Arc<CommentService>,
    pub moderation_service: Arc<ModerationService>,
    pub user_service: Arc<UserService>,
    pub session: Arc<SessionContext>,
    /// Present when backed by SQLite
    pub pool: Option<Arc<ConnectionPool>>,
}

impl AppState {
    /// Open the SQLite store under `config.data_dir` and load the catalog
    pub fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let db_path = get_database_path(config)?;
        let pool = Arc::new(create_connection_pool(&db_path, config.pool_size)?);

        // Initialize schema (idempotent)
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }
        log::info!("Using catalog database at {}", db_path.display());

        let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool.clone()));
        let mut state = Self::assemble(kv, config, Arc::new(MockDataGenerator::from_entropy()))?;
        state.pool = Some(pool);
        Ok(state)
    }

    /// Volatile state over an in-memory key-value store
    pub fn in_memory(config: &AppConfig, seed: Arc<dyn SeedSource>) -> AppResult<Self> {
        Self::assemble(Arc::new(InMemoryKeyValueStore::new()), config, seed)
    }

    /// Wire every component over an existing key-value store
    pub fn assemble(
        kv: Arc<dyn KeyValueStore>,
        config: &AppConfig,
        seed: Arc<dyn SeedSource>,
    ) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());

        // 2. STORE
        let bridge = Arc::new(PersistenceBridge::new(kv.clone(), config.diagrams_key.clone()));
        let store = Arc::new(DiagramStore::open(bridge, seed.as_ref()));

        // 3. SERVICES
        let policy: Arc<dyn ModerationPolicy> = if config.strict_moderation {
            Arc::new(AdminOnlyPolicy)
        } else {
            Arc::new(OpenPolicy)
        };

        let diagram_service = Arc::new(DiagramService::new(
            store.clone(),
            event_bus.clone(),
            config.latency.clone(),
        ));
        let comment_service = Arc::new(CommentService::new(
            store.clone(),
            event_bus.clone(),
            config.latency.clone(),
        ));
        let moderation_service = Arc::new(ModerationService::new(
            store.clone(),
            policy,
            seed,
            event_bus.clone(),
            config.latency.clone(),
        ));
        let user_service = Arc::new(UserService::new(config.latency.clone()));

        // 4. SESSION
        let session = Arc::new(SessionContext::new(
            SessionStorage::new(kv, config.session_key.clone()),
            user_service.clone(),
            event_bus.clone(),
        ));
        session.restore()?;

        Ok(Self {
            event_bus,
            store,
            diagram_service,
            comment_service,
            moderation_service,
            user_service,
            session,
            pool: None,
        })
    }
}
