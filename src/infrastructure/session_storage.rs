// src/infrastructure/session_storage.rs
//
// Durable slot for the signed-in user

use std::sync::Arc;

use crate::domain::User;
use crate::error::AppResult;
use crate::repositories::KeyValueStore;

pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Restore the stored user
    ///
    /// An unparsable entry is removed and treated as signed out.
    pub fn load(&self) -> AppResult<Option<User>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log::error!("Failed to parse stored user: {}", e);
                self.store.remove(&self.key)?;
                Ok(None)
            }
        }
    }

    pub fn save(&self, user: &User) -> AppResult<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.key, &raw)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.remove(&self.key)
    }
}
