// src/application/session.rs
//
// Signed-in user for the running process
//
// The façade never reads this; callers pass identity explicitly. The
// context only remembers who is signed in and survives restarts through
// SessionStorage.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{Role, User};
use crate::error::AppResult;
use crate::events::{EventBus, UserSignedIn, UserSignedOut};
use crate::infrastructure::SessionStorage;
use crate::services::UserService;

pub struct SessionContext {
    current: RwLock<Option<User>>,
    storage: SessionStorage,
    users: Arc<UserService>,
    event_bus: Arc<EventBus>,
}

impl SessionContext {
    pub fn new(storage: SessionStorage, users: Arc<UserService>, event_bus: Arc<EventBus>) -> Self {
        Self {
            current: RwLock::new(None),
            storage,
            users,
            event_bus,
        }
    }

    /// Reload the persisted user, if any
    pub fn restore(&self) -> AppResult<Option<User>> {
        let user = self.storage.load()?;
        if let Some(user) = &user {
            log::info!("Restored session for {}", user.id);
        }
        *self.current.write()? = user.clone();
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self.users.login(email, password).await?;
        self.sign_in(&user, false)?;
        Ok(user)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str, role: &str) -> AppResult<User> {
        let user = self.users.register(name, email, password, role).await?;
        self.sign_in(&user, true)?;
        Ok(user)
    }

    fn sign_in(&self, user: &User, newly_registered: bool) -> AppResult<()> {
        self.storage.save(user)?;
        *self.current.write()? = Some(user.clone());
        self.event_bus
            .emit(UserSignedIn::new(user.id.clone(), newly_registered));
        Ok(())
    }

    /// Forget the current user; signing out twice is harmless
    pub fn logout(&self) -> AppResult<()> {
        let previous = self.current.write()?.take();
        self.storage.clear()?;

        if let Some(user) = previous {
            log::info!("User {} signed out", user.id);
            self.event_bus.emit(UserSignedOut::new(user.id));
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|u| u.is_admin())
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.current_user().is_some_and(|u| u.has_any_role(roles))
    }
}
