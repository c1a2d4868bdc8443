// src/services/user_service.rs
//
// Mocked identity operations
//
// There is no credential store: any non-empty email with a password of at
// least six characters is accepted.

use super::simulate_latency;
use crate::config::LatencyProfile;
use crate::domain::{mint_id, Role, User};
use crate::error::{AppError, AppResult};

const MIN_PASSWORD_LEN: usize = 6;

/// Id handed to every login
const LOGIN_USER_ID: &str = "user-1";

pub struct UserService {
    latency: LatencyProfile,
}

impl UserService {
    pub fn new(latency: LatencyProfile) -> Self {
        Self { latency }
    }

    /// Sign in; the display name is the email's local part
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        simulate_latency(self.latency.login).await;

        if !acceptable(email, password) {
            return Err(AppError::InvalidCredentials);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        Ok(User {
            id: LOGIN_USER_ID.to_string(),
            name,
            email: email.to_string(),
            role: Role::Student,
            profile_image: None,
        })
    }

    /// Create an account with a fresh id
    pub async fn register(&self, name: &str, email: &str, password: &str, role: &str) -> AppResult<User> {
        simulate_latency(self.latency.register).await;

        if !acceptable(email, password) {
            return Err(AppError::InvalidRegistration);
        }
        let role: Role = role.parse().map_err(|_| AppError::InvalidRegistration)?;

        Ok(User {
            id: mint_id("user"),
            name: name.to_string(),
            email: email.to_string(),
            role,
            profile_image: None,
        })
    }
}

fn acceptable(email: &str, password: &str) -> bool {
    !email.is_empty() && password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> UserService {
        UserService::new(LatencyProfile::none())
    }

    #[tokio::test]
    async fn test_login_accepts_six_character_password() {
        let user = service().login("alice@example.com", "secret").await.unwrap();

        assert_eq!(user.id, "user-1");
        assert_eq!(user.name, "alice");
        assert_eq!(user.role, Role::Student);
    }

    #[tokio::test]
    async fn test_login_rejects_short_password_and_empty_email() {
        assert!(matches!(
            service().login("alice@example.com", "12345").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            service().login("", "long enough").await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_mints_ids_and_parses_role() {
        let a = service()
            .register("Bob", "bob@example.com", "hunter22", "educator")
            .await
            .unwrap();
        let b = service()
            .register("Bob", "bob@example.com", "hunter22", "educator")
            .await
            .unwrap();

        assert_eq!(a.role, Role::Educator);
        assert!(a.id.starts_with("user-"));
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        assert!(matches!(
            service().register("Bob", "bob@example.com", "short", "student").await,
            Err(AppError::InvalidRegistration)
        ));
        assert!(matches!(
            service().register("Bob", "bob@example.com", "hunter22", "wizard").await,
            Err(AppError::InvalidRegistration)
        ));
    }
}
