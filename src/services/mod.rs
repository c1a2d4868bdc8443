// src/services/mod.rs
//
// Services Module - the Access Façade
//
// Every public operation:
// 1. waits out its simulated network latency
// 2. runs its scan or mutation against the store without suspending
// 3. persists (inside the store) before returning, if it changed anything
//
// Missing entities are reported as None / false, never as errors.

pub mod comment_service;
pub mod diagram_service;
pub mod moderation_service;
pub mod user_service;

#[cfg(test)]
mod comment_service_tests;
#[cfg(test)]
mod diagram_service_tests;

pub use comment_service::CommentService;
pub use diagram_service::DiagramService;
pub use moderation_service::{
    AdminOnlyPolicy, ModerationAction, ModerationPolicy, ModerationService, OpenPolicy,
};
pub use user_service::UserService;

use std::time::Duration;

/// Suspend for the configured delay; zero resolves without yielding
pub(crate) async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
