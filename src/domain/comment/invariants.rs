use super::entity::Comment;
use crate::domain::{DomainError, DomainResult};

/// Validates a comment thread
///
/// 1. Comment id cannot be empty
/// 2. Every reply points back at the comment that owns it
/// 3. Reply ids are unique within the thread
pub fn validate_comment(comment: &Comment) -> DomainResult<()> {
    if comment.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Comment id cannot be empty".to_string(),
        ));
    }

    for (index, reply) in comment.replies.iter().enumerate() {
        if reply.parent_id != comment.id {
            return Err(DomainError::InvariantViolation(format!(
                "Reply {} points at {} but lives under {}",
                reply.id, reply.parent_id, comment.id
            )));
        }
        if comment.replies[..index].iter().any(|r| r.id == reply.id) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate reply id {} in comment {}",
                reply.id, comment.id
            )));
        }
    }

    Ok(())
}
