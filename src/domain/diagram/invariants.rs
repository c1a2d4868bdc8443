use super::entity::Diagram;
use crate::domain::comment::validate_comment;
use crate::domain::{DomainError, DomainResult};

/// Validates all Diagram invariants
/// These are the absolute rules that must hold for a stored Diagram
pub fn validate_diagram(diagram: &Diagram) -> DomainResult<()> {
    validate_id(&diagram.id)?;
    validate_likes(diagram)?;
    validate_discussion(diagram)?;
    Ok(())
}

fn validate_id(id: &str) -> DomainResult<()> {
    if id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Diagram id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Counter equals the number of distinct likers
fn validate_likes(diagram: &Diagram) -> DomainResult<()> {
    let likers = &diagram.liked_by_user_ids;
    if diagram.likes as usize != likers.len() {
        return Err(DomainError::LikeCountMismatch {
            likes: diagram.likes,
            likers: likers.len(),
        });
    }

    for (index, user_id) in likers.iter().enumerate() {
        if likers[..index].contains(user_id) {
            return Err(DomainError::InvariantViolation(format!(
                "User {} liked diagram {} more than once",
                user_id, diagram.id
            )));
        }
    }
    Ok(())
}

/// Comment and reply ids are unique across the whole diagram
fn validate_discussion(diagram: &Diagram) -> DomainResult<()> {
    let mut seen: Vec<&str> = Vec::with_capacity(diagram.discussion_size());

    for comment in &diagram.comments {
        validate_comment(comment)?;

        let ids = std::iter::once(comment.id.as_str())
            .chain(comment.replies.iter().map(|r| r.id.as_str()));
        for id in ids {
            if seen.contains(&id) {
                return Err(DomainError::InvariantViolation(format!(
                    "Duplicate discussion id {} in diagram {}",
                    id, diagram.id
                )));
            }
            seen.push(id);
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Diagram domain:
///
/// 1. Identity is immutable and non-empty
/// 2. likes == liked_by_user_ids.len(), with no repeated liker
/// 3. Threads are exactly two levels deep (enforced by the Reply type)
/// 4. Every reply's parent_id names the comment that owns it
/// 5. Discussion ids are unique within a diagram
/// 6. Approval is one-way
/// 7. Category and complexity are stored as given, known or not

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagram::entity::test_support::payload;

    #[test]
    fn test_valid_diagram() {
        let mut diagram = Diagram::new(payload("Test"));
        diagram.like("u1");
        diagram.add_comment("u1".into(), "Alice".into(), "Nice!".into());
        assert!(validate_diagram(&diagram).is_ok());
    }

    #[test]
    fn test_counter_drift_fails() {
        let mut diagram = Diagram::new(payload("Test"));
        diagram.likes = 3;

        match validate_diagram(&diagram) {
            Err(DomainError::LikeCountMismatch { likes, likers }) => {
                assert_eq!(likes, 3);
                assert_eq!(likers, 0);
            }
            other => panic!("expected LikeCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_liker_fails() {
        let mut diagram = Diagram::new(payload("Test"));
        diagram.liked_by_user_ids = vec!["u1".into(), "u1".into()];
        diagram.likes = 2;

        assert!(validate_diagram(&diagram).is_err());
    }

    #[test]
    fn test_duplicate_comment_ids_fail() {
        let mut diagram = Diagram::new(payload("Test"));
        diagram.add_comment("u1".into(), "Alice".into(), "one".into());
        diagram.add_comment("u2".into(), "Bob".into(), "two".into());
        diagram.comments[1].id = diagram.comments[0].id.clone();

        assert!(validate_diagram(&diagram).is_err());
    }
}
