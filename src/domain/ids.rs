// src/domain/ids.rs
//
// Identifier minting for entities created at runtime.
// Seeded records keep their positional ids (`diagram-3`, `comment-3-0`).

use uuid::Uuid;

/// Mint a fresh opaque id of the form `{prefix}-{uuid}`.
///
/// Two ids minted in the same instant never collide.
pub fn mint_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_ids_are_prefixed_and_distinct() {
        let a = mint_id("comment");
        let b = mint_id("comment");

        assert!(a.starts_with("comment-"));
        assert_ne!(a, b);
    }
}
