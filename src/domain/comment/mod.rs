pub mod entity;
pub mod invariants;

pub use entity::{Comment, DiscussionEntry, Reply};
pub use invariants::validate_comment;
