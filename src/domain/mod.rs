// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod category;
pub mod citation;
pub mod comment;
pub mod diagram;
pub mod ids;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Diagram Domain
pub use diagram::{validate_diagram, Complexity, Diagram, DiagramCategory, NewDiagram};

// Comment Domain
pub use comment::{validate_comment, Comment, DiscussionEntry, Reply};

// User Domain
pub use user::{Role, User};

// Category catalog
pub use category::{catalog_categories, Category};

// Citation
pub use citation::{generate_citation, CitationFormat};

// Identifier minting
pub use ids::mint_id;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Like counter {likes} does not match {likers} recorded likers")]
    LikeCountMismatch { likes: u32, likers: usize },

    #[error("Unknown value: {0}")]
    UnknownValue(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
