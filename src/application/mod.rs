// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits ABOVE services and never reaches into the store directly
// - Owns process-wide wiring (AppState) and the signed-in session
// - Translates raw input into domain payloads and errors into notifications

pub mod dto;
pub mod error_handling;
pub mod listing;
pub mod session;
pub mod state;

pub use dto::{parse_tags, DiagramSummaryDto, UploadForm};
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use listing::{filter_by_complexity, DiagramSort, ListingQuery};
pub use session::SessionContext;
pub use state::AppState;
