pub mod entity;

pub use entity::{Role, User};
