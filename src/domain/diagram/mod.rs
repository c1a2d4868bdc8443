pub mod entity;
pub mod invariants;

pub use entity::{Complexity, Diagram, DiagramCategory, NewDiagram};
pub use invariants::validate_diagram;
