// src/domain/category.rs
//
// Static catalog describing the known diagram categories.

use serde::Serialize;

use super::diagram::DiagramCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: DiagramCategory,
    pub description: &'static str,
}

/// The six browsable categories, in display order
pub fn catalog_categories() -> Vec<Category> {
    let descriptions = [
        ("cat-1", "Diagrams showing the cellular structure of various bacteria"),
        ("cat-2", "Diagrams illustrating bacterial metabolic processes"),
        ("cat-3", "Visual representations of bacterial shapes and forms"),
        ("cat-4", "Diagrams of bacterial DNA, plasmids, and genetic processes"),
        ("cat-5", "Illustrations of bacterial reproduction mechanisms"),
        ("cat-6", "Diagrams showing bacterial interactions with environments"),
    ];

    DiagramCategory::KNOWN
        .into_iter()
        .zip(descriptions)
        .map(|(name, (id, description))| Category { id, name, description })
        .collect()
}
