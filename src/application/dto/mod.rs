// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - Forms arrive as raw strings and are checked here, not in the domain
// - Summaries are built FROM domain entities, never the other way round
// - Everything is plain serializable data

use serde::{Deserialize, Serialize};

use crate::domain::{Diagram, NewDiagram, User};
use crate::error::{AppError, AppResult};

// ============================================================================
// UPLOAD FORM
// ============================================================================

/// Raw upload form as submitted by a signed-in user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub complexity: String,
    pub subject: String,
    /// Comma-separated
    pub tags: String,
    /// Image reference, usually a data URL; used for both sizes
    pub image: Option<String>,
    pub author: String,
    pub source: String,
    pub year: Option<i32>,
}

impl UploadForm {
    /// Check required fields and build the upload payload for `uploader`
    pub fn into_new_diagram(self, uploader: &User) -> AppResult<NewDiagram> {
        let missing: Vec<&str> = [
            ("title", self.title.is_empty()),
            ("description", self.description.is_empty()),
            ("category", self.category.is_empty()),
            ("complexity", self.complexity.is_empty()),
            ("subject", self.subject.is_empty()),
            ("image", self.image.as_deref().map_or(true, str::is_empty)),
        ]
        .into_iter()
        .filter_map(|(field, empty)| empty.then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let image = self.image.unwrap_or_default();
        Ok(NewDiagram {
            tags: parse_tags(&self.tags),
            title: self.title,
            description: self.description,
            image_url: image.clone(),
            thumbnail_url: image,
            category: self.category.into(),
            complexity: self.complexity.into(),
            uploader_id: uploader.id.clone(),
            uploader_name: uploader.name.clone(),
            subject: self.subject,
            source: non_empty(self.source),
            author: non_empty(self.author),
            year: self.year.filter(|y| *y != 0),
        })
    }
}

/// Split on commas, trim, drop empties
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// ============================================================================
// DIAGRAM SUMMARY
// ============================================================================

/// Card-sized view of a diagram
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSummaryDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub complexity: String,
    pub subject: String,
    pub likes: u32,
    /// Comments plus their replies
    pub discussion_count: usize,
    pub approved: bool,
    pub created_at: String,
}

impl From<&Diagram> for DiagramSummaryDto {
    fn from(diagram: &Diagram) -> Self {
        Self {
            id: diagram.id.clone(),
            title: diagram.title.clone(),
            category: diagram.category.to_string(),
            complexity: diagram.complexity.to_string(),
            subject: diagram.subject.clone(),
            likes: diagram.likes,
            discussion_count: diagram.discussion_size(),
            approved: diagram.approved,
            created_at: diagram.created_at.to_rfc3339(),
        }
    }
}
