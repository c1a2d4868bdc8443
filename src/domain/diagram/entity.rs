use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::comment::{Comment, DiscussionEntry};
use crate::domain::ids::mint_id;

/// A catalogued scientific diagram
/// This is the root entity: comments and likes live inside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    /// Opaque immutable identifier
    pub id: String,

    pub title: String,
    pub description: String,

    /// Full-size image reference (URL or data URL)
    pub image_url: String,

    /// Preview image reference
    pub thumbnail_url: String,

    pub category: DiagramCategory,
    pub complexity: Complexity,

    /// Uploader identity, denormalized for display
    pub uploader_id: String,
    pub uploader_name: String,

    /// Organism or topic the diagram depicts
    pub subject: String,

    pub tags: Vec<String>,

    /// Like counter, always equal to `liked_by_user_ids.len()`
    pub likes: u32,

    #[serde(default)]
    pub liked_by_user_ids: Vec<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Unapproved diagrams are hidden from public listings
    pub approved: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Upload payload: a diagram minus every server-assigned field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiagram {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub category: DiagramCategory,
    pub complexity: Complexity,
    pub uploader_id: String,
    pub uploader_name: String,
    pub subject: String,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

/// Diagram category
///
/// Unknown names are kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiagramCategory {
    CellularStructure,
    MetabolicPathways,
    BacterialMorphology,
    BacterialGenetics,
    BacterialReproduction,
    BacterialEcology,
    Other(String),
}

/// Complexity level of a diagram
///
/// Unknown names are kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
    Other(String),
}

impl Diagram {
    /// Create a diagram from an upload payload
    /// New diagrams start unapproved, with no likes and no comments
    pub fn new(payload: NewDiagram) -> Self {
        let now = Utc::now();
        Self {
            id: mint_id("diagram"),
            title: payload.title,
            description: payload.description,
            image_url: payload.image_url,
            thumbnail_url: payload.thumbnail_url,
            category: payload.category,
            complexity: payload.complexity,
            uploader_id: payload.uploader_id,
            uploader_name: payload.uploader_name,
            subject: payload.subject,
            tags: payload.tags,
            likes: 0,
            liked_by_user_ids: Vec::new(),
            comments: Vec::new(),
            approved: false,
            created_at: now,
            updated_at: now,
            source: payload.source,
            author: payload.author,
            year: payload.year,
        }
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by_user_ids.iter().any(|id| id == user_id)
    }

    /// Record a like from `user_id`
    /// Returns false (and changes nothing) if the user already liked it
    pub fn like(&mut self, user_id: &str) -> bool {
        if self.is_liked_by(user_id) {
            return false;
        }
        self.liked_by_user_ids.push(user_id.to_string());
        self.likes += 1;
        true
    }

    /// Withdraw a like from `user_id`
    /// Returns false (and changes nothing) if the user never liked it
    pub fn unlike(&mut self, user_id: &str) -> bool {
        let Some(index) = self.liked_by_user_ids.iter().position(|id| id == user_id) else {
            return false;
        };
        self.liked_by_user_ids.remove(index);
        self.likes = self.likes.saturating_sub(1);
        true
    }

    /// Drop repeated likers and set the counter to the liker count
    ///
    /// Returns true if anything changed.
    pub fn reconcile_likes(&mut self) -> bool {
        let before = self.liked_by_user_ids.len();
        let mut seen = std::collections::HashSet::with_capacity(before);
        self.liked_by_user_ids.retain(|id| seen.insert(id.clone()));

        let likes = self.liked_by_user_ids.len() as u32;
        let changed = before != self.liked_by_user_ids.len() || self.likes != likes;
        self.likes = likes;
        changed
    }

    /// Mark as approved. Returns true if this call changed the flag.
    pub fn approve(&mut self) -> bool {
        let changed = !self.approved;
        self.approved = true;
        changed
    }

    pub fn add_comment(&mut self, user_id: String, user_name: String, text: String) -> &Comment {
        self.comments.push(Comment::new(user_id, user_name, text));
        &self.comments[self.comments.len() - 1]
    }

    pub fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }

    /// Remove the comment or reply `target_id` authored by `requester_id`
    ///
    /// Top-level comments are matched first, then replies in comment order.
    /// An id that matches an entry by another author is not removed.
    pub fn remove_entry(&mut self, target_id: &str, requester_id: &str) -> Option<DiscussionEntry> {
        if let Some(index) = self
            .comments
            .iter()
            .position(|c| c.id == target_id && c.user_id == requester_id)
        {
            return Some(DiscussionEntry::Comment(self.comments.remove(index)));
        }

        self.comments
            .iter_mut()
            .find_map(|c| c.remove_reply(target_id, requester_id))
            .map(DiscussionEntry::Reply)
    }

    /// Case-insensitive substring match over title, description, subject and tags
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.subject.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_str().to_lowercase() == category.to_lowercase()
    }

    /// Number of comments plus replies
    pub fn discussion_size(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }
}

impl DiagramCategory {
    pub const KNOWN: [DiagramCategory; 6] = [
        DiagramCategory::CellularStructure,
        DiagramCategory::MetabolicPathways,
        DiagramCategory::BacterialMorphology,
        DiagramCategory::BacterialGenetics,
        DiagramCategory::BacterialReproduction,
        DiagramCategory::BacterialEcology,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DiagramCategory::CellularStructure => "Cellular Structure",
            DiagramCategory::MetabolicPathways => "Metabolic Pathways",
            DiagramCategory::BacterialMorphology => "Bacterial Morphology",
            DiagramCategory::BacterialGenetics => "Bacterial Genetics",
            DiagramCategory::BacterialReproduction => "Bacterial Reproduction",
            DiagramCategory::BacterialEcology => "Bacterial Ecology",
            DiagramCategory::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DiagramCategory::Other(_))
    }
}

impl From<String> for DiagramCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Cellular Structure" => DiagramCategory::CellularStructure,
            "Metabolic Pathways" => DiagramCategory::MetabolicPathways,
            "Bacterial Morphology" => DiagramCategory::BacterialMorphology,
            "Bacterial Genetics" => DiagramCategory::BacterialGenetics,
            "Bacterial Reproduction" => DiagramCategory::BacterialReproduction,
            "Bacterial Ecology" => DiagramCategory::BacterialEcology,
            _ => DiagramCategory::Other(value),
        }
    }
}

impl From<&str> for DiagramCategory {
    fn from(value: &str) -> Self {
        DiagramCategory::from(value.to_string())
    }
}

impl From<DiagramCategory> for String {
    fn from(value: DiagramCategory) -> Self {
        match value {
            DiagramCategory::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl Complexity {
    pub const KNOWN: [Complexity; 3] = [Complexity::Basic, Complexity::Intermediate, Complexity::Advanced];

    pub fn as_str(&self) -> &str {
        match self {
            Complexity::Basic => "Basic",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
            Complexity::Other(name) => name,
        }
    }
}

impl From<String> for Complexity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Basic" => Complexity::Basic,
            "Intermediate" => Complexity::Intermediate,
            "Advanced" => Complexity::Advanced,
            _ => Complexity::Other(value),
        }
    }
}

impl From<&str> for Complexity {
    fn from(value: &str) -> Self {
        Complexity::from(value.to_string())
    }
}

impl From<Complexity> for String {
    fn from(value: Complexity) -> Self {
        match value {
            Complexity::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for DiagramCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
