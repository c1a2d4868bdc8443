use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::mint_id;

/// A top-level remark on a diagram
///
/// Comments own their replies. Replies are a separate type with no
/// `replies` field, so a thread is at most two levels deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A second-level remark, always attached to a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub parent_id: String,
}

/// Either level of a discussion thread
#[derive(Debug, Clone, PartialEq)]
pub enum DiscussionEntry {
    Comment(Comment),
    Reply(Reply),
}

impl Comment {
    /// Create a new comment with a freshly minted id, stamped now
    pub fn new(user_id: String, user_name: String, text: String) -> Self {
        Self {
            id: mint_id("comment"),
            user_id,
            user_name,
            text,
            timestamp: Utc::now(),
            replies: Vec::new(),
        }
    }

    /// Append a reply authored by `user_id`, returning the stored reply
    pub fn add_reply(&mut self, user_id: String, user_name: String, text: String) -> &Reply {
        let reply = Reply {
            id: mint_id("reply"),
            user_id,
            user_name,
            text,
            timestamp: Utc::now(),
            parent_id: self.id.clone(),
        };
        self.replies.push(reply);
        &self.replies[self.replies.len() - 1]
    }

    /// Remove the reply `reply_id` if `requester_id` authored it
    pub fn remove_reply(&mut self, reply_id: &str, requester_id: &str) -> Option<Reply> {
        let index = self
            .replies
            .iter()
            .position(|r| r.id == reply_id && r.user_id == requester_id)?;
        Some(self.replies.remove(index))
    }
}

impl DiscussionEntry {
    pub fn id(&self) -> &str {
        match self {
            DiscussionEntry::Comment(c) => &c.id,
            DiscussionEntry::Reply(r) => &r.id,
        }
    }

    pub fn author_id(&self) -> &str {
        match self {
            DiscussionEntry::Comment(c) => &c.user_id,
            DiscussionEntry::Reply(r) => &r.user_id,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, DiscussionEntry::Reply(_))
    }
}
