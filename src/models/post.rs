use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, CategoryId};
use super::tag::Tag;

/// Unique identifier for a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published blog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: PostId,
    /// Title, unique across all posts
    pub title: String,
    /// Optional subtitle shown under the title
    pub subtitle: Option<String>,
    /// Category the post belongs to, if any
    pub category: Option<Category>,
    /// Publication date
    pub date_posted: NaiveDate,
    /// Estimated reading time in minutes
    pub read_time: u32,
    /// Path or URL of the thumbnail image
    pub thumbnail: String,
    /// Full body text
    pub body: String,
    /// Tags applied to this post
    pub tags: Vec<Tag>,
}

impl Post {
    /// Returns true if the post carries the given tag
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }
}

/// Field set for inserting a post; the store assigns the identifier.
/// Used by the data-loading side and by tests, never by request handlers.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub subtitle: Option<String>,
    pub category_id: Option<CategoryId>,
    pub date_posted: NaiveDate,
    pub read_time: u32,
    pub thumbnail: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tag::TagId;

    #[test]
    fn test_has_tag() {
        let post = Post {
            id: PostId(1),
            title: "Hello".to_string(),
            subtitle: None,
            category: None,
            date_posted: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            read_time: 4,
            thumbnail: "img/hello.png".to_string(),
            body: "…".to_string(),
            tags: vec![Tag {
                id: TagId(7),
                name: "rust".to_string(),
            }],
        };

        assert!(post.has_tag("rust"));
        assert!(!post.has_tag("python"));
    }
}
