//! Blog post domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keepanime_core::{BlogPostId, UserId};

/// A blog post for launch updates and collection announcements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique post ID.
    pub id: BlogPostId,
    /// Post title.
    pub title: String,
    /// URL slug, unique across all posts.
    pub slug: String,
    /// Full post body.
    pub content: String,
    /// Short teaser shown on the listing page.
    pub excerpt: String,
    /// Optional header image URL.
    pub image: Option<String>,
    /// Whether the post is publicly visible.
    pub published: bool,
    /// User who authored the post.
    pub author_id: UserId,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// Input shape for creating a blog post. The author is the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image: Option<String>,
    pub published: bool,
}

/// Partial update for a blog post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub published: Option<bool>,
}
