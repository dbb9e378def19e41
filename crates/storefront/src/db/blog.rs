//! Blog repository.
//!
//! Listing and slug lookup are public; create and update require the
//! administrator role. Slugs are unique across all posts, enforced
//! under the collection's write lock.

use chrono::Utc;

use keepanime_core::{BlogPostId, UserId};

use super::users::UserRepository;
use super::{Database, RepositoryError};
use crate::models::{BlogPost, BlogPostPatch, NewBlogPost};

/// Repository for blog posts.
pub struct BlogRepository<'a> {
    db: &'a Database,
}

impl<'a> BlogRepository<'a> {
    /// Create a new blog repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List posts newest first, optionally filtered by published state.
    #[must_use]
    pub fn list(&self, published: Option<bool>) -> Vec<BlogPost> {
        self.db
            .blog()
            .iter()
            .rev()
            .filter(|post| published.is_none_or(|wanted| post.published == wanted))
            .cloned()
            .collect()
    }

    /// Get a post by ID. Absence is not an error.
    #[must_use]
    pub fn get_by_id(&self, id: BlogPostId) -> Option<BlogPost> {
        self.db.blog().iter().find(|post| post.id == id).cloned()
    }

    /// Get a post by its unique slug. Absence is not an error.
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.db.blog().iter().find(|post| post.slug == slug).cloned()
    }

    /// Create a post authored by the caller. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for non-admin callers, `Validation` for
    /// an empty title or slug, and `Conflict` for a duplicate slug.
    pub fn create(
        &self,
        caller: Option<UserId>,
        input: NewBlogPost,
    ) -> Result<BlogPost, RepositoryError> {
        let author = UserRepository::new(self.db).require_admin(caller)?;
        validate_text("title", &input.title)?;
        validate_text("slug", &input.slug)?;

        let mut posts = self.db.blog_mut();
        if posts.iter().any(|post| post.slug == input.slug) {
            return Err(RepositoryError::Conflict(format!(
                "slug already exists: {}",
                input.slug
            )));
        }

        let post = BlogPost {
            id: BlogPostId::new(),
            title: input.title,
            slug: input.slug,
            content: input.content,
            excerpt: input.excerpt,
            image: input.image,
            published: input.published,
            author_id: author.id,
            created_at: Utc::now(),
        };
        posts.push(post.clone());
        Ok(post)
    }

    /// Apply a partial update to a post. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for non-admin callers, `Validation` for
    /// empty replacement title/slug, `Conflict` when a slug change
    /// collides with another post, and `NotFound` for a missing ID.
    pub fn update(
        &self,
        caller: Option<UserId>,
        id: BlogPostId,
        patch: BlogPostPatch,
    ) -> Result<BlogPost, RepositoryError> {
        UserRepository::new(self.db).require_admin(caller)?;
        if let Some(title) = &patch.title {
            validate_text("title", title)?;
        }
        if let Some(slug) = &patch.slug {
            validate_text("slug", slug)?;
        }

        let mut posts = self.db.blog_mut();
        if let Some(slug) = &patch.slug
            && posts.iter().any(|post| post.slug == *slug && post.id != id)
        {
            return Err(RepositoryError::Conflict(format!(
                "slug already exists: {slug}"
            )));
        }

        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(slug) = patch.slug {
            post.slug = slug;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(image) = patch.image {
            post.image = Some(image);
        }
        if let Some(published) = patch.published {
            post.published = published;
        }

        Ok(post.clone())
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::Validation(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
