//! Blog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use keepanime_core::BlogPostId;

use crate::db::BlogRepository;
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::models::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::state::AppState;

/// Query parameters for the post listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Restrict to published (or unpublished) posts.
    pub published: Option<bool>,
}

/// List posts newest first.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<BlogPost>> {
    Json(BlogRepository::new(state.db()).list(params.published))
}

/// Post detail by slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>> {
    BlogRepository::new(state.db())
        .get_by_slug(&slug)
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Create a post authored by the caller (admin).
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
    Json(input): Json<NewBlogPost>,
) -> Result<Json<BlogPost>> {
    let post = BlogRepository::new(state.db()).create(caller, input)?;
    tracing::info!(post_id = %post.id, slug = %post.slug, "blog post created");
    Ok(Json(post))
}

/// Apply a partial update to a post (admin).
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
    Path(id): Path<BlogPostId>,
    Json(patch): Json<BlogPostPatch>,
) -> Result<Json<BlogPost>> {
    let post = BlogRepository::new(state.db()).update(caller, id, patch)?;
    Ok(Json(post))
}
