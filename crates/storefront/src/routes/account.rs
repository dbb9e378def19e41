//! Account route handlers.
//!
//! All of these require a logged-in user; self-service mutations only
//! ever touch the caller's own record.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{PreferencesUpdate, User};
use crate::state::AppState;

/// Display-name change body.
#[derive(Debug, Deserialize)]
pub struct NameBody {
    pub name: String,
}

/// Avatar change body.
#[derive(Debug, Deserialize)]
pub struct ImageBody {
    pub image: String,
}

/// Current user's record.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
) -> Result<Json<User>> {
    UserRepository::new(state.db())
        .current_user(Some(user_id))
        .map(Json)
        .ok_or_else(|| AppError::Unauthorized("unknown user".to_owned()))
}

/// Set the caller's display name.
#[instrument(skip(state, body))]
pub async fn set_name(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    Json(body): Json<NameBody>,
) -> Result<()> {
    UserRepository::new(state.db()).set_name(Some(user_id), &body.name)?;
    Ok(())
}

/// Set the caller's avatar image URL.
#[instrument(skip(state, body))]
pub async fn set_image(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    Json(body): Json<ImageBody>,
) -> Result<()> {
    UserRepository::new(state.db()).set_image(Some(user_id), &body.image)?;
    Ok(())
}

/// Apply a partial preferences update to the caller's record.
#[instrument(skip(state, update))]
pub async fn update_preferences(
    State(state): State<AppState>,
    RequireAuth(user_id): RequireAuth,
    Json(update): Json<PreferencesUpdate>,
) -> Result<()> {
    UserRepository::new(state.db()).update_preferences(Some(user_id), update)?;
    Ok(())
}
