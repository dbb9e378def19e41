//! Auth route handlers.
//!
//! Login is passwordless by email: the user record is found or created
//! and its ID stored in the session. Logout clears the session user and
//! the Sentry user context.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use keepanime_core::Email;

use crate::db::UserRepository;
use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::User;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
}

/// Log in by email.
#[instrument(skip(state, session, body))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginBody>,
) -> Result<Json<User>> {
    let email =
        Email::parse(&body.email).map_err(|e| AppError::Validation(e.to_string()))?;

    let user = UserRepository::new(state.db()).find_or_create(&email);
    set_current_user(&session, user.id).await?;
    set_sentry_user(&user.id, user.email.as_ref().map(Email::as_str));
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(user))
}

/// Log out.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<()> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(())
}
