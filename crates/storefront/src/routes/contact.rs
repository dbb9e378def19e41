//! Contact-form route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use keepanime_core::{ContactId, ContactStatus};

use crate::db::ContactRepository;
use crate::error::Result;
use crate::middleware::OptionalAuth;
use crate::models::ContactMessage;
use crate::state::AppState;

/// Contact-form submission body.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Status change body.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: ContactStatus,
}

/// Submit a contact message. Open to everyone.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ContactBody>,
) -> Result<Json<ContactMessage>> {
    let message = ContactRepository::new(state.db()).create(
        &body.name,
        &body.email,
        &body.subject,
        &body.message,
    )?;
    tracing::info!(contact_id = %message.id, "contact message received");
    Ok(Json(message))
}

/// List messages newest first (admin).
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
) -> Result<Json<Vec<ContactMessage>>> {
    Ok(Json(ContactRepository::new(state.db()).list(caller)?))
}

/// Move a message to a new triage status (admin).
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
    Path(id): Path<ContactId>,
    Json(body): Json<StatusBody>,
) -> Result<Json<ContactMessage>> {
    let message = ContactRepository::new(state.db()).update_status(caller, id, body.status)?;
    Ok(Json(message))
}
