//! Newsletter route handlers.
//!
//! Subscription is open to everyone; the repository normalizes the
//! email and rejects duplicates atomically.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::NewsletterRepository;
use crate::error::Result;
use crate::models::Subscription;
use crate::state::AppState;

/// Subscription request body.
#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    pub email: String,
    pub source: Option<String>,
}

/// Subscription count response.
#[derive(Debug, Serialize)]
pub struct CountBody {
    pub count: usize,
}

/// Subscribe an email address.
#[instrument(skip(state, body), fields(source = body.source.as_deref()))]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(body): Json<SubscribeBody>,
) -> Result<Json<Subscription>> {
    let subscription =
        NewsletterRepository::new(state.db()).subscribe(&body.email, body.source.as_deref())?;
    tracing::info!(subscription_id = %subscription.id, "newsletter subscription created");
    Ok(Json(subscription))
}

/// List subscriptions newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Subscription>> {
    Json(NewsletterRepository::new(state.db()).list())
}

/// Subscription count.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CountBody> {
    Json(CountBody {
        count: NewsletterRepository::new(state.db()).count(),
    })
}
