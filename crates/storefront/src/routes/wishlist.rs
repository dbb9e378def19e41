//! Wishlist route handlers.
//!
//! Same session-profile scoping as the cart, on a separate slot.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use keepanime_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::ProductSummary;
use crate::routes::client_profile;
use crate::state::AppState;
use crate::stores::WishlistStore;

/// Toggle request body.
#[derive(Debug, Deserialize)]
pub struct ToggleBody {
    pub product_id: ProductId,
}

/// Wishlist contents returned to the client.
#[derive(Debug, Serialize)]
pub struct WishlistView {
    pub items: Vec<ProductSummary>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

impl WishlistView {
    fn from_store(wishlist: &WishlistStore, notice: Option<&'static str>) -> Self {
        Self {
            items: wishlist.items().to_vec(),
            count: wishlist.count(),
            notice,
        }
    }
}

/// Item-count response.
#[derive(Debug, Serialize)]
pub struct CountBody {
    pub count: usize,
}

async fn open_wishlist(state: &AppState, session: &Session) -> Result<WishlistStore> {
    let profile = client_profile(session).await?;
    Ok(WishlistStore::open(state.profile_bridge(profile)))
}

/// Wishlist contents.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<WishlistView>> {
    let wishlist = open_wishlist(&state, &session).await?;
    Ok(Json(WishlistView::from_store(&wishlist, None)))
}

/// Toggle a product in the wishlist.
#[instrument(skip(state, session, body), fields(product_id = %body.product_id))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<ToggleBody>,
) -> Result<Json<WishlistView>> {
    let product = ProductRepository::new(state.db())
        .get_by_id(body.product_id)
        .ok_or(AppError::NotFound)?;

    let mut wishlist = open_wishlist(&state, &session).await?;
    let notice = wishlist.toggle(ProductSummary::from(&product));
    Ok(Json(WishlistView::from_store(&wishlist, Some(notice.message()))))
}

/// Item count for the wishlist badge.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Json<CountBody>> {
    let wishlist = open_wishlist(&state, &session).await?;
    Ok(Json(CountBody {
        count: wishlist.count(),
    }))
}
