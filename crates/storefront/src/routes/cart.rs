//! Cart route handlers.
//!
//! The cart lives in the session's client profile: each session gets an
//! isolated slot directory, and every handler reopens the store from it
//! so state survives across requests without any shared cache.

use axum::{
    Json,
    extract::State,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use keepanime_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::ProductSummary;
use crate::routes::client_profile;
use crate::state::AppState;
use crate::stores::{CartItem, CartStore};

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddBody {
    pub product_id: ProductId,
    /// Defaults to 1.
    pub quantity: Option<u32>,
}

/// Quantity-change request body.
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove-from-cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveBody {
    pub product_id: ProductId,
}

/// Cart contents returned to the client.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

impl CartView {
    fn from_store(cart: &CartStore, notice: Option<&'static str>) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
            count: cart.count(),
            notice,
        }
    }
}

/// Item-count response.
#[derive(Debug, Serialize)]
pub struct CountBody {
    pub count: u32,
}

async fn open_cart(state: &AppState, session: &Session) -> Result<CartStore> {
    let profile = client_profile(session).await?;
    Ok(CartStore::open(state.profile_bridge(profile)))
}

/// Cart contents.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = open_cart(&state, &session).await?;
    Ok(Json(CartView::from_store(&cart, None)))
}

/// Add a product to the cart.
#[instrument(skip(state, session, body), fields(product_id = %body.product_id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddBody>,
) -> Result<Json<CartView>> {
    let product = ProductRepository::new(state.db())
        .get_by_id(body.product_id)
        .ok_or(AppError::NotFound)?;

    let mut cart = open_cart(&state, &session).await?;
    let notice = cart.add_item(ProductSummary::from(&product), body.quantity.unwrap_or(1));
    Ok(Json(CartView::from_store(&cart, Some(notice.message()))))
}

/// Set a line's quantity.
#[instrument(skip(state, session, body), fields(product_id = %body.product_id))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<UpdateBody>,
) -> Result<Json<CartView>> {
    let mut cart = open_cart(&state, &session).await?;
    cart.set_quantity(body.product_id, body.quantity);
    Ok(Json(CartView::from_store(&cart, None)))
}

/// Remove a product from the cart.
#[instrument(skip(state, session, body), fields(product_id = %body.product_id))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RemoveBody>,
) -> Result<Json<CartView>> {
    let mut cart = open_cart(&state, &session).await?;
    let notice = cart.remove_item(body.product_id);
    Ok(Json(CartView::from_store(&cart, Some(notice.message()))))
}

/// Empty the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let mut cart = open_cart(&state, &session).await?;
    let notice = cart.clear();
    Ok(Json(CartView::from_store(&cart, Some(notice.message()))))
}

/// Item count for the cart badge.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Json<CountBody>> {
    let cart = open_cart(&state, &session).await?;
    Ok(Json(CountBody { count: cart.count() }))
}
