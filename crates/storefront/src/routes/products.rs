//! Product and collection route handlers.
//!
//! Reads are public. Catalog writes go through the repository, which
//! requires the administrator role; handlers only pass the session's
//! user ID along.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use keepanime_core::{ProductId, SortKey, SortOrder};

use crate::db::{ProductQuery, ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::models::{CollectionSummary, NewProduct, Product, ProductPatch};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub collection: Option<String>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
}

/// Query parameters for the related-products listing.
#[derive(Debug, Deserialize)]
pub struct RelatedParams {
    pub limit: Option<usize>,
}

/// List products, optionally filtered and sorted.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Product>> {
    let query = ProductQuery {
        collection: params.collection,
        sort_by: params.sort_by,
        sort_order: params.sort_order,
    };
    Json(ProductRepository::new(state.db()).list(&query))
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    ProductRepository::new(state.db())
        .get_by_id(id)
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Related products: members of the same collection, excluding the
/// product itself.
#[instrument(skip(state))]
pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Query(params): Query<RelatedParams>,
) -> Result<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db());
    let product = repo.get_by_id(id).ok_or(AppError::NotFound)?;
    Ok(Json(repo.get_related(id, &product.collection, params.limit)))
}

/// Collection listing derived from the catalog.
#[instrument(skip(state))]
pub async fn collections(State(state): State<AppState>) -> Json<Vec<CollectionSummary>> {
    Json(ProductRepository::new(state.db()).get_collections())
}

/// Create a product (admin).
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
    Json(input): Json<NewProduct>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.db()).create(caller, input)?;
    tracing::info!(product_id = %product.id, "product created");
    Ok(Json(product))
}

/// Apply a partial update to a product (admin).
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.db()).update(caller, id, patch)?;
    Ok(Json(product))
}

/// Delete a product (admin).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
    Path(id): Path<ProductId>,
) -> Result<()> {
    ProductRepository::new(state.db()).remove(caller, id)?;
    tracing::info!(product_id = %id, "product removed");
    Ok(())
}
