//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keepanime_core::{Price, ProductId};

/// A themed USB drive in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Storage capacity label (e.g., "64GB").
    pub storage: String,
    /// Collection this product belongs to (e.g., "One Piece").
    pub collection: String,
    /// Image URLs, first one is the primary image.
    pub images: Vec<String>,
    /// Structured specifications.
    pub specifications: Specifications,
    /// Whether the product is only reservable, not yet purchasable.
    pub is_pre_order: bool,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Structured product specifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specifications {
    /// Full storage description (e.g., "64GB USB 3.0").
    pub storage_size: String,
    /// Labels of the preloaded content.
    pub preloaded_anime: Vec<String>,
    /// Logo engraved on the drive.
    pub logo_design: String,
    /// Supported operating systems.
    pub compatibility: String,
}

/// Input shape for creating a product. All fields required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub storage: String,
    pub collection: String,
    pub images: Vec<String>,
    pub specifications: Specifications,
    pub is_pre_order: bool,
}

/// Partial update for a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub storage: Option<String>,
    pub collection: Option<String>,
    pub images: Option<Vec<String>>,
    pub specifications: Option<Specifications>,
    pub is_pre_order: Option<bool>,
}

/// A collection aggregate derived from the full product set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Collection name.
    pub name: String,
    /// Number of products in the collection.
    pub count: usize,
    /// Primary image of a representative product ("" if none).
    pub image: String,
}

/// The flat product record carried by cart and wishlist items.
///
/// This is the shape the client-state slots persist: enough to render a
/// line without a catalog round trip, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
    pub storage: Option<String>,
    pub collection: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.images.first().cloned(),
            storage: Some(product.storage.clone()),
            collection: Some(product.collection.clone()),
        }
    }
}
