//! Product repository.
//!
//! Reads are open to everyone; create/update/remove require the
//! administrator role, checked against the caller's stored record on
//! every call.

use std::cmp::Ordering;

use chrono::Utc;

use keepanime_core::{ProductId, SortKey, SortOrder, UserId};

use super::users::UserRepository;
use super::{Database, RepositoryError};
use crate::models::{CollectionSummary, NewProduct, Product, ProductPatch};

/// Default number of related products returned.
const DEFAULT_RELATED_LIMIT: usize = 4;

/// Listing parameters for the catalog.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Exact-match collection filter.
    pub collection: Option<String>,
    /// Sort field; unsorted (insertion order) when absent.
    pub sort_by: Option<SortKey>,
    /// Sort direction, ascending by default.
    pub sort_order: Option<SortOrder>,
}

/// Repository for the product catalog.
pub struct ProductRepository<'a> {
    db: &'a Database,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List products, optionally filtered by collection and sorted.
    #[must_use]
    pub fn list(&self, query: &ProductQuery) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .db
            .products()
            .iter()
            .filter(|p| {
                query
                    .collection
                    .as_ref()
                    .is_none_or(|collection| &p.collection == collection)
            })
            .cloned()
            .collect();

        if let Some(key) = query.sort_by {
            let order = query.sort_order.unwrap_or_default();
            products.sort_by(|a, b| {
                let ordering = compare(a, b, key);
                match order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        products
    }

    /// Get a product by ID. Absence is not an error.
    #[must_use]
    pub fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.db.products().iter().find(|p| p.id == id).cloned()
    }

    /// Up to `limit` (default 4) products sharing `collection`,
    /// excluding the queried product itself.
    #[must_use]
    pub fn get_related(
        &self,
        product_id: ProductId,
        collection: &str,
        limit: Option<usize>,
    ) -> Vec<Product> {
        self.db
            .products()
            .iter()
            .filter(|p| p.collection == collection && p.id != product_id)
            .take(limit.unwrap_or(DEFAULT_RELATED_LIMIT))
            .cloned()
            .collect()
    }

    /// Derive the set of distinct collections from the full product
    /// set, in first-seen order, with member counts and a
    /// representative image. Computed from scratch on each call.
    #[must_use]
    pub fn get_collections(&self) -> Vec<CollectionSummary> {
        let products = self.db.products();
        let mut summaries: Vec<CollectionSummary> = Vec::new();

        for product in products.iter() {
            if summaries.iter().any(|c| c.name == product.collection) {
                continue;
            }
            summaries.push(CollectionSummary {
                name: product.collection.clone(),
                count: products
                    .iter()
                    .filter(|p| p.collection == product.collection)
                    .count(),
                image: product.images.first().cloned().unwrap_or_default(),
            });
        }

        summaries
    }

    /// Create a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for non-admin callers and `Validation`
    /// for an empty name, storage, or collection.
    pub fn create(
        &self,
        caller: Option<UserId>,
        input: NewProduct,
    ) -> Result<Product, RepositoryError> {
        UserRepository::new(self.db).require_admin(caller)?;
        validate_text("name", &input.name)?;
        validate_text("storage", &input.storage)?;
        validate_text("collection", &input.collection)?;

        let product = Product {
            id: ProductId::new(),
            name: input.name,
            description: input.description,
            price: input.price,
            storage: input.storage,
            collection: input.collection,
            images: input.images,
            specifications: input.specifications,
            is_pre_order: input.is_pre_order,
            created_at: Utc::now(),
        };
        self.db.products_mut().push(product.clone());
        Ok(product)
    }

    /// Apply a partial update to a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for non-admin callers, `Validation` for
    /// empty replacement text fields, and `NotFound` for a missing ID.
    pub fn update(
        &self,
        caller: Option<UserId>,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, RepositoryError> {
        UserRepository::new(self.db).require_admin(caller)?;
        if let Some(name) = &patch.name {
            validate_text("name", name)?;
        }
        if let Some(storage) = &patch.storage {
            validate_text("storage", storage)?;
        }
        if let Some(collection) = &patch.collection {
            validate_text("collection", collection)?;
        }

        let mut products = self.db.products_mut();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(storage) = patch.storage {
            product.storage = storage;
        }
        if let Some(collection) = patch.collection {
            product.collection = collection;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(specifications) = patch.specifications {
            product.specifications = specifications;
        }
        if let Some(is_pre_order) = patch.is_pre_order {
            product.is_pre_order = is_pre_order;
        }

        Ok(product.clone())
    }

    /// Delete a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for non-admin callers and `NotFound` for
    /// a missing ID.
    pub fn remove(&self, caller: Option<UserId>, id: ProductId) -> Result<(), RepositoryError> {
        UserRepository::new(self.db).require_admin(caller)?;

        let mut products = self.db.products_mut();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Three-way comparison on the requested sort field. String fields are
/// compared case-insensitively.
fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Storage => a.storage.to_lowercase().cmp(&b.storage.to_lowercase()),
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
