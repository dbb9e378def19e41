//! In-process document store.
//!
//! Stands in for the managed backend the storefront delegates to. Each
//! collection is an insertion-ordered vector behind its own `RwLock`,
//! which gives the guarantees the repositories rely on: consistent
//! reads, atomic single-document mutations, and unique-index checks
//! performed under the same write lock as the insert.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{BlogPost, ContactMessage, Product, Subscription, User};

/// Handle to the document store.
///
/// Cheaply cloneable via `Arc`; all clones see the same collections.
#[derive(Clone, Default)]
pub struct Database {
    inner: Arc<Collections>,
}

#[derive(Default)]
struct Collections {
    products: RwLock<Vec<Product>>,
    blog: RwLock<Vec<BlogPost>>,
    newsletter: RwLock<Vec<Subscription>>,
    contacts: RwLock<Vec<ContactMessage>>,
    users: RwLock<Vec<User>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Database {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn products(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        read(&self.inner.products)
    }

    pub(crate) fn products_mut(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        write(&self.inner.products)
    }

    pub(crate) fn blog(&self) -> RwLockReadGuard<'_, Vec<BlogPost>> {
        read(&self.inner.blog)
    }

    pub(crate) fn blog_mut(&self) -> RwLockWriteGuard<'_, Vec<BlogPost>> {
        write(&self.inner.blog)
    }

    pub(crate) fn newsletter(&self) -> RwLockReadGuard<'_, Vec<Subscription>> {
        read(&self.inner.newsletter)
    }

    pub(crate) fn newsletter_mut(&self) -> RwLockWriteGuard<'_, Vec<Subscription>> {
        write(&self.inner.newsletter)
    }

    pub(crate) fn contacts(&self) -> RwLockReadGuard<'_, Vec<ContactMessage>> {
        read(&self.inner.contacts)
    }

    pub(crate) fn contacts_mut(&self) -> RwLockWriteGuard<'_, Vec<ContactMessage>> {
        write(&self.inner.contacts)
    }

    pub(crate) fn users(&self) -> RwLockReadGuard<'_, Vec<User>> {
        read(&self.inner.users)
    }

    pub(crate) fn users_mut(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        write(&self.inner.users)
    }
}
