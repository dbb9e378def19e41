//! KeepAnime Core - Shared types library.
//!
//! This crate provides common types used across all KeepAnime components:
//! - `storefront` - Public-facing e-commerce service
//! - `integration-tests` - HTTP-level tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles,
//!   statuses, and catalog sort parameters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
