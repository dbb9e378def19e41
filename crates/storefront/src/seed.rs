//! Startup seeding for the catalog and the bootstrap admin.
//!
//! Seeding is idempotent: when the products collection already holds
//! records nothing is written, so a restart never duplicates the
//! catalog.

use chrono::Utc;

use keepanime_core::{Email, Price, ProductId, Role, UserId};

use crate::db::Database;
use crate::models::{Product, Specifications, User};

/// Email of the bootstrap admin account created on first startup.
pub const BOOTSTRAP_ADMIN_EMAIL: &str = "admin@keepanime.shop";

/// Seed the sample catalog and the bootstrap admin. Returns the number
/// of products inserted (zero when the catalog was already populated).
pub fn seed(db: &Database) -> usize {
    seed_admin(db);

    if !db.products().is_empty() {
        tracing::debug!("catalog already seeded, skipping");
        return 0;
    }

    let products = sample_products();
    let inserted = products.len();
    db.products_mut().extend(products);
    tracing::info!(count = inserted, "seeded sample catalog");
    inserted
}

fn seed_admin(db: &Database) {
    let email = match Email::parse(BOOTSTRAP_ADMIN_EMAIL) {
        Ok(email) => email,
        Err(e) => {
            tracing::error!(error = %e, "bootstrap admin email is invalid");
            return;
        }
    };

    let mut users = db.users_mut();
    if users.iter().any(|u| u.email.as_ref() == Some(&email)) {
        return;
    }

    users.push(User {
        id: UserId::new(),
        name: Some("KeepAnime Admin".to_owned()),
        image: None,
        email: Some(email),
        role: Some(Role::Admin),
        phone: None,
        address: None,
        payment_method: None,
        notifications: None,
        created_at: Utc::now(),
    });
    tracing::info!("created bootstrap admin");
}

fn sample_products() -> Vec<Product> {
    let now = Utc::now();
    let entries = [
        (
            "One Piece Luffy USB Drive",
            "Premium 32GB USB drive featuring Monkey D. Luffy design with preloaded One Piece episodes.",
            4999_u32,
            "32GB",
            "One Piece",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=300&fit=crop",
            Specifications {
                storage_size: "32GB USB 3.0".to_owned(),
                preloaded_anime: vec![
                    "One Piece Episodes 1-50".to_owned(),
                    "Character Wallpapers".to_owned(),
                    "Theme Songs".to_owned(),
                ],
                logo_design: "Straw Hat Pirates Logo".to_owned(),
                compatibility: "Windows, Mac, Linux".to_owned(),
            },
        ),
        (
            "Naruto Hokage Collection",
            "64GB drive with exclusive Naruto content and Hokage-themed design.",
            6999,
            "64GB",
            "Naruto",
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=400&h=300&fit=crop",
            Specifications {
                storage_size: "64GB USB 3.0".to_owned(),
                preloaded_anime: vec![
                    "Naruto Episodes 1-100".to_owned(),
                    "Shippuden Highlights".to_owned(),
                    "Character Art".to_owned(),
                ],
                logo_design: "Hidden Leaf Village Symbol".to_owned(),
                compatibility: "Windows, Mac, Linux".to_owned(),
            },
        ),
        (
            "Attack on Titan Survey Corps",
            "128GB premium drive with Survey Corps emblem and exclusive AOT content.",
            8999,
            "128GB",
            "Attack on Titan",
            "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=300&fit=crop",
            Specifications {
                storage_size: "128GB USB 3.0".to_owned(),
                preloaded_anime: vec![
                    "Attack on Titan Season 1-4".to_owned(),
                    "OST Collection".to_owned(),
                    "Manga Extras".to_owned(),
                ],
                logo_design: "Survey Corps Wings of Freedom".to_owned(),
                compatibility: "Windows, Mac, Linux".to_owned(),
            },
        ),
        (
            "Dragon Ball Z Saiyan Elite",
            "Special edition 256GB drive with Dragon Ball Z complete series.",
            12999,
            "256GB",
            "Dragon Ball Z",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=300&fit=crop",
            Specifications {
                storage_size: "256GB USB 3.0".to_owned(),
                preloaded_anime: vec![
                    "Dragon Ball Z Complete".to_owned(),
                    "Movies Collection".to_owned(),
                    "Character Profiles".to_owned(),
                ],
                logo_design: "Saiyan Royal Crest".to_owned(),
                compatibility: "Windows, Mac, Linux".to_owned(),
            },
        ),
    ];

    entries
        .into_iter()
        .map(
            |(name, description, cents, storage, collection, image, specifications)| Product {
                id: ProductId::new(),
                name: name.to_owned(),
                description: description.to_owned(),
                price: Price::from_cents(cents),
                storage: storage.to_owned(),
                collection: collection.to_owned(),
                images: vec![image.to_owned()],
                specifications,
                is_pre_order: true,
                created_at: now,
            },
        )
        .collect()
}
