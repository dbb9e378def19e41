//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health check
//!
//! # Products
//! GET    /products               - Product listing (collection, sort_by, sort_order)
//! GET    /products/{id}          - Product detail
//! GET    /products/{id}/related  - Related products from the same collection
//! POST   /products               - Create product (admin)
//! PATCH  /products/{id}          - Update product (admin)
//! DELETE /products/{id}          - Delete product (admin)
//! GET    /collections            - Collection listing derived from the catalog
//!
//! # Blog
//! GET   /blog                    - Post listing (published filter)
//! GET   /blog/{slug}             - Post detail by slug
//! POST  /blog                    - Create post (admin)
//! PATCH /blog/{id}               - Update post (admin)
//!
//! # Newsletter
//! POST /newsletter/subscribe     - Subscribe an email
//! GET  /newsletter               - Subscription listing
//! GET  /newsletter/count         - Subscription count
//!
//! # Contact
//! POST /contact                  - Submit a contact message
//! GET  /contact                  - Message listing (admin)
//! POST /contact/{id}/status      - Move a message to a triage status (admin)
//!
//! # Auth
//! POST /auth/login               - Log in by email (find-or-create)
//! POST /auth/logout              - Log out
//!
//! # Account (requires auth)
//! GET  /account                  - Current user's record
//! POST /account/name             - Set display name
//! POST /account/image            - Set avatar image
//! POST /account/preferences      - Partial preferences update
//!
//! # Cart (session-scoped)
//! GET  /cart                     - Cart contents with total and count
//! POST /cart/add                 - Add a product
//! POST /cart/update              - Set a line's quantity
//! POST /cart/remove              - Remove a product
//! POST /cart/clear               - Empty the cart
//! GET  /cart/count               - Item count
//!
//! # Wishlist (session-scoped)
//! GET  /wishlist                 - Wishlist contents
//! POST /wishlist/toggle          - Toggle a product
//! GET  /wishlist/count           - Item count
//! ```

pub mod account;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod contact;
pub mod newsletter;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::session_keys;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::remove),
        )
        .route("/{id}/related", get(products::related))
}

/// Create the blog routes router.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::index).post(blog::create))
        .route("/{slug}", get(blog::show).patch(blog::update))
}

/// Create the newsletter routes router.
pub fn newsletter_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(newsletter::subscribe))
        .route("/", get(newsletter::index))
        .route("/count", get(newsletter::count))
}

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::create).get(contact::index))
        .route("/{id}/status", post(contact::update_status))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::show))
        .route("/name", post(account::set_name))
        .route("/image", post(account::set_image))
        .route("/preferences", post(account::update_preferences))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/toggle", post(wishlist::toggle))
        .route("/count", get(wishlist::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .route("/collections", get(products::collections))
        .nest("/blog", blog_routes())
        .nest("/newsletter", newsletter_routes())
        .nest("/contact", contact_routes())
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
}

/// Get the session's client-state profile, creating one on first use.
///
/// The profile names the directory holding the session's cart and
/// wishlist slots, so two sessions never share client state.
pub(crate) async fn client_profile(session: &Session) -> Result<Uuid, AppError> {
    if let Some(profile) = session.get::<Uuid>(session_keys::CLIENT_PROFILE).await? {
        return Ok(profile);
    }

    let profile = Uuid::new_v4();
    session.insert(session_keys::CLIENT_PROFILE, profile).await?;
    Ok(profile)
}
