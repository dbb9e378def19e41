//! Cart and wishlist integration tests.
//!
//! These exercise the session-scoped client state end to end: the
//! profile cookie, the slot files behind it, and the store semantics.

use axum::http::StatusCode;
use serde_json::json;

use keepanime_integration_tests::TestApp;

async fn first_product_id(app: &mut TestApp) -> String {
    let (_, listing) = app.get("/products").await;
    listing[0]["id"].as_str().expect("product id").to_owned()
}

#[tokio::test]
async fn test_cart_add_accumulates_and_persists_across_requests() {
    let mut app = TestApp::spawn();
    let id = first_product_id(&mut app).await;

    let (status, cart) = app
        .post("/cart/add", json!({ "product_id": id, "quantity": 2 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["count"], 2);
    assert_eq!(cart["total"], "99.98");
    assert_eq!(cart["notice"], "Added to cart");

    // Same product again accumulates into one line
    let (_, cart) = app.post("/cart/add", json!({ "product_id": id })).await;
    assert_eq!(cart["items"].as_array().expect("items").len(), 1);
    assert_eq!(cart["items"][0]["quantity"], 3);

    // A later request in the same session sees the same cart
    let (status, cart) = app.get("/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["count"], 3);
}

#[tokio::test]
async fn test_cart_quantity_is_clamped() {
    let mut app = TestApp::spawn();
    let id = first_product_id(&mut app).await;

    app.post("/cart/add", json!({ "product_id": id })).await;
    let (_, cart) = app
        .post("/cart/update", json!({ "product_id": id, "quantity": 500 }))
        .await;
    assert_eq!(cart["items"][0]["quantity"], 99);

    let (_, cart) = app
        .post("/cart/update", json!({ "product_id": id, "quantity": 0 }))
        .await;
    assert_eq!(cart["items"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_cart_remove_and_clear() {
    let mut app = TestApp::spawn();
    let id = first_product_id(&mut app).await;

    app.post("/cart/add", json!({ "product_id": id })).await;
    let (_, cart) = app.post("/cart/remove", json!({ "product_id": id })).await;
    assert_eq!(cart["count"], 0);
    assert_eq!(cart["notice"], "Removed from cart");

    app.post("/cart/add", json!({ "product_id": id })).await;
    let (_, cart) = app.post("/cart/clear", json!({})).await;
    assert_eq!(cart["count"], 0);
    assert_eq!(cart["total"], "0");
    assert_eq!(cart["notice"], "Cart cleared");
}

#[tokio::test]
async fn test_cart_rejects_unknown_product() {
    let mut app = TestApp::spawn();

    let (status, _) = app
        .post(
            "/cart/add",
            json!({ "product_id": "00000000-0000-0000-0000-000000000000" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sessions_have_isolated_carts() {
    let mut app = TestApp::spawn();
    let id = first_product_id(&mut app).await;

    app.post("/cart/add", json!({ "product_id": id, "quantity": 2 }))
        .await;
    let (_, cart) = app.get("/cart").await;
    assert_eq!(cart["count"], 2);

    // A fresh session against the same server starts empty
    app.reset_session();
    let (_, cart) = app.get("/cart").await;
    assert_eq!(cart["count"], 0);
}

#[tokio::test]
async fn test_wishlist_toggle_round_trip() {
    let mut app = TestApp::spawn();
    let id = first_product_id(&mut app).await;

    let (status, wishlist) = app
        .post("/wishlist/toggle", json!({ "product_id": id }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wishlist["count"], 1);
    assert_eq!(wishlist["notice"], "Added to wishlist");

    // Membership survives across requests
    let (_, count) = app.get("/wishlist/count").await;
    assert_eq!(count["count"], 1);

    let (_, wishlist) = app
        .post("/wishlist/toggle", json!({ "product_id": id }))
        .await;
    assert_eq!(wishlist["count"], 0);
    assert_eq!(wishlist["notice"], "Removed from wishlist");
}

#[tokio::test]
async fn test_wishlist_and_cart_do_not_interfere() {
    let mut app = TestApp::spawn();
    let id = first_product_id(&mut app).await;

    app.post("/wishlist/toggle", json!({ "product_id": id }))
        .await;
    app.post("/cart/add", json!({ "product_id": id })).await;
    app.post("/cart/clear", json!({})).await;

    let (_, count) = app.get("/wishlist/count").await;
    assert_eq!(count["count"], 1);
}
