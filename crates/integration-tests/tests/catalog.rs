//! Catalog integration tests: listing, sorting, related products,
//! collections, and admin-gated writes.

use axum::http::StatusCode;
use serde_json::json;

use keepanime_integration_tests::TestApp;
use keepanime_storefront::seed::BOOTSTRAP_ADMIN_EMAIL;

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::spawn();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_seeded_catalog_listing() {
    let mut app = TestApp::spawn();

    let (status, body) = app.get("/products").await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("product array");
    assert_eq!(products.len(), 4);

    // Unsorted listing preserves insertion order
    assert_eq!(products[0]["name"], "One Piece Luffy USB Drive");
    assert_eq!(products[3]["name"], "Dragon Ball Z Saiyan Elite");
}

#[tokio::test]
async fn test_listing_sorts_by_price_descending() {
    let mut app = TestApp::spawn();

    let (status, body) = app.get("/products?sort_by=price&sort_order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("product array");
    let prices: Vec<&str> = products
        .iter()
        .map(|p| p["price"].as_str().expect("price string"))
        .collect();
    assert_eq!(prices, ["129.99", "89.99", "69.99", "49.99"]);
}

#[tokio::test]
async fn test_listing_filters_by_collection() {
    let mut app = TestApp::spawn();

    let (status, body) = app.get("/products?collection=One%20Piece").await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("product array");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["collection"], "One Piece");
}

#[tokio::test]
async fn test_product_detail_and_related() {
    let mut app = TestApp::spawn();

    let (_, listing) = app.get("/products").await;
    let id = listing[0]["id"].as_str().expect("product id").to_owned();

    let (status, product) = app.get(&format!("/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["id"], id.as_str());

    // Each seeded collection has one member, so related is empty
    let (status, related) = app.get(&format!("/products/{id}/related")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(related.as_array().expect("related array").len(), 0);

    let (status, _) = app
        .get("/products/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_collections_derived_from_catalog() {
    let mut app = TestApp::spawn();

    let (status, body) = app.get("/collections").await;
    assert_eq!(status, StatusCode::OK);
    let collections = body.as_array().expect("collection array");
    assert_eq!(collections.len(), 4);
    assert_eq!(collections[0]["name"], "One Piece");
    assert_eq!(collections[0]["count"], 1);
}

fn new_product_body() -> serde_json::Value {
    json!({
        "name": "Demon Slayer Corps Drive",
        "description": "512GB drive with the full Demon Slayer run.",
        "price": "149.99",
        "storage": "512GB",
        "collection": "Demon Slayer",
        "images": [],
        "specifications": {
            "storage_size": "512GB USB 3.0",
            "preloaded_anime": ["Demon Slayer Season 1-3"],
            "logo_design": "Demon Slayer Corps Crest",
            "compatibility": "Windows, Mac, Linux"
        },
        "is_pre_order": false
    })
}

#[tokio::test]
async fn test_catalog_writes_require_admin() {
    let mut app = TestApp::spawn();

    // Anonymous
    let (status, _) = app.post("/products", new_product_body()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Logged in but unprivileged
    app.login("fan@keepanime.shop").await;
    let (status, _) = app.post("/products", new_product_body()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Catalog unchanged either way
    let (_, listing) = app.get("/products").await;
    assert_eq!(listing.as_array().expect("product array").len(), 4);
}

#[tokio::test]
async fn test_admin_create_update_remove() {
    let mut app = TestApp::spawn();
    app.login(BOOTSTRAP_ADMIN_EMAIL).await;

    let (status, product) = app.post("/products", new_product_body()).await;
    assert_eq!(status, StatusCode::OK);
    let id = product["id"].as_str().expect("product id").to_owned();

    let (status, updated) = app
        .patch(&format!("/products/{id}"), json!({ "price": "139.99" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], "139.99");
    assert_eq!(updated["name"], "Demon Slayer Corps Drive");

    let (status, _) = app.delete(&format!("/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/products/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_create_rejects_blank_name() {
    let mut app = TestApp::spawn();
    app.login(BOOTSTRAP_ADMIN_EMAIL).await;

    let mut body = new_product_body();
    body["name"] = json!("   ");
    let (status, _) = app.post("/products", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
