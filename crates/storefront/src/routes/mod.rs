//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /shop
//! GET  /health                 - Health check
//!
//! # Catalog page (cart drawer)
//! GET  /shop                   - Product grid, featured panel, drawer
//! POST /shop/cart/add          - Add to cart, open drawer
//! POST /shop/cart/increase     - Quantity +1
//! POST /shop/cart/decrease     - Quantity -1 (floor 1)
//! POST /shop/cart/remove       - Remove line
//! POST /shop/cart/close        - Close drawer
//!
//! # Standalone cart page
//! GET  /cart                   - Cart page (seeded from catalog)
//! POST /cart/increase          - Quantity +1
//! POST /cart/decrease          - Quantity -1 (floor 1)
//! POST /cart/remove            - Remove line
//! ```
//!
//! Every POST takes a `product_id` form field (except close) and redirects
//! back to its page with `303 See Other`.

pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog page routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/cart/add", post(products::add))
        .route("/cart/increase", post(products::increase))
        .route("/cart/decrease", post(products::decrease))
        .route("/cart/remove", post(products::remove))
        .route("/cart/close", post(products::close))
}

/// Create the standalone cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .nest("/shop", shop_routes())
        .nest("/cart", cart_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
