//! Home page route handler.

use axum::response::Redirect;

use crate::routes::products::SHOP_PATH;

/// The catalog page doubles as the landing page.
pub async fn home() -> Redirect {
    Redirect::to(SHOP_PATH)
}
