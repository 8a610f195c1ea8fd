//! Standalone cart page.
//!
//! The cart on this page starts as a copy of the whole catalog, one unit of
//! each product, and is then edited line by line. It has no add entry point
//! and is independent of the drawer cart on the catalog page.
//!
//! Mutations are plain form posts answered with `303 See Other` back to
//! `/cart`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shop_chain_core::{Cart, CartLineItem, CurrencyCode, LineAction, Price, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::session::visitor_id;
use crate::state::AppState;

/// Path of the standalone cart page.
pub const CART_PATH: &str = "/cart";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Build the display data for `cart`, formatting amounts in `currency`.
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|line| CartItemView::new(line, currency))
                .collect(),
            subtotal: Price::new(cart.subtotal(), currency).display(),
            total: Price::new(cart.total(), currency).display(),
            item_count: cart.item_count(),
        }
    }
}

impl CartItemView {
    fn new(line: &CartLineItem, currency: CurrencyCode) -> Self {
        Self {
            id: line.id().as_i32(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            quantity: line.quantity.get(),
            price: Price::new(line.product.price, currency).display(),
            line_price: Price::new(line.line_total(), currency).display(),
        }
    }
}

/// Form body naming a product, shared by every cart mutation.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: ProductId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    /// Prefix for the line control form actions.
    pub cart_actions: &'static str,
}

/// Display the standalone cart, seeding it on first visit.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let visitor = visitor_id(&session).await?;
    let mut carts = state.carts().lock(visitor).await;
    let cart_state = carts.standalone(state.catalog().products());

    Ok(CartShowTemplate {
        cart: CartView::new(cart_state.cart(), state.config().currency),
        cart_actions: CART_PATH,
    })
}

/// Add one unit to a line.
#[instrument(skip(state, session))]
pub async fn increase(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    apply(&state, &session, LineAction::Increase(form.product_id)).await
}

/// Remove one unit from a line, never going below one.
#[instrument(skip(state, session))]
pub async fn decrease(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    apply(&state, &session, LineAction::Decrease(form.product_id)).await
}

/// Drop a line.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    apply(&state, &session, LineAction::Remove(form.product_id)).await
}

async fn apply(state: &AppState, session: &Session, action: LineAction) -> Result<Redirect> {
    let visitor = visitor_id(session).await?;
    let mut carts = state.carts().lock(visitor).await;
    let lines = carts
        .apply_standalone(state.catalog().products(), action)
        .cart()
        .len();
    drop(carts);

    let product_id = action.product_id().to_string();
    add_breadcrumb("cart", "Updated cart line", Some(&[("product_id", product_id.as_str())]));
    tracing::debug!(?action, lines, "Standalone cart updated");

    Ok(Redirect::to(CART_PATH))
}
