//! Catalog page with the overlay cart drawer.
//!
//! The cart here starts empty. Adding a product opens the drawer; the close
//! button hides it again without touching the cart. Line controls in the
//! drawer behave exactly like the standalone cart page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use shop_chain_core::{CatalogBrowser, CurrencyCode, LineAction, Price, Product};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session::visitor_id;
use crate::routes::cart::{CartView, ProductForm};
use crate::state::AppState;

/// Path of the catalog page.
pub const SHOP_PATH: &str = "/shop";

/// Prefix for the drawer's line control form actions.
const DRAWER_ACTIONS: &str = "/shop/cart";

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub price: String,
    pub sale_price: String,
    pub discount: String,
    pub on_sale: bool,
}

impl ProductView {
    fn new(product: &Product, currency: CurrencyCode) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: Price::new(product.price, currency).display(),
            sale_price: Price::new(product.sale_price(), currency).display(),
            discount: product.discount.to_string(),
            on_sale: product.on_sale(),
        }
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductView>,
    pub featured: Vec<ProductView>,
    pub categories: Vec<String>,
    pub drawer_open: bool,
    pub cart: CartView,
    /// Prefix for the line control form actions.
    pub cart_actions: &'static str,
}

/// Display the catalog grid, featured panel, and (if open) the cart drawer.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let visitor = visitor_id(&session).await?;
    let carts = state.carts().lock(visitor).await;
    let browser = carts.browser();
    let currency = state.config().currency;
    let catalog = state.catalog();

    Ok(ShopIndexTemplate {
        products: catalog
            .products()
            .iter()
            .map(|p| ProductView::new(p, currency))
            .collect(),
        featured: catalog
            .featured()
            .iter()
            .map(|p| ProductView::new(p, currency))
            .collect(),
        categories: catalog
            .products()
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
        drawer_open: browser.is_drawer_open(),
        cart: CartView::new(browser.cart(), currency),
        cart_actions: DRAWER_ACTIONS,
    })
}

/// Add one unit of a catalog product and open the drawer.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .find(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let visitor = visitor_id(&session).await?;
    let mut carts = state.carts().lock(visitor).await;
    let lines = carts.update_browser(|browser| browser.add(product)).cart().len();
    drop(carts);

    let product_id = form.product_id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));
    tracing::debug!(product_id = %form.product_id, lines, "Added to cart");

    Ok(Redirect::to(SHOP_PATH))
}

/// Add one unit to a drawer line.
#[instrument(skip(state, session))]
pub async fn increase(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    apply(&state, &session, LineAction::Increase(form.product_id)).await
}

/// Remove one unit from a drawer line, never going below one.
#[instrument(skip(state, session))]
pub async fn decrease(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    apply(&state, &session, LineAction::Decrease(form.product_id)).await
}

/// Drop a drawer line.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    apply(&state, &session, LineAction::Remove(form.product_id)).await
}

/// Hide the drawer.
#[instrument(skip(state, session))]
pub async fn close(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let visitor = visitor_id(&session).await?;
    state
        .carts()
        .lock(visitor)
        .await
        .update_browser(CatalogBrowser::close_drawer);

    add_breadcrumb("cart", "Closed cart drawer", None);
    Ok(Redirect::to(SHOP_PATH))
}

async fn apply(state: &AppState, session: &Session, action: LineAction) -> Result<Redirect> {
    let visitor = visitor_id(session).await?;
    let mut carts = state.carts().lock(visitor).await;
    let lines = carts
        .update_browser(|browser| browser.apply(action))
        .cart()
        .len();
    drop(carts);

    let product_id = action.product_id().to_string();
    add_breadcrumb("cart", "Updated cart line", Some(&[("product_id", product_id.as_str())]));
    tracing::debug!(?action, lines, "Drawer cart updated");

    Ok(Redirect::to(SHOP_PATH))
}
