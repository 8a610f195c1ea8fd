//! Per-page cart state.
//!
//! The standalone cart page and the catalog page each own an independent
//! cart. They share line semantics but differ in how they start and in
//! whether they carry a drawer.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, LineAction};
use crate::catalog::Catalog;
use crate::product::Product;

/// State behind the standalone cart page.
///
/// Starts as a copy of the whole catalog, one unit of each product. There is
/// no add entry point; only [`LineAction`]s change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandaloneCart {
    cart: Cart,
}

impl StandaloneCart {
    #[must_use]
    pub fn seeded(catalog: &Catalog) -> Self {
        Self {
            cart: Cart::from_products(catalog),
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn apply(self, action: LineAction) -> Self {
        Self {
            cart: self.cart.apply(action),
        }
    }
}

/// State behind the catalog page: an initially empty cart plus the
/// visibility flag of its overlay drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBrowser {
    cart: Cart,
    drawer_open: bool,
}

impl CatalogBrowser {
    /// Empty cart, drawer closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cart: Cart::new(),
            drawer_open: false,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Add one unit of `product` and open the drawer.
    #[must_use]
    pub fn add(self, product: &Product) -> Self {
        Self {
            cart: self.cart.add(product),
            drawer_open: true,
        }
    }

    /// Change a line without touching the drawer.
    #[must_use]
    pub fn apply(self, action: LineAction) -> Self {
        Self {
            cart: self.cart.apply(action),
            drawer_open: self.drawer_open,
        }
    }

    /// Hide the drawer. The cart is kept as is.
    #[must_use]
    pub fn close_drawer(self) -> Self {
        Self {
            cart: self.cart,
            drawer_open: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::ProductId;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"id": 1, "name": "Anklet", "price": 300, "discount": 10, "image": "1.png"},
                {"id": 2, "name": "Locket", "price": 700, "image": "2.png"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_standalone_cart_seeds_whole_catalog() {
        let catalog = catalog();
        let state = StandaloneCart::seeded(&catalog);
        assert_eq!(state.cart().len(), catalog.len());
        assert!(state.cart().items().iter().all(|l| l.quantity.get() == 1));
        // Full prices, discount ignored.
        assert_eq!(state.cart().subtotal(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_standalone_cart_line_actions() {
        let id = ProductId::new(2);
        let state = StandaloneCart::seeded(&catalog())
            .apply(LineAction::Increase(id))
            .apply(LineAction::Remove(ProductId::new(1)));
        assert_eq!(state.cart().len(), 1);
        assert_eq!(state.cart().subtotal(), Decimal::new(1400, 0));
    }

    #[test]
    fn test_drawer_closed_until_first_add() {
        let catalog = catalog();
        let browser = CatalogBrowser::new();
        assert!(!browser.is_drawer_open());
        assert!(browser.cart().is_empty());

        let browser = browser.apply(LineAction::Increase(ProductId::new(1)));
        assert!(!browser.is_drawer_open());

        let browser = browser.add(catalog.find(ProductId::new(1)).unwrap());
        assert!(browser.is_drawer_open());
        assert_eq!(browser.cart().len(), 1);
    }

    #[test]
    fn test_close_drawer_regardless_of_contents() {
        let catalog = catalog();
        let anklet = catalog.find(ProductId::new(1)).unwrap();

        let browser = CatalogBrowser::new().add(anklet).close_drawer();
        assert!(!browser.is_drawer_open());
        assert_eq!(browser.cart().len(), 1);

        let browser = browser
            .add(anklet)
            .apply(LineAction::Remove(anklet.id))
            .close_drawer();
        assert!(!browser.is_drawer_open());
        assert!(browser.cart().is_empty());
    }

    #[test]
    fn test_line_actions_keep_drawer_open() {
        let catalog = catalog();
        let anklet = catalog.find(ProductId::new(1)).unwrap();
        let browser = CatalogBrowser::new()
            .add(anklet)
            .apply(LineAction::Remove(anklet.id));
        assert!(browser.is_drawer_open());
        assert!(browser.cart().is_empty());
    }

    #[test]
    fn test_surfaces_are_independent() {
        let catalog = catalog();
        let standalone = StandaloneCart::seeded(&catalog);
        let browser = CatalogBrowser::new();
        let standalone = standalone.apply(LineAction::Remove(ProductId::new(1)));
        assert!(browser.cart().is_empty());
        assert_eq!(standalone.cart().len(), 1);
    }
}
