//! Cart line items and their state transitions.
//!
//! Every transition consumes the current [`Cart`] and returns the next one.
//! The previous value is gone once a transition runs, so no view of the old
//! state can observe the change.
//!
//! Invariants held by every transition:
//! - each line's quantity is at least one
//! - no two lines share a product id
//!
//! ```
//! use rust_decimal::Decimal;
//! use shop_chain_core::{Cart, Discount, Product, ProductId};
//!
//! let ring = Product {
//!     id: ProductId::new(1),
//!     name: "Ring".to_string(),
//!     price: Decimal::new(100, 0),
//!     discount: Discount::NONE,
//!     image: "ring.png".to_string(),
//!     category: None,
//! };
//!
//! let cart = Cart::new().add(&ring).add(&ring);
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.subtotal(), Decimal::new(200, 0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::totals;
use crate::types::{ProductId, Quantity};

/// A product in the cart together with how many units are wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: Quantity,
}

impl CartLineItem {
    /// A new line with a single unit.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: Quantity::ONE,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Full unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        totals::line_total(self)
    }
}

/// An id-keyed cart operation.
///
/// Surfaces without an add entry point are driven only through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
}

impl LineAction {
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        match self {
            Self::Increase(id) | Self::Decrease(id) | Self::Remove(id) => *id,
        }
    }
}

/// Ordered sequence of cart lines. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Copy every product into the cart with quantity one, in order.
    ///
    /// This bypasses [`Cart::add`]; ids are unique as long as the source is.
    #[must_use]
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            items: products
                .into_iter()
                .cloned()
                .map(CartLineItem::new)
                .collect(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the same id, or appends a new line
    /// with quantity one.
    #[must_use]
    pub fn add(self, product: &Product) -> Self {
        if self.contains(product.id) {
            return self.map_quantity(product.id, Quantity::incremented);
        }
        let mut items = self.items;
        items.push(CartLineItem::new(product.clone()));
        Self { items }
    }

    /// Add one unit to the line for `id`. No-op if absent.
    #[must_use]
    pub fn increase_quantity(self, id: ProductId) -> Self {
        self.map_quantity(id, Quantity::incremented)
    }

    /// Remove one unit from the line for `id` unless it is already at one.
    /// No-op if absent.
    #[must_use]
    pub fn decrease_quantity(self, id: ProductId) -> Self {
        self.map_quantity(id, Quantity::decremented)
    }

    /// Drop the line for `id`. No-op if absent.
    #[must_use]
    pub fn remove(self, id: ProductId) -> Self {
        Self {
            items: self
                .items
                .into_iter()
                .filter(|line| line.id() != id)
                .collect(),
        }
    }

    #[must_use]
    pub fn apply(self, action: LineAction) -> Self {
        match action {
            LineAction::Increase(id) => self.increase_quantity(id),
            LineAction::Decrease(id) => self.decrease_quantity(id),
            LineAction::Remove(id) => self.remove(id),
        }
    }

    fn map_quantity(self, id: ProductId, f: impl Fn(Quantity) -> Quantity) -> Self {
        Self {
            items: self
                .items
                .into_iter()
                .map(|mut line| {
                    if line.id() == id {
                        line.quantity = f(line.quantity);
                    }
                    line
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        totals::subtotal(&self.items)
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        totals::total(&self.items)
    }

    /// Units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        totals::item_count(&self.items)
    }
}
