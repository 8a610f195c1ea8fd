//! Product records from the catalog feed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Discount, ProductId};

/// A purchasable product as it appears in the catalog feed.
///
/// Unknown fields in the feed are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Full unit price, before any discount.
    pub price: Decimal,
    #[serde(default)]
    pub discount: Discount,
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Price shown in listings: `price × (1 − discount/100)`.
    #[must_use]
    pub fn sale_price(&self) -> Decimal {
        self.discount.apply(self.price)
    }

    /// Whether the listing should carry a sale badge.
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.discount.is_active()
    }
}
