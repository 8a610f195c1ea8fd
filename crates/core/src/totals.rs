//! Totals derived from cart lines.
//!
//! All sums use the full unit price. Discounts shown in listings are not
//! applied here. Amounts saturate at [`Decimal::MAX`] instead of overflowing.

use rust_decimal::Decimal;

use crate::cart::CartLineItem;

/// `price × quantity` for one line.
#[must_use]
pub fn line_total(item: &CartLineItem) -> Decimal {
    item.product
        .price
        .saturating_mul(Decimal::from(item.quantity.get()))
}

/// Sum of line totals. Zero for no lines.
#[must_use]
pub fn subtotal(items: &[CartLineItem]) -> Decimal {
    items
        .iter()
        .map(line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Amount due. Nothing is added on top of the subtotal.
#[must_use]
pub fn total(items: &[CartLineItem]) -> Decimal {
    subtotal(items)
}

/// Units across all lines.
#[must_use]
pub fn item_count(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity.get())).sum()
}
