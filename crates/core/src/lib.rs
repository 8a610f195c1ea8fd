//! Shop Chain Core - catalog types and cart state transitions.
//!
//! This crate provides the domain model shared by the Shop Chain storefront:
//! products from the catalog feed, cart lines, and the rules for how a cart
//! changes.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no sessions. Every cart transition takes the current state by value and
//! returns the next state.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, discounts, and quantities
//! - [`product`] - Product records from the catalog feed
//! - [`catalog`] - Read-only, ordered product catalog
//! - [`cart`] - Cart lines and add/increase/decrease/remove
//! - [`totals`] - Subtotal, total, and item count
//! - [`surface`] - Per-page cart state (standalone cart, catalog with drawer)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod product;
pub mod surface;
pub mod totals;
pub mod types;

pub use cart::{Cart, CartLineItem, LineAction};
pub use catalog::{Catalog, CatalogError};
pub use product::Product;
pub use surface::{CatalogBrowser, StandaloneCart};
pub use types::*;
