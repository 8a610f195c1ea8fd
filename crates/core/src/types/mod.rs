//! Core types for Shop Chain.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod discount;
pub mod id;
pub mod price;
pub mod quantity;

pub use discount::{Discount, DiscountError};
pub use id::*;
pub use price::{CurrencyCode, CurrencyError, Price};
pub use quantity::Quantity;
