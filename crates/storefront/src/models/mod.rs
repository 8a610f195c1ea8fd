//! Domain models for storefront.
//!
//! The cart state itself is defined in `shop-chain-core`; this module holds
//! what the storefront layers on top of it.

pub mod session;
