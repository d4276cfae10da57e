//! Lepix
//!
//! Storefront and admin-console core for the Lepix catalog shop: a persisted
//! shopping cart store and a typed client for the external catalog API that
//! owns all business data.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod observability;
pub mod prelude;
pub mod prices;
pub mod storage;
