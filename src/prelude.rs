//! Lepix prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddToCart, CartLine, CartStore, ImageRef, LineId, ProductSnapshot},
    catalog::{
        CatalogClient, CatalogConfig, CatalogError, Product, Variant, VariantSelection,
    },
    checkout::{ContactDetails, OrderConfirmation, submit_order},
    prices::{format_price, format_price_in},
    storage::{
        CART_STORAGE_KEY, CartStorage, FileCartStorage, MemoryCartStorage, PersistedCart,
        StorageError,
    },
};
