//! Catalog
//!
//! Typed boundary over the external catalog API: wire records, flattened
//! storefront models, the HTTP client and variant selection.

pub mod client;
pub mod models;
pub mod records;
pub mod selection;

pub use client::{CatalogClient, CatalogConfig, CatalogError};
pub use models::{Product, Variant};
pub use records::{
    BrandRecord, CategoryRecord, ImageRecord, NewBrand, NewCategory, NewImage, NewProduct,
    NewVariant, ProductRecord, UploadedImage, VariantRecord,
};
pub use selection::VariantSelection;
