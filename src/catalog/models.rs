//! Storefront catalog models.
//!
//! The flattened shapes the shop views consume: galleries are plain URL
//! lists and every variant carries its effective price, resolved from the
//! override against the base product price at mapping time.

use rust_decimal::Decimal;

use crate::catalog::records::{ImageRecord, ProductRecord, VariantRecord};

/// A product ready for storefront display.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id.
    pub id: i64,

    /// Owning category.
    pub category_id: i64,

    /// Owning brand.
    pub brand_id: i64,

    /// Product name.
    pub name: String,

    /// URL slug.
    pub slug: String,

    /// Long-form description.
    pub description: Option<String>,

    /// Base price.
    pub price: Decimal,

    /// Brand display name, when the API joins it in.
    pub brand_name: Option<String>,

    /// Product gallery, flattened to URLs.
    pub images: Vec<String>,

    /// Purchasable variants with effective prices.
    pub variants: Vec<Variant>,
}

/// A purchasable variant with its pricing resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    /// Variant id.
    pub id: i64,

    /// Colour label.
    pub color: Option<String>,

    /// Catalog colour id.
    pub color_id: Option<i64>,

    /// Catalog colour display name.
    pub color_name: Option<String>,

    /// Size label.
    pub size: Option<String>,

    /// Catalog size id.
    pub size_id: Option<i64>,

    /// Catalog size display name.
    pub size_name: Option<String>,

    /// Stock keeping unit.
    pub sku: Option<String>,

    /// Effective unit price: the API's resolved price, else the override,
    /// else the base product price.
    pub price: Decimal,

    /// Whether this variant is preselected on the product page.
    pub is_default: bool,

    /// Variant gallery, flattened to URLs.
    pub images: Vec<String>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let base_price = record.price;

        Self {
            id: record.id,
            category_id: record.category_id,
            brand_id: record.brand_id,
            name: record.name,
            slug: record.slug,
            description: record.description,
            price: base_price,
            brand_name: record.brand_name,
            images: flatten_gallery(record.images),
            variants: record
                .variants
                .into_iter()
                .map(|variant| Variant::resolve(variant, base_price))
                .collect(),
        }
    }
}

impl Variant {
    fn resolve(record: VariantRecord, base_price: Decimal) -> Self {
        Self {
            id: record.id,
            color: record.color,
            color_id: record.color_id,
            color_name: record.color_name,
            size: record.size,
            size_id: record.size_id,
            size_name: record.size_name,
            sku: record.sku,
            price: record
                .price
                .or(record.price_override)
                .unwrap_or(base_price),
            is_default: record.is_default,
            images: flatten_gallery(record.images),
        }
    }
}

fn flatten_gallery(images: Vec<ImageRecord>) -> Vec<String> {
    images.into_iter().map(|image| image.url).collect()
}
