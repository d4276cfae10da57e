//! Catalog wire records.
//!
//! Exact shapes of the external catalog API: gallery entries are
//! `{ url, sort }` objects and variant prices are raw overrides. The admin
//! console reads and writes these directly; the storefront consumes the
//! flattened models in [`crate::catalog::models`] instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A gallery entry as the API stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Absolute URL.
    pub url: String,

    /// Gallery position.
    pub sort: i32,
}

/// A product as the API returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
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
    #[serde(default)]
    pub description: Option<String>,

    /// Base price.
    pub price: Decimal,

    /// Brand display name, when the API joins it in.
    #[serde(default)]
    pub brand_name: Option<String>,

    /// Product gallery.
    #[serde(default)]
    pub images: Vec<ImageRecord>,

    /// Purchasable variants.
    #[serde(default)]
    pub variants: Vec<VariantRecord>,
}

/// A product variant as the API returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    /// Variant id.
    pub id: i64,

    /// Colour label.
    #[serde(default)]
    pub color: Option<String>,

    /// Catalog colour id.
    #[serde(default)]
    pub color_id: Option<i64>,

    /// Catalog colour display name.
    #[serde(default)]
    pub color_name: Option<String>,

    /// Size label.
    #[serde(default)]
    pub size: Option<String>,

    /// Catalog size id.
    #[serde(default)]
    pub size_id: Option<i64>,

    /// Catalog size display name.
    #[serde(default)]
    pub size_name: Option<String>,

    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,

    /// Resolved variant price, when the API sends one.
    #[serde(default)]
    pub price: Option<Decimal>,

    /// Price override; `None` means the base product price applies.
    #[serde(default)]
    pub price_override: Option<Decimal>,

    /// Whether this variant is preselected on the product page.
    #[serde(default)]
    pub is_default: bool,

    /// Variant gallery.
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

/// A category as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Category id.
    pub id: i64,

    /// Category name.
    pub name: String,

    /// URL slug.
    pub slug: String,

    /// Hero image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// A brand as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRecord {
    /// Brand id.
    pub id: i64,

    /// Brand name.
    pub name: String,

    /// URL slug.
    pub slug: String,

    /// Logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,

    /// Brand website.
    #[serde(default)]
    pub website: Option<String>,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of a media upload: the hosted URL of the stored image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedImage {
    /// Absolute URL of the uploaded image.
    pub url: String,
}

/// Admin input for creating or replacing a product.
///
/// Converted to the API payload by [`NewProduct::into_payload`], which fills
/// in the structural defaults the API insists on.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
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

    /// Product gallery.
    pub images: Vec<NewImage>,

    /// Purchasable variants.
    pub variants: Vec<NewVariant>,
}

/// Admin input for a gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    /// Absolute URL.
    pub url: String,

    /// Explicit gallery position; positional when absent.
    pub sort: Option<i32>,
}

/// Admin input for a product variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewVariant {
    /// Colour label.
    pub color: Option<String>,

    /// Size label.
    pub size: Option<String>,

    /// Stock keeping unit; sent as an empty string when absent.
    pub sku: Option<String>,

    /// Price override; `None` is sent as an explicit null.
    pub price_override: Option<Decimal>,

    /// Whether this variant is preselected on the product page.
    pub is_default: bool,

    /// Variant gallery.
    pub images: Vec<NewImage>,
}

/// Admin input for creating a brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    /// Brand name.
    pub name: String,

    /// URL slug.
    pub slug: String,

    /// Logo URL.
    pub logo_url: Option<String>,

    /// Brand website.
    pub website: Option<String>,

    /// Short description.
    pub description: Option<String>,
}

/// Admin input for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Category name.
    pub name: String,

    /// URL slug.
    pub slug: String,

    /// Hero image URL.
    pub image: Option<String>,
}

/// Wire payload for product writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
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

    /// Product gallery with resolved sort positions.
    pub images: Vec<ImageRecord>,

    /// Variants with resolved structural defaults.
    pub variants: Vec<VariantPayload>,
}

/// Wire payload for a variant write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPayload {
    /// Colour label.
    pub color: Option<String>,

    /// Size label.
    pub size: Option<String>,

    /// Stock keeping unit, empty when unknown.
    pub sku: String,

    /// Price override, null when the base price applies.
    pub price_override: Option<Decimal>,

    /// Whether this variant is preselected.
    pub is_default: bool,

    /// Variant gallery with resolved sort positions.
    pub images: Vec<ImageRecord>,
}

impl NewProduct {
    /// Resolve the structural defaults the API requires: gallery entries
    /// without an explicit position get their list index, and missing SKUs
    /// are sent as empty strings.
    #[must_use]
    pub fn into_payload(self) -> ProductPayload {
        ProductPayload {
            category_id: self.category_id,
            brand_id: self.brand_id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            price: self.price,
            images: resolve_sort_positions(self.images),
            variants: self
                .variants
                .into_iter()
                .map(|variant| VariantPayload {
                    color: variant.color,
                    size: variant.size,
                    sku: variant.sku.unwrap_or_default(),
                    price_override: variant.price_override,
                    is_default: variant.is_default,
                    images: resolve_sort_positions(variant.images),
                })
                .collect(),
        }
    }
}

fn resolve_sort_positions(images: Vec<NewImage>) -> Vec<ImageRecord> {
    images
        .into_iter()
        .enumerate()
        .map(|(index, image)| ImageRecord {
            url: image.url,
            sort: image
                .sort
                .unwrap_or_else(|| i32::try_from(index).unwrap_or(i32::MAX)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_product() -> NewProduct {
        NewProduct {
            category_id: 2,
            brand_id: 3,
            name: "Hoodie".to_string(),
            slug: "hoodie".to_string(),
            description: None,
            price: Decimal::from(100),
            images: vec![
                NewImage {
                    url: "a.png".to_string(),
                    sort: None,
                },
                NewImage {
                    url: "b.png".to_string(),
                    sort: Some(7),
                },
            ],
            variants: vec![NewVariant {
                color: Some("Black".to_string()),
                ..NewVariant::default()
            }],
        }
    }

    #[test]
    fn missing_sort_positions_become_positional() {
        let payload = test_product().into_payload();

        let sorts: Vec<i32> = payload.images.iter().map(|image| image.sort).collect();

        assert_eq!(sorts, vec![0, 7]);
    }

    #[test]
    fn missing_sku_is_sent_as_empty_string() {
        let payload = test_product().into_payload();

        assert_eq!(
            payload.variants.first().map(|variant| variant.sku.clone()),
            Some(String::new())
        );
    }

    #[test]
    fn missing_price_override_serializes_as_null() -> TestResult {
        let payload = test_product().into_payload();
        let json = serde_json::to_value(&payload)?;

        assert_eq!(
            json.pointer("/variants/0/priceOverride"),
            Some(&serde_json::Value::Null)
        );

        Ok(())
    }

    #[test]
    fn product_record_tolerates_missing_collections() -> TestResult {
        let record: ProductRecord = serde_json::from_str(
            r#"{"id":1,"categoryId":2,"brandId":3,"name":"Hoodie","slug":"hoodie","price":100.0}"#,
        )?;

        assert!(record.images.is_empty());
        assert!(record.variants.is_empty());
        assert_eq!(record.brand_name, None);

        Ok(())
    }
}
