//! Product snapshots captured at add-time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Denormalized subset of a catalog product, captured when a line is first
/// added. Later catalog changes do not retroactively change lines already in
/// the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    /// Catalog product id.
    pub id: i64,

    /// Display name, decorated with variant attributes when present.
    pub name: String,

    /// Effective unit price: the variant override if one was selected, else
    /// the base product price.
    pub price: Decimal,

    /// Ordered gallery of absolute image URLs, variant gallery preferred
    /// over product gallery.
    #[serde(default)]
    pub images: Vec<String>,

    /// Stock keeping unit, when known.
    #[serde(default)]
    pub sku: Option<String>,

    /// Selected variant id; `None` for plain products.
    #[serde(default)]
    pub variant_id: Option<i64>,

    /// Variant colour label.
    #[serde(default)]
    pub color: Option<String>,

    /// Catalog colour id.
    #[serde(default)]
    pub color_id: Option<i64>,

    /// Catalog colour display name.
    #[serde(default)]
    pub color_name: Option<String>,

    /// Variant size label.
    #[serde(default)]
    pub size: Option<String>,

    /// Catalog size id.
    #[serde(default)]
    pub size_id: Option<i64>,

    /// Catalog size display name.
    #[serde(default)]
    pub size_name: Option<String>,
}

/// An image reference as catalog callers supply it: either a bare URL or a
/// `{ url, sort }` gallery entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// A plain absolute URL.
    Url(String),

    /// A gallery entry with an explicit sort position.
    Sorted {
        /// Absolute URL.
        url: String,
        /// Gallery position.
        sort: i32,
    },
}

impl ImageRef {
    fn into_url(self) -> String {
        match self {
            Self::Url(url) | Self::Sorted { url, .. } => url,
        }
    }
}

/// Input to [`crate::cart::CartStore::add`].
///
/// The caller has already resolved variant selection: `price` is the
/// effective unit price and `images` the effective gallery. Optional fields
/// default to absent and land as `None` in the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCart {
    /// Catalog product id.
    pub id: i64,

    /// Base product name.
    pub name: String,

    /// Effective unit price.
    pub price: Decimal,

    /// Selected variant id, when one was chosen.
    pub variant_id: Option<i64>,

    /// Effective gallery, in either bare-URL or `{ url, sort }` form.
    pub images: Vec<ImageRef>,

    /// Stock keeping unit.
    pub sku: Option<String>,

    /// Variant colour label.
    pub color: Option<String>,

    /// Catalog colour id.
    pub color_id: Option<i64>,

    /// Catalog colour display name.
    pub color_name: Option<String>,

    /// Variant size label.
    pub size: Option<String>,

    /// Catalog size id.
    pub size_id: Option<i64>,

    /// Catalog size display name.
    pub size_name: Option<String>,

    /// Precomputed display name; when absent the snapshot name is built from
    /// the base name plus any colour/size text.
    pub display_name: Option<String>,
}

impl AddToCart {
    /// A plain add input with every optional field absent.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            variant_id: None,
            images: Vec::new(),
            sku: None,
            color: None,
            color_id: None,
            color_name: None,
            size: None,
            size_id: None,
            size_name: None,
            display_name: None,
        }
    }

    /// Build the immutable snapshot stored on the cart line.
    pub(crate) fn into_snapshot(self) -> ProductSnapshot {
        let name = match self.display_name {
            Some(display_name) => display_name,
            None => decorated_name(&self.name, self.color.as_deref(), self.size.as_deref()),
        };

        ProductSnapshot {
            id: self.id,
            name,
            price: self.price,
            images: normalize_images(self.images),
            sku: self.sku,
            variant_id: self.variant_id,
            color: self.color,
            color_id: self.color_id,
            color_name: self.color_name,
            size: self.size,
            size_id: self.size_id,
            size_name: self.size_name,
        }
    }
}

/// Flatten a gallery to plain URL strings, dropping empty entries.
#[must_use]
pub fn normalize_images(images: Vec<ImageRef>) -> Vec<String> {
    images
        .into_iter()
        .map(ImageRef::into_url)
        .filter(|url| !url.is_empty())
        .collect()
}

/// Decorate a base name with colour/size text, e.g. `"Name Color Size"`.
fn decorated_name(name: &str, color: Option<&str>, size: Option<&str>) -> String {
    [Some(name), color, size]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
