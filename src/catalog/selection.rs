//! Variant selection on a product page.
//!
//! Resolves a colour/size choice against a product's variants: which options
//! are offered, which variant the choice lands on, and the effective price,
//! gallery and display name for that variant. The resolved selection builds
//! the [`AddToCart`] input handed to the cart store.

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;

use crate::cart::{AddToCart, ImageRef};
use crate::catalog::models::{Product, Variant};

/// A colour/size choice against one product.
#[derive(Debug, Clone)]
pub struct VariantSelection<'a> {
    product: &'a Product,
    color: Option<String>,
    size: Option<String>,
}

impl<'a> VariantSelection<'a> {
    /// Selection with the default preselection applied: the variant flagged
    /// as default, else the first variant, else nothing.
    #[must_use]
    pub fn new(product: &'a Product) -> Self {
        let preselected = product
            .variants
            .iter()
            .find(|variant| variant.is_default)
            .or_else(|| product.variants.first());

        Self {
            product,
            color: preselected.and_then(|variant| variant.color.clone()),
            size: preselected.and_then(|variant| variant.size.clone()),
        }
    }

    /// Selection with an explicit colour/size choice.
    #[must_use]
    pub fn with_choice(product: &'a Product, color: Option<String>, size: Option<String>) -> Self {
        Self {
            product,
            color,
            size,
        }
    }

    /// Selection pinned to one variant by id, when the product has it.
    #[must_use]
    pub fn for_variant(product: &'a Product, variant_id: i64) -> Option<Self> {
        product
            .variants
            .iter()
            .find(|variant| variant.id == variant_id)
            .map(|variant| Self {
                product,
                color: variant.color.clone(),
                size: variant.size.clone(),
            })
    }

    /// Distinct colour options, in first-seen order.
    #[must_use]
    pub fn color_options(&self) -> Vec<&str> {
        distinct(self.product.variants.iter().filter_map(|variant| {
            variant.color.as_deref()
        }))
    }

    /// Distinct size options for the chosen colour, in first-seen order.
    /// Without a chosen colour, sizes across all variants.
    #[must_use]
    pub fn size_options(&self) -> Vec<&str> {
        distinct(
            self.product
                .variants
                .iter()
                .filter(|variant| self.matches_color(variant))
                .filter_map(|variant| variant.size.as_deref()),
        )
    }

    /// Choose a colour. Resets the size choice, since the sizes on offer
    /// depend on it.
    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
        self.size = None;
    }

    /// Choose a size.
    pub fn set_size(&mut self, size: Option<String>) {
        self.size = size;
    }

    /// The first variant matching the current choice, `None` when the
    /// product has no variants or nothing matches.
    #[must_use]
    pub fn selected_variant(&self) -> Option<&Variant> {
        self.product
            .variants
            .iter()
            .find(|variant| self.matches_color(variant) && self.matches_size(variant))
    }

    /// The gallery to show: the selected variant's when it has one, else
    /// the product's.
    #[must_use]
    pub fn gallery(&self) -> &[String] {
        match self.selected_variant() {
            Some(variant) if !variant.images.is_empty() => &variant.images,
            _ => &self.product.images,
        }
    }

    /// The price to show: the selected variant's effective price, else the
    /// base product price.
    #[must_use]
    pub fn display_price(&self) -> Decimal {
        self.selected_variant()
            .map_or(self.product.price, |variant| variant.price)
    }

    /// The name to show, decorated with the selected variant's attributes.
    #[must_use]
    pub fn display_name(&self) -> String {
        let Some(variant) = self.selected_variant() else {
            return self.product.name.clone();
        };

        if variant.color.is_none() && variant.size.is_none() {
            return self.product.name.clone();
        }

        [
            Some(self.product.name.as_str()),
            variant.color.as_deref(),
            variant.size.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Build the cart input for the current choice: effective price and
    /// gallery, the selected variant's identity and attributes, and the
    /// decorated display name.
    #[must_use]
    pub fn to_add_to_cart(&self) -> AddToCart {
        let variant = self.selected_variant();

        let mut input = AddToCart::new(self.product.id, &self.product.name, self.display_price());

        input.images = self
            .gallery()
            .iter()
            .cloned()
            .map(ImageRef::Url)
            .collect();
        input.variant_id = variant.map(|variant| variant.id);
        input.sku = variant.and_then(|variant| variant.sku.clone());
        input.color = variant.and_then(|variant| variant.color.clone());
        input.color_id = variant.and_then(|variant| variant.color_id);
        input.color_name = variant.and_then(|variant| variant.color_name.clone());
        input.size = variant.and_then(|variant| variant.size.clone());
        input.size_id = variant.and_then(|variant| variant.size_id);
        input.size_name = variant.and_then(|variant| variant.size_name.clone());
        input.display_name = Some(self.display_name());

        input
    }

    fn matches_color(&self, variant: &Variant) -> bool {
        self.color
            .as_deref()
            .is_none_or(|color| variant.color.as_deref() == Some(color))
    }

    fn matches_size(&self, variant: &Variant) -> bool {
        self.size
            .as_deref()
            .is_none_or(|size| variant.size.as_deref() == Some(size))
    }
}

fn distinct<'v>(values: impl Iterator<Item = &'v str>) -> Vec<&'v str> {
    let mut seen = FxHashSet::default();

    values.filter(|value| seen.insert(*value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: i64, color: Option<&str>, size: Option<&str>, price: i64) -> Variant {
        Variant {
            id,
            color: color.map(ToString::to_string),
            color_id: None,
            color_name: None,
            size: size.map(ToString::to_string),
            size_id: None,
            size_name: None,
            sku: Some(format!("SKU-{id}")),
            price: Decimal::from(price),
            is_default: false,
            images: Vec::new(),
        }
    }

    fn hoodie() -> Product {
        Product {
            id: 1,
            category_id: 2,
            brand_id: 3,
            name: "Hoodie".to_string(),
            slug: "hoodie".to_string(),
            description: None,
            price: Decimal::from(100),
            brand_name: None,
            images: vec!["base.png".to_string()],
            variants: vec![
                variant(10, Some("Black"), Some("M"), 120),
                variant(11, Some("Black"), Some("L"), 120),
                variant(12, Some("Red"), Some("M"), 110),
            ],
        }
    }

    fn plain_mug() -> Product {
        Product {
            id: 2,
            category_id: 2,
            brand_id: 3,
            name: "Mug".to_string(),
            slug: "mug".to_string(),
            description: None,
            price: Decimal::from(50),
            brand_name: None,
            images: vec!["mug.png".to_string()],
            variants: Vec::new(),
        }
    }

    #[test]
    fn default_preselection_prefers_flagged_variant() {
        let mut product = hoodie();
        if let Some(red) = product.variants.last_mut() {
            red.is_default = true;
        }

        let selection = VariantSelection::new(&product);

        assert_eq!(selection.selected_variant().map(|variant| variant.id), Some(12));
    }

    #[test]
    fn default_preselection_falls_back_to_first_variant() {
        let product = hoodie();
        let selection = VariantSelection::new(&product);

        assert_eq!(selection.selected_variant().map(|variant| variant.id), Some(10));
    }

    #[test]
    fn color_options_are_distinct_in_first_seen_order() {
        let product = hoodie();
        let selection = VariantSelection::with_choice(&product, None, None);

        assert_eq!(selection.color_options(), vec!["Black", "Red"]);
    }

    #[test]
    fn size_options_follow_the_chosen_color() {
        let product = hoodie();
        let mut selection = VariantSelection::with_choice(&product, None, None);

        selection.set_color(Some("Red".to_string()));

        assert_eq!(selection.size_options(), vec!["M"]);
    }

    #[test]
    fn choosing_a_color_resets_the_size() {
        let product = hoodie();
        let mut selection =
            VariantSelection::with_choice(&product, Some("Black".to_string()), Some("L".to_string()));

        selection.set_color(Some("Red".to_string()));

        assert_eq!(selection.selected_variant().map(|variant| variant.id), Some(12));
    }

    #[test]
    fn display_price_uses_the_selected_variant() {
        let product = hoodie();
        let selection =
            VariantSelection::with_choice(&product, Some("Red".to_string()), None);

        assert_eq!(selection.display_price(), Decimal::from(110));
    }

    #[test]
    fn plain_product_uses_base_price_and_gallery() {
        let product = plain_mug();
        let selection = VariantSelection::new(&product);

        assert_eq!(selection.selected_variant(), None);
        assert_eq!(selection.display_price(), Decimal::from(50));
        assert_eq!(selection.gallery(), ["mug.png".to_string()]);
        assert_eq!(selection.display_name(), "Mug");
    }

    #[test]
    fn variant_gallery_wins_when_present() {
        let mut product = hoodie();
        if let Some(first) = product.variants.first_mut() {
            first.images = vec!["black-m.png".to_string()];
        }

        let selection = VariantSelection::with_choice(
            &product,
            Some("Black".to_string()),
            Some("M".to_string()),
        );

        assert_eq!(selection.gallery(), ["black-m.png".to_string()]);
    }

    #[test]
    fn empty_variant_gallery_falls_back_to_product() {
        let product = hoodie();
        let selection = VariantSelection::with_choice(
            &product,
            Some("Black".to_string()),
            Some("M".to_string()),
        );

        assert_eq!(selection.gallery(), ["base.png".to_string()]);
    }

    #[test]
    fn for_variant_pins_the_choice() {
        let product = hoodie();
        let selection = VariantSelection::for_variant(&product, 11);

        assert_eq!(
            selection
                .as_ref()
                .and_then(VariantSelection::selected_variant)
                .map(|variant| variant.id),
            Some(11)
        );
        assert!(VariantSelection::for_variant(&product, 99).is_none());
    }

    #[test]
    fn add_to_cart_carries_the_resolved_variant() {
        let product = hoodie();
        let selection = VariantSelection::with_choice(
            &product,
            Some("Black".to_string()),
            Some("L".to_string()),
        );

        let input = selection.to_add_to_cart();

        assert_eq!(input.id, 1);
        assert_eq!(input.variant_id, Some(11));
        assert_eq!(input.sku, Some("SKU-11".to_string()));
        assert_eq!(input.price, Decimal::from(120));
        assert_eq!(input.display_name, Some("Hoodie Black L".to_string()));
    }

    #[test]
    fn add_to_cart_for_plain_product_has_no_variant() {
        let product = plain_mug();
        let input = VariantSelection::new(&product).to_add_to_cart();

        assert_eq!(input.variant_id, None);
        assert_eq!(input.sku, None);
        assert_eq!(input.display_name, Some("Mug".to_string()));
    }
}
