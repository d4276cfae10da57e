//! Cart line identity and line items.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::cart::snapshot::ProductSnapshot;

/// Sentinel variant id meaning "no variant selected".
const NO_VARIANT: i64 = 0;

/// Composite identity of a cart line: product id plus variant id.
///
/// Two adds of the same `(product, variant)` pair collapse into a single
/// line. Plain products without variants use the sentinel variant id `0`, so
/// they still get a deterministic key distinct from any real variant id.
///
/// Displays and persists as `"{product}:{variant}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId {
    product: i64,
    variant: i64,
}

impl LineId {
    /// Derive a line id from a product id and an optional variant id.
    #[must_use]
    pub fn new(product: i64, variant: Option<i64>) -> Self {
        Self {
            product,
            variant: variant.unwrap_or(NO_VARIANT),
        }
    }

    /// The product id component.
    #[must_use]
    pub fn product(&self) -> i64 {
        self.product
    }

    /// The variant id component, `None` when the line has no variant.
    #[must_use]
    pub fn variant(&self) -> Option<i64> {
        (self.variant != NO_VARIANT).then_some(self.variant)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.product, self.variant)
    }
}

/// Error parsing a [`LineId`] from its `"{product}:{variant}"` form.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid line id {0:?}; expected \"product:variant\"")]
pub struct ParseLineIdError(pub String);

impl FromStr for LineId {
    type Err = ParseLineIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseLineIdError(s.to_string());

        let (product, variant) = s.split_once(':').ok_or_else(invalid)?;

        Ok(Self {
            product: product.parse().map_err(|_| invalid())?,
            variant: variant.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for LineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LineId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(de::Error::custom)
    }
}

/// One row in the cart: a product snapshot and its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Derived identity; unique per `(product, variant)` pair.
    pub line_id: LineId,

    /// Snapshot of the product as it was when first added.
    pub product: ProductSnapshot,

    /// Units of this line. Never zero.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: `quantity × unit price`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.product.price
    }
}
