//! Cart
//!
//! The cart store and its line model: derived line identity, merge-on-add
//! quantities, immutable product snapshots and derived totals.

pub mod line;
pub mod snapshot;
pub mod store;

pub use line::{CartLine, LineId, ParseLineIdError};
pub use snapshot::{AddToCart, ImageRef, ProductSnapshot, normalize_images};
pub use store::{CartListener, CartStore};
