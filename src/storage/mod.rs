//! Cart persistence.
//!
//! The cart survives process restarts as a single JSON document saved under a
//! versioned storage key. Bumping the key is the migration strategy: the
//! prior `"lepix-cart"` layout keyed lines by product id alone (no variant
//! support), and its data is abandoned rather than transformed, so an upgrade
//! silently starts with an empty cart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::CartLine;

pub mod file;
pub mod memory;

pub use file::FileCartStorage;
pub use memory::MemoryCartStorage;

/// Storage key for the current persisted cart layout.
pub const CART_STORAGE_KEY: &str = "lepix-cart-v2";

/// The persisted cart document: the full line list under a single key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedCart {
    /// Cart lines in insertion order.
    pub items: Vec<CartLine>,
}

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage io error")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be encoded or decoded.
    #[error("malformed cart document")]
    Document(#[from] serde_json::Error),

    /// The backend itself is unusable.
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// A backend that can load and save the persisted cart document.
pub trait CartStorage {
    /// Load the persisted cart, or `None` when nothing has been saved yet
    /// under the current storage key.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if existing state cannot be read or
    /// decoded.
    fn load(&self) -> Result<Option<PersistedCart>, StorageError>;

    /// Save the full cart document, replacing any previous state.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the document cannot be encoded or
    /// written.
    fn save(&self, cart: &PersistedCart) -> Result<(), StorageError>;
}
