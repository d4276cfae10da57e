//! Cart store: single source of truth for cart contents.

use std::fmt;

use rust_decimal::Decimal;

use crate::cart::{AddToCart, CartLine, LineId};
use crate::storage::{CartStorage, PersistedCart, StorageError};

/// Callback invoked with the full line list after every mutation.
pub type CartListener = Box<dyn Fn(&[CartLine])>;

/// Owns the cart line list and guarantees its invariants: line identity is
/// derived from `(product, variant)`, repeated adds merge quantities into the
/// existing line, and quantities never drop below one.
///
/// State changes are applied synchronously in memory and then flushed to the
/// storage backend best-effort; a failed flush is logged and the in-memory
/// state stays authoritative. Consumers read lines via [`CartStore::items`]
/// and must treat them as read-only.
pub struct CartStore {
    items: Vec<CartLine>,
    storage: Box<dyn CartStorage>,
    listeners: Vec<CartListener>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Open a store over the given backend, resuming any state persisted
    /// under the current storage key. First open starts empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisted state exists but cannot be
    /// read.
    pub fn open(storage: Box<dyn CartStorage>) -> Result<Self, StorageError> {
        let items = storage.load()?.map(|cart| cart.items).unwrap_or_default();

        Ok(Self {
            items,
            storage,
            listeners: Vec::new(),
        })
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// When a line with the same `(product, variant)` identity already
    /// exists, its quantity is incremented and its stored snapshot is kept
    /// untouched: the first snapshot sticks, price or image drift after the
    /// first add is not reconciled. Otherwise a new line is appended in
    /// insertion order. A zero quantity counts as one.
    pub fn add(&mut self, product: AddToCart, quantity: u32) {
        let line_id = LineId::new(product.id, product.variant_id);
        let quantity = quantity.max(1);

        if let Some(line) = self.items.iter_mut().find(|line| line.line_id == line_id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLine {
                line_id,
                product: product.into_snapshot(),
                quantity,
            });
        }

        tracing::debug!(%line_id, quantity, "added to cart");

        self.flush();
        self.notify();
    }

    /// Add a single unit of a product to the cart.
    pub fn add_one(&mut self, product: AddToCart) {
        self.add(product, 1);
    }

    /// Delete the line with the given identity. No-op when absent.
    pub fn remove(&mut self, line_id: &LineId) {
        let before = self.items.len();
        self.items.retain(|line| line.line_id != *line_id);

        if self.items.len() != before {
            self.flush();
            self.notify();
        }
    }

    /// Set the quantity of an existing line, clamped to at least one. No-op
    /// when the line is absent.
    pub fn set_qty(&mut self, line_id: &LineId, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(line) = self.items.iter_mut().find(|line| line.line_id == *line_id) {
            line.quantity = quantity;
            self.flush();
            self.notify();
        }
    }

    /// Empty the cart. Called after a successful checkout submission.
    pub fn clear(&mut self) {
        self.items.clear();
        self.flush();
        self.notify();
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Sum of quantities across all lines. Recomputed on demand.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `quantity × unit price` across all lines. Recomputed on
    /// demand.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(CartLine::line_total).sum()
    }

    /// Register a listener invoked with the post-mutation line list after
    /// every state change.
    pub fn subscribe(&mut self, listener: impl Fn(&[CartLine]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn flush(&self) {
        let state = PersistedCart {
            items: self.items.clone(),
        };

        if let Err(error) = self.storage.save(&state) {
            tracing::warn!(%error, "failed to persist cart state");
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.items);
        }
    }
}
