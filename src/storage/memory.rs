//! In-memory cart storage for tests and ephemeral sessions.

use std::sync::{Arc, RwLock};

use super::{CartStorage, PersistedCart, StorageError};

/// Keeps the persisted document in memory. Clone-friendly via `Arc`, so a
/// test can hold a handle onto the same state a store writes through.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    saved: Arc<RwLock<Option<PersistedCart>>>,
}

impl MemoryCartStorage {
    /// A new, empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved document, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError::Backend`] if the backing lock is poisoned.
    pub fn saved(&self) -> Result<Option<PersistedCart>, StorageError> {
        Ok(self
            .saved
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?
            .clone())
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Option<PersistedCart>, StorageError> {
        self.saved()
    }

    fn save(&self, cart: &PersistedCart) -> Result<(), StorageError> {
        *self
            .saved
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))? = Some(cart.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn load_before_first_save_is_none() -> TestResult {
        let storage = MemoryCartStorage::new();

        assert_eq!(storage.load()?, None);

        Ok(())
    }

    #[test]
    fn clone_shares_state() -> TestResult {
        let storage = MemoryCartStorage::new();
        let handle = storage.clone();

        storage.save(&PersistedCart::default())?;

        assert_eq!(handle.saved()?, Some(PersistedCart::default()));

        Ok(())
    }
}
