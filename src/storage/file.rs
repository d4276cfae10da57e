//! File-backed cart storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{CART_STORAGE_KEY, CartStorage, PersistedCart, StorageError};

/// Stores the cart document as `<dir>/<storage key>.json`.
///
/// Because the file is named after the versioned storage key, documents
/// written under an older key are simply never read.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    /// Storage rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{CART_STORAGE_KEY}.json")),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> Result<Option<PersistedCart>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&self, cart: &PersistedCart) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_vec_pretty(cart)?)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::cart::{AddToCart, CartLine, LineId};

    use super::*;

    fn test_line() -> CartLine {
        CartLine {
            line_id: LineId::new(1, None),
            product: AddToCart::new(1, "Hoodie", Decimal::from(100)).into_snapshot(),
            quantity: 2,
        }
    }

    #[test]
    fn load_before_first_save_is_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileCartStorage::new(dir.path());

        assert_eq!(storage.load()?, None);

        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileCartStorage::new(dir.path());

        let cart = PersistedCart {
            items: vec![test_line()],
        };

        storage.save(&cart)?;

        assert_eq!(storage.load()?, Some(cart));

        Ok(())
    }

    #[test]
    fn document_is_named_after_versioned_key() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileCartStorage::new(dir.path());

        assert_eq!(
            storage.path(),
            dir.path().join("lepix-cart-v2.json").as_path()
        );

        Ok(())
    }

    #[test]
    fn old_key_document_is_ignored() -> TestResult {
        let dir = tempfile::tempdir()?;

        // A document from the pre-variant layout, under the old key.
        fs::write(dir.path().join("lepix-cart.json"), b"{\"items\":[{}]}")?;

        let storage = FileCartStorage::new(dir.path());

        assert_eq!(storage.load()?, None);

        Ok(())
    }

    #[test]
    fn corrupt_document_errors() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("lepix-cart-v2.json"), b"not json")?;

        let storage = FileCartStorage::new(dir.path());
        let result = storage.load();

        assert!(
            matches!(result, Err(StorageError::Document(_))),
            "expected Document error, got {result:?}"
        );

        Ok(())
    }
}
