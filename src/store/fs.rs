//! File-backed store adapter: one JSON file per collection key.

use super::{CollectionKey, StoreAdapter, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Persists each collection as `<dir>/<key>.json`, replacing the whole file
/// on every save.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: CollectionKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StoreAdapter for JsonFileStore {
    fn save<T: Serialize>(&mut self, key: CollectionKey, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|source| StoreError::Serialize { key, source })?;
        std::fs::write(self.path(key), json).map_err(|source| StoreError::Write { key, source })
    }

    fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Option<Vec<T>> {
        let bytes = match std::fs::read(self.path(key)) {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!(%key, error = %e, "failed to read stored collection");
                }
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(records) => Some(records),
            Err(e) => {
                // Treat unreadable data as absent so the engine can recover
                // with an empty collection instead of refusing to start.
                warn!(%key, error = %e, "stored collection is unreadable, treating as absent");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};

    fn muffin(id: u64, qty: u32) -> Product {
        Product {
            id: ProductId(id),
            name: "Muffin".to_string(),
            category: Some("Pastry".to_string()),
            price: 50.0,
            qty,
            expiry: None,
            image: "muffin.jpg".to_string(),
            desc: None,
        }
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        let products = vec![muffin(1, 10), muffin(2, 0), muffin(3, 7)];
        store.save(CollectionKey::Catalog, &products).unwrap();

        let loaded: Vec<Product> = store.load(CollectionKey::Catalog).unwrap();
        assert_eq!(loaded, products);
    }

    #[test]
    fn save_replaces_the_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        store
            .save(CollectionKey::Catalog, &[muffin(1, 10), muffin(2, 5)])
            .unwrap();
        store.save(CollectionKey::Catalog, &[muffin(3, 1)]).unwrap();

        let loaded: Vec<Product> = store.load(CollectionKey::Catalog).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, ProductId(3));
    }

    #[test]
    fn missing_key_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.load::<Product>(CollectionKey::Cart).is_none());
    }

    #[test]
    fn corrupt_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("catalog.json"), "not json {{{").unwrap();
        assert!(store.load::<Product>(CollectionKey::Catalog).is_none());
    }
}
