//! In-memory store adapter for tests: same contract as the file store,
//! without touching the filesystem.

use super::{CollectionKey, StoreAdapter, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Keeps each collection as a serialized JSON string keyed by collection
/// name, mirroring what [`super::JsonFileStore`] writes to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<CollectionKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds raw bytes under a key, bypassing serialization. Used by tests to
    /// simulate corrupt or foreign stored data.
    pub fn put_raw(&mut self, key: CollectionKey, raw: impl Into<String>) {
        self.collections.insert(key, raw.into());
    }
}

impl StoreAdapter for MemoryStore {
    fn save<T: Serialize>(&mut self, key: CollectionKey, records: &[T]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(records).map_err(|source| StoreError::Serialize { key, source })?;
        self.collections.insert(key, json);
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Option<Vec<T>> {
        let json = self.collections.get(&key)?;
        match serde_json::from_str(json) {
            Ok(records) => Some(records),
            Err(e) => {
                warn!(%key, error = %e, "stored collection is unreadable, treating as absent");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartLine, ProductId};

    #[test]
    fn round_trips_a_cart() {
        let mut store = MemoryStore::new();
        let cart = vec![CartLine {
            id: ProductId(7),
            name: "Banana Bread".to_string(),
            price: 100.0,
            image: "banana.jpg".to_string(),
            quantity: 2,
        }];
        store.save(CollectionKey::Cart, &cart).unwrap();

        let loaded: Vec<CartLine> = store.load(CollectionKey::Cart).unwrap();
        assert_eq!(loaded, cart);
    }

    #[test]
    fn corrupt_entry_loads_as_absent() {
        let mut store = MemoryStore::new();
        store.put_raw(CollectionKey::Catalog, "[{\"id\": \"oops\"");
        assert!(store.load::<CartLine>(CollectionKey::Catalog).is_none());
    }
}
