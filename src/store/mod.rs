//! Durable whole-collection persistence.
//!
//! The engine persists each logical collection independently under a
//! [`CollectionKey`]. Saves always replace the entire collection; there are no
//! partial or merge writes, and no transactions across keys. A crash between
//! two saves can leave collections mutually inconsistent, which the engine
//! accepts as a known limitation of the model.
//!
//! Two adapters ship with the crate:
//! - [`JsonFileStore`] writes one JSON file per key under a data directory.
//! - [`MemoryStore`] keeps serialized collections in a map, for tests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

pub mod fs;
pub mod memory;

pub use fs::JsonFileStore;
pub use memory::MemoryStore;

/// Logical name of one independently persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Catalog,
    Cart,
    DonationLog,
    WasteLog,
}

impl CollectionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKey::Catalog => "catalog",
            CollectionKey::Cart => "cart",
            CollectionKey::DonationLog => "donation_log",
            CollectionKey::WasteLog => "waste_log",
        }
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the durable write path. Read-side corruption is not an error:
/// it is recovered inside [`StoreAdapter::load`] by returning `None`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {key}: {source}")]
    Write {
        key: CollectionKey,
        source: std::io::Error,
    },
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: CollectionKey,
        source: serde_json::Error,
    },
}

/// Durable key/value read-write of whole JSON-serializable collections.
pub trait StoreAdapter: Send + 'static {
    /// Serializes the full collection and writes it under `key`, replacing
    /// any prior value.
    fn save<T: Serialize>(&mut self, key: CollectionKey, records: &[T]) -> Result<(), StoreError>;

    /// Returns the previously saved collection, or `None` if the key was
    /// never written or the stored bytes fail to deserialize. Corrupt or
    /// foreign data must never crash the caller; adapters log it and fall
    /// back to absent so the engine can seed defaults.
    fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Option<Vec<T>>;
}
