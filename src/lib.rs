//! # Bakehouse Ledger
//!
//! An inventory and cart consistency engine for a small storefront. It tracks
//! a product catalog with stock levels, a shopping cart, and two append-only
//! disposition logs (donations and waste), and keeps all of it durable across
//! sessions through a pluggable whole-collection store.
//!
//! ## Architecture
//!
//! The core is a single actor, [`InventoryActor`], that owns the four
//! collections and processes typed requests sequentially from a Tokio
//! channel. Sequential processing is the whole concurrency story: no locks,
//! no partially observed mutations, every operation all-or-nothing at its own
//! granularity. UI collaborators talk to it through the cloneable async
//! [`InventoryClient`] and hold no state of their own.
//!
//! Every mutating operation follows the same machine:
//!
//! ```text
//! validate -> apply in memory -> persist dirtied collections -> reply
//! ```
//!
//! The stock rules live in [`state::InventoryState`]: stock never goes
//! negative, a cart line never exceeds live stock at add time, cart
//! reservations are advisory (deduction happens at checkout, clamped against
//! whatever stock is actually left), and deleting a product evicts its cart
//! line.
//!
//! ## Quick start
//!
//! ```rust
//! use bakehouse_ledger::lifecycle::InventorySystem;
//! use bakehouse_ledger::store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = InventorySystem::start(MemoryStore::new());
//!
//!     // An empty store seeds the default catalog.
//!     let products = system.client.list_products().await?;
//!     let line = system.client.add_to_cart(products[0].id).await?;
//!     assert_eq!(line.quantity, 1);
//!
//!     system.shutdown().await.map_err(std::io::Error::other)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Persistence
//!
//! Each collection persists independently under a logical key through the
//! [`store::StoreAdapter`] trait: [`store::JsonFileStore`] for real use,
//! [`store::MemoryStore`] for tests. Saves replace the whole collection;
//! corrupt stored data is recovered as absent, never a hard failure. There
//! are no transactions across keys, and concurrent processes sharing a store
//! are last-writer-wins per collection.

pub mod client;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod model;
pub mod session;
pub mod state;
pub mod store;

pub use client::InventoryClient;
pub use engine::InventoryActor;
pub use error::InventoryError;
pub use lifecycle::InventorySystem;
pub use session::Session;
