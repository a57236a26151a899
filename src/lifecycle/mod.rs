//! Runtime lifecycle: starting the engine, wiring its store, shutting down.

pub mod system;
pub mod tracing;

pub use system::InventorySystem;
pub use tracing::setup_tracing;
