use crate::client::InventoryClient;
use crate::engine::InventoryActor;
use crate::store::StoreAdapter;
use tracing::{error, info};

/// Runtime orchestrator for the inventory engine.
///
/// Spawns the engine actor in its own task with the chosen store backend and
/// hands out the client. Shutdown works by closing the request channel: drop
/// the client, wait for the engine task to drain and exit.
///
/// # Example
///
/// ```ignore
/// let store = JsonFileStore::open("./data")?;
/// let system = InventorySystem::start(store);
///
/// let products = system.client.list_products().await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for the running engine. Clone freely; every clone keeps the
    /// engine alive.
    pub client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the engine with the given store backend.
    pub fn start<S: StoreAdapter>(store: S) -> Self {
        let (actor, client) = InventoryActor::new(32);
        let handle = tokio::spawn(actor.run(store));
        Self { client, handle }
    }

    /// Gracefully shuts the engine down.
    ///
    /// Dropping the client closes the request channel; the engine finishes
    /// whatever is queued and exits its loop. Outstanding client clones held
    /// elsewhere delay this until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("shutting down inventory system");
        drop(self.client);
        if let Err(e) = self.handle.await {
            error!("engine task failed: {e:?}");
            return Err(format!("engine task failed: {e:?}"));
        }
        info!("shutdown complete");
        Ok(())
    }
}
