//! The inventory engine actor.
//!
//! `InventoryActor` owns all four collections and processes requests strictly
//! sequentially from its channel, so no operation ever observes another one
//! mid-mutation and the state needs no locking. Each mutating operation runs
//! the same machine: validate, apply in memory, persist the collections it
//! dirtied, reply. Failed validation mutates and persists nothing.
//!
//! The store adapter is injected at [`InventoryActor::run`] time rather than
//! at construction, so callers can build the actor/client pair first and
//! decide on a backend when spawning.

use crate::client::InventoryClient;
use crate::error::InventoryError;
use crate::message::InventoryRequest;
use crate::model::{
    CartLine, CustomerInfo, DonationRecord, OrderConfirmation, Product, ProductDraft, ProductId,
    WasteRecord,
};
use crate::session::Session;
use crate::state::{default_catalog, Dirty, InventoryState};
use crate::store::{CollectionKey, StoreAdapter};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The engine. Owns the state and the receiver end of the request channel.
pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    state: InventoryState,
    next_id: u64,
}

impl InventoryActor {
    /// Creates the engine and its client.
    ///
    /// `buffer_size` is the request channel capacity; senders wait when it
    /// is full.
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: InventoryState::default(),
            next_id: 1,
        };
        (actor, InventoryClient::new(sender))
    }

    /// Loads persisted state, then processes requests until every client has
    /// been dropped.
    pub async fn run<S: StoreAdapter>(mut self, mut store: S) {
        self.restore(&mut store);
        info!(
            products = self.state.catalog.len(),
            cart_lines = self.state.cart.len(),
            "inventory engine started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &mut store);
        }

        info!(products = self.state.catalog.len(), "inventory engine shut down");
    }

    /// Reconstructs the session state from the store. All four collections
    /// load together; a catalog that loads empty triggers the one-time seed.
    fn restore<S: StoreAdapter>(&mut self, store: &mut S) {
        let catalog: Vec<Product> = store.load(CollectionKey::Catalog).unwrap_or_default();
        if catalog.is_empty() {
            info!("no stored catalog, seeding defaults");
            self.state.catalog = default_catalog();
            self.persist(
                store,
                Dirty {
                    catalog: true,
                    ..Dirty::default()
                },
            );
        } else {
            self.state.catalog = catalog;
        }
        self.state.cart = store.load(CollectionKey::Cart).unwrap_or_default();
        self.state.donations = store.load(CollectionKey::DonationLog).unwrap_or_default();
        self.state.waste = store.load(CollectionKey::WasteLog).unwrap_or_default();
        self.next_id = self.state.next_id();
    }

    /// Writes every dirtied collection back to the store.
    ///
    /// A failed write is logged and swallowed: the in-memory state stays
    /// authoritative for the session, and the next save of that collection
    /// rewrites the whole value anyway.
    fn persist<S: StoreAdapter>(&self, store: &mut S, dirty: Dirty) {
        for key in dirty.keys() {
            let result = match key {
                CollectionKey::Catalog => store.save(key, &self.state.catalog),
                CollectionKey::Cart => store.save(key, &self.state.cart),
                CollectionKey::DonationLog => store.save(key, &self.state.donations),
                CollectionKey::WasteLog => store.save(key, &self.state.waste),
            };
            if let Err(e) = result {
                warn!(%key, error = %e, "failed to persist collection");
            }
        }
    }

    fn handle<S: StoreAdapter>(&mut self, msg: InventoryRequest, store: &mut S) {
        match msg {
            InventoryRequest::ListProducts { respond_to } => {
                debug!(count = self.state.catalog.len(), "list products");
                let _ = respond_to.send(Ok(self.state.catalog.clone()));
            }
            InventoryRequest::AddProduct {
                session,
                draft,
                respond_to,
            } => {
                debug!(?draft, "add product");
                let _ = respond_to.send(self.add_product(session, draft, store));
            }
            InventoryRequest::UpdateStock {
                session,
                id,
                qty,
                respond_to,
            } => {
                debug!(%id, qty, "update stock");
                let _ = respond_to.send(self.update_stock(session, id, qty, store));
            }
            InventoryRequest::DeleteProduct {
                session,
                id,
                respond_to,
            } => {
                debug!(%id, "delete product");
                let _ = respond_to.send(self.delete_product(session, id, store));
            }
            InventoryRequest::AddToCart { id, respond_to } => {
                debug!(%id, "add to cart");
                let _ = respond_to.send(self.add_to_cart(id, store));
            }
            InventoryRequest::ClearCart { respond_to } => {
                let dirty = self.state.clear_cart();
                self.persist(store, dirty);
                info!("cart cleared");
                let _ = respond_to.send(Ok(()));
            }
            InventoryRequest::Checkout {
                customer,
                respond_to,
            } => {
                debug!("checkout");
                let _ = respond_to.send(self.checkout(&customer, store));
            }
            InventoryRequest::CartSummary { respond_to } => {
                let _ = respond_to.send(Ok(self.state.cart_summary()));
            }
            InventoryRequest::RecordDonation {
                session,
                id,
                qty,
                recipient,
                respond_to,
            } => {
                debug!(%id, qty, "record donation");
                let _ = respond_to.send(self.record_donation(session, id, qty, &recipient, store));
            }
            InventoryRequest::RecordWaste {
                session,
                id,
                qty,
                reason,
                respond_to,
            } => {
                debug!(%id, qty, "record waste");
                let _ = respond_to.send(self.record_waste(session, id, qty, &reason, store));
            }
            InventoryRequest::ListDonations { respond_to } => {
                let _ = respond_to.send(Ok(self.state.donations.clone()));
            }
            InventoryRequest::ListWaste { respond_to } => {
                let _ = respond_to.send(Ok(self.state.waste.clone()));
            }
        }
    }

    fn add_product<S: StoreAdapter>(
        &mut self,
        session: Session,
        draft: ProductDraft,
        store: &mut S,
    ) -> Result<Product, InventoryError> {
        authorize(session, "add products")?;
        let id = ProductId(self.next_id);
        let (product, dirty) = self.state.add_product(id, draft)?;
        self.next_id += 1;
        self.persist(store, dirty);
        info!(%id, name = %product.name, qty = product.qty, "product added");
        Ok(product)
    }

    fn update_stock<S: StoreAdapter>(
        &mut self,
        session: Session,
        id: ProductId,
        qty: u32,
        store: &mut S,
    ) -> Result<Product, InventoryError> {
        authorize(session, "update stock")?;
        let (product, dirty) = self.state.update_stock(id, qty)?;
        self.persist(store, dirty);
        info!(%id, qty, "stock updated");
        Ok(product)
    }

    fn delete_product<S: StoreAdapter>(
        &mut self,
        session: Session,
        id: ProductId,
        store: &mut S,
    ) -> Result<Product, InventoryError> {
        authorize(session, "delete products")?;
        let (removed, dirty) = self.state.delete_product(id)?;
        self.persist(store, dirty);
        info!(%id, cart_evicted = dirty.cart, "product deleted");
        Ok(removed)
    }

    fn add_to_cart<S: StoreAdapter>(
        &mut self,
        id: ProductId,
        store: &mut S,
    ) -> Result<CartLine, InventoryError> {
        let (line, dirty) = self.state.add_to_cart(id)?;
        self.persist(store, dirty);
        info!(%id, quantity = line.quantity, "cart line updated");
        Ok(line)
    }

    fn checkout<S: StoreAdapter>(
        &mut self,
        customer: &CustomerInfo,
        store: &mut S,
    ) -> Result<OrderConfirmation, InventoryError> {
        let (confirmation, dirty) = self.state.checkout(customer)?;
        self.persist(store, dirty);
        info!(
            items = confirmation.item_count,
            total = confirmation.total,
            "order placed"
        );
        Ok(confirmation)
    }

    fn record_donation<S: StoreAdapter>(
        &mut self,
        session: Session,
        id: ProductId,
        qty: u32,
        recipient: &str,
        store: &mut S,
    ) -> Result<DonationRecord, InventoryError> {
        authorize(session, "record donations")?;
        let (record, dirty) = self.state.record_donation(id, qty, recipient)?;
        self.persist(store, dirty);
        info!(%id, qty, recipient = %record.recipient, "donation recorded");
        Ok(record)
    }

    fn record_waste<S: StoreAdapter>(
        &mut self,
        session: Session,
        id: ProductId,
        qty: u32,
        reason: &str,
        store: &mut S,
    ) -> Result<WasteRecord, InventoryError> {
        authorize(session, "record waste")?;
        let (record, dirty) = self.state.record_waste(id, qty, reason)?;
        self.persist(store, dirty);
        info!(%id, qty, reason = %record.reason, "waste recorded");
        Ok(record)
    }
}

fn authorize(session: Session, action: &'static str) -> Result<(), InventoryError> {
    if session.is_admin() {
        Ok(())
    } else {
        warn!(action, "rejected non-admin operation");
        Err(InventoryError::Unauthorized(action))
    }
}
