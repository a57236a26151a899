//! The UI collaborator's handle on the engine.
//!
//! `InventoryClient` holds only the sender half of the request channel, so it
//! is cheap to clone and share across tasks. Every method forwards one request
//! and awaits the engine's typed reply; the UI keeps no copy of the state and
//! re-queries the engine whenever it renders.

use crate::error::InventoryError;
use crate::message::{InventoryRequest, Reply};
use crate::model::{
    CartLine, CartSummary, CustomerInfo, DonationRecord, OrderConfirmation, Product, ProductDraft,
    ProductId, WasteRecord,
};
use crate::session::Session;
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

/// A cloneable, type-safe client for the inventory engine.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub(crate) fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Reply<T>) -> InventoryRequest,
    ) -> Result<T, InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| InventoryError::EngineClosed)?;
        response.await.map_err(|_| InventoryError::EngineDropped)?
    }

    /// Current catalog, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        self.request(|respond_to| InventoryRequest::ListProducts { respond_to })
            .await
    }

    /// Adds a product to the catalog. Admin only.
    #[instrument(skip(self, draft))]
    pub async fn add_product(
        &self,
        session: Session,
        draft: ProductDraft,
    ) -> Result<Product, InventoryError> {
        self.request(|respond_to| InventoryRequest::AddProduct {
            session,
            draft,
            respond_to,
        })
        .await
    }

    /// Sets a product's stock to an absolute quantity. Admin only.
    #[instrument(skip(self))]
    pub async fn update_stock(
        &self,
        session: Session,
        id: ProductId,
        qty: u32,
    ) -> Result<Product, InventoryError> {
        self.request(|respond_to| InventoryRequest::UpdateStock {
            session,
            id,
            qty,
            respond_to,
        })
        .await
    }

    /// Deletes a product, evicting any cart line that references it. Admin
    /// only. Returns the removed product.
    #[instrument(skip(self))]
    pub async fn delete_product(
        &self,
        session: Session,
        id: ProductId,
    ) -> Result<Product, InventoryError> {
        self.request(|respond_to| InventoryRequest::DeleteProduct {
            session,
            id,
            respond_to,
        })
        .await
    }

    /// Adds one unit of the product to the cart, bounded by live stock.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: ProductId) -> Result<CartLine, InventoryError> {
        self.request(|respond_to| InventoryRequest::AddToCart { id, respond_to })
            .await
    }

    /// Empties the cart unconditionally.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), InventoryError> {
        self.request(|respond_to| InventoryRequest::ClearCart { respond_to })
            .await
    }

    /// Applies the cart against the catalog and clears it.
    #[instrument(skip(self, customer))]
    pub async fn checkout(
        &self,
        customer: CustomerInfo,
    ) -> Result<OrderConfirmation, InventoryError> {
        self.request(|respond_to| InventoryRequest::Checkout {
            customer,
            respond_to,
        })
        .await
    }

    /// Current cart lines with total price and item count.
    #[instrument(skip(self))]
    pub async fn cart_summary(&self) -> Result<CartSummary, InventoryError> {
        self.request(|respond_to| InventoryRequest::CartSummary { respond_to })
            .await
    }

    /// Records stock leaving inventory as a donation. Admin only.
    #[instrument(skip(self))]
    pub async fn record_donation(
        &self,
        session: Session,
        id: ProductId,
        qty: u32,
        recipient: impl Into<String> + std::fmt::Debug,
    ) -> Result<DonationRecord, InventoryError> {
        self.request(|respond_to| InventoryRequest::RecordDonation {
            session,
            id,
            qty,
            recipient: recipient.into(),
            respond_to,
        })
        .await
    }

    /// Records stock discarded as waste. Admin only.
    #[instrument(skip(self))]
    pub async fn record_waste(
        &self,
        session: Session,
        id: ProductId,
        qty: u32,
        reason: impl Into<String> + std::fmt::Debug,
    ) -> Result<WasteRecord, InventoryError> {
        self.request(|respond_to| InventoryRequest::RecordWaste {
            session,
            id,
            qty,
            reason: reason.into(),
            respond_to,
        })
        .await
    }

    /// The donation log, oldest first.
    #[instrument(skip(self))]
    pub async fn list_donations(&self) -> Result<Vec<DonationRecord>, InventoryError> {
        self.request(|respond_to| InventoryRequest::ListDonations { respond_to })
            .await
    }

    /// The waste log, oldest first.
    #[instrument(skip(self))]
    pub async fn list_waste(&self) -> Result<Vec<WasteRecord>, InventoryError> {
        self.request(|respond_to| InventoryRequest::ListWaste { respond_to })
            .await
    }
}
