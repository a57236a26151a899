//! Request messages sent from the client to the inventory actor.
//!
//! One variant per boundary operation; each carries a oneshot reply slot so
//! the caller gets a typed `Result` back. The engine processes these strictly
//! one at a time, which is what makes every operation all-or-nothing without
//! any locking.

use crate::error::InventoryError;
use crate::model::{
    CartLine, CartSummary, CustomerInfo, DonationRecord, OrderConfirmation, Product, ProductDraft,
    ProductId, WasteRecord,
};
use crate::session::Session;
use tokio::sync::oneshot;

/// Reply slot carried by every request.
pub type Reply<T> = oneshot::Sender<Result<T, InventoryError>>;

/// Internal message type for engine operations.
#[derive(Debug)]
pub enum InventoryRequest {
    ListProducts {
        respond_to: Reply<Vec<Product>>,
    },
    AddProduct {
        session: Session,
        draft: ProductDraft,
        respond_to: Reply<Product>,
    },
    UpdateStock {
        session: Session,
        id: ProductId,
        qty: u32,
        respond_to: Reply<Product>,
    },
    DeleteProduct {
        session: Session,
        id: ProductId,
        respond_to: Reply<Product>,
    },
    AddToCart {
        id: ProductId,
        respond_to: Reply<CartLine>,
    },
    ClearCart {
        respond_to: Reply<()>,
    },
    Checkout {
        customer: CustomerInfo,
        respond_to: Reply<OrderConfirmation>,
    },
    CartSummary {
        respond_to: Reply<CartSummary>,
    },
    RecordDonation {
        session: Session,
        id: ProductId,
        qty: u32,
        recipient: String,
        respond_to: Reply<DonationRecord>,
    },
    RecordWaste {
        session: Session,
        id: ProductId,
        qty: u32,
        reason: String,
        respond_to: Reply<WasteRecord>,
    },
    ListDonations {
        respond_to: Reply<Vec<DonationRecord>>,
    },
    ListWaste {
        respond_to: Reply<Vec<WasteRecord>>,
    },
}
