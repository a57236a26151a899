//! Error types for the inventory engine.
//!
//! Every failure surfaced to a UI collaborator renders as a human-readable
//! message via `Display`; none of the variants crash the engine. Channel
//! failures (`EngineClosed` / `EngineDropped`) only occur during shutdown.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// Malformed or out-of-range input: a required field missing or blank,
    /// a negative price, a zero disposition quantity.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The referenced product id does not exist in the catalog.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The product has zero stock at add-to-cart time.
    #[error("\"{0}\" is out of stock")]
    OutOfStock(String),

    /// The cart line already holds all available stock for this product.
    #[error("cart already holds all available stock: {in_cart} in cart, {available} available")]
    StockExceeded { in_cart: u32, available: u32 },

    /// A donation or waste quantity exceeds current stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Checkout was attempted with no cart lines.
    #[error("cart is empty")]
    EmptyCart,

    /// The session is not authorized for this operation.
    #[error("admin access required to {0}")]
    Unauthorized(&'static str),

    /// The engine's request channel is closed.
    #[error("inventory engine closed")]
    EngineClosed,

    /// The engine dropped the response channel mid-request.
    #[error("inventory engine dropped the response channel")]
    EngineDropped,
}
