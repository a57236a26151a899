//! Typed records for everything the engine owns and persists.
//!
//! These replace the ad-hoc caller-shaped objects of a loosely typed UI layer:
//! every record crossing the engine boundary is validated once, in
//! [`crate::state`], and never trusted raw.

pub mod cart;
pub mod disposition;
pub mod product;

pub use cart::{CartLine, CartSummary, CustomerInfo, OrderConfirmation, OrderLine};
pub use disposition::{DonationRecord, WasteRecord};
pub use product::{Product, ProductDraft, ProductId, PLACEHOLDER_IMAGE};
