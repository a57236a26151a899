use super::product::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only record of stock leaving inventory as a donation.
///
/// Records carry a snapshot of the product name so the log stays readable
/// after the product is edited or deleted. Once written, a record is never
/// mutated or removed; correcting a mistake takes a compensating stock edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub product: String,
    pub qty: u32,
    pub recipient: String,
    pub date: DateTime<Utc>,
}

/// Append-only record of stock discarded as waste. Same shape and rules as
/// [`DonationRecord`], with a `reason` instead of a recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub product: String,
    pub qty: u32,
    pub reason: String,
    pub date: DateTime<Utc>,
}
