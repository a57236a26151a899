use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Image reference used when a product is created without one.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

/// Type-safe identifier for products.
///
/// Ids are assigned by the engine from a monotonically increasing counter and
/// persist on the wire as plain numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A sellable product and its stock level. The catalog is the source of truth
/// for availability; `qty` can never go negative by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    pub qty: u32,
    #[serde(default)]
    pub expiry: Option<String>,
    pub image: String,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Caller-supplied fields for a new product. The engine validates the draft,
/// assigns a fresh id, and fills in the placeholder image when none is given.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub qty: u32,
    pub expiry: Option<String>,
    pub image: Option<String>,
    pub desc: Option<String>,
}
