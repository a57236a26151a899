use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One cart entry: a product reference plus a denormalized snapshot of the
/// fields the storefront renders. At most one line exists per product id.
///
/// The snapshot is taken at first add; the `quantity` is re-validated against
/// live catalog stock on every increment and again at checkout. Cart lines are
/// never a stock hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Builds the initial line (quantity 1) from a live catalog product.
    pub fn first_of(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Read-only view of the current cart for the storefront to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub item_count: u32,
}

/// Customer details collected at checkout. All three fields are required.
#[derive(Debug, Clone)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// One fulfilled order line. `quantity` is what was actually deducted from
/// stock, which can be less than the cart quantity when stock drifted between
/// add and checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Returned by a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub customer: String,
    pub lines: Vec<OrderLine>,
    pub item_count: u32,
    pub total: f64,
}
