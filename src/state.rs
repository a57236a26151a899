//! The in-memory inventory aggregate and its invariant-enforcing mutations.
//!
//! [`InventoryState`] owns the four collections (catalog, cart, donation log,
//! waste log). Every mutation validates first and touches nothing on failure,
//! so a rejected operation leaves the state exactly as it found it. Each
//! successful mutation reports the collections it dirtied via [`Dirty`]; the
//! engine persists exactly that set.
//!
//! Invariants held here:
//! - product `qty` and `price` are never negative
//! - at most one cart line per product id, `quantity >= 1`
//! - a cart line's quantity never exceeds live stock at the moment
//!   `add_to_cart` returns
//! - disposition logs are append-only

use crate::error::InventoryError;
use crate::model::{
    CartLine, CartSummary, CustomerInfo, DonationRecord, OrderConfirmation, OrderLine, Product,
    ProductDraft, ProductId, WasteRecord, PLACEHOLDER_IMAGE,
};
use crate::store::CollectionKey;
use chrono::Utc;

/// The set of collections a mutating operation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dirty {
    pub catalog: bool,
    pub cart: bool,
    pub donations: bool,
    pub waste: bool,
}

impl Dirty {
    pub fn keys(self) -> Vec<CollectionKey> {
        let mut keys = Vec::new();
        if self.catalog {
            keys.push(CollectionKey::Catalog);
        }
        if self.cart {
            keys.push(CollectionKey::Cart);
        }
        if self.donations {
            keys.push(CollectionKey::DonationLog);
        }
        if self.waste {
            keys.push(CollectionKey::WasteLog);
        }
        keys
    }
}

const CATALOG: Dirty = Dirty {
    catalog: true,
    cart: false,
    donations: false,
    waste: false,
};
const CART: Dirty = Dirty {
    catalog: false,
    cart: true,
    donations: false,
    waste: false,
};

/// The aggregate of all four persisted collections.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    pub catalog: Vec<Product>,
    pub cart: Vec<CartLine>,
    pub donations: Vec<DonationRecord>,
    pub waste: Vec<WasteRecord>,
}

impl InventoryState {
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// The next free product id: one past the largest id in the catalog.
    pub fn next_id(&self) -> u64 {
        self.catalog.iter().map(|p| p.id.0).max().unwrap_or(0) + 1
    }

    /// Validates the draft, fills defaults, and appends the product.
    pub fn add_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<(Product, Dirty), InventoryError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(InventoryError::Validation(
                "product name must not be empty".to_string(),
            ));
        }
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(InventoryError::Validation(
                "product price must be a non-negative number".to_string(),
            ));
        }

        let product = Product {
            id,
            name: name.to_string(),
            category: none_if_blank(draft.category),
            price: draft.price,
            qty: draft.qty,
            expiry: none_if_blank(draft.expiry),
            image: draft
                .image
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            desc: none_if_blank(draft.desc),
        };
        self.catalog.push(product.clone());
        Ok((product, CATALOG))
    }

    /// Sets a product's stock to an absolute value.
    pub fn update_stock(
        &mut self,
        id: ProductId,
        new_qty: u32,
    ) -> Result<(Product, Dirty), InventoryError> {
        let product = self
            .catalog
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        product.qty = new_qty;
        Ok((product.clone(), CATALOG))
    }

    /// Removes a product and cascades the removal to any cart line holding
    /// it, so the cart never references a nonexistent product.
    pub fn delete_product(&mut self, id: ProductId) -> Result<(Product, Dirty), InventoryError> {
        let idx = self
            .catalog
            .iter()
            .position(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        let removed = self.catalog.remove(idx);

        let lines_before = self.cart.len();
        self.cart.retain(|line| line.id != id);
        let cart_changed = self.cart.len() != lines_before;

        Ok((
            removed,
            Dirty {
                catalog: true,
                cart: cart_changed,
                ..Dirty::default()
            },
        ))
    }

    /// Adds one unit of a product to the cart, bounded by live stock.
    ///
    /// This never decrements catalog stock: availability checks here are
    /// advisory, and the actual deduction is deferred to checkout.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<(CartLine, Dirty), InventoryError> {
        let (available, snapshot) = {
            let product = self.find_product(id).ok_or(InventoryError::NotFound(id))?;
            if product.qty == 0 {
                return Err(InventoryError::OutOfStock(product.name.clone()));
            }
            (product.qty, CartLine::first_of(product))
        };

        let line = match self.cart.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                if line.quantity >= available {
                    return Err(InventoryError::StockExceeded {
                        in_cart: line.quantity,
                        available,
                    });
                }
                line.quantity += 1;
                line.clone()
            }
            None => {
                self.cart.push(snapshot.clone());
                snapshot
            }
        };
        Ok((line, CART))
    }

    pub fn clear_cart(&mut self) -> Dirty {
        self.cart.clear();
        CART
    }

    pub fn cart_summary(&self) -> CartSummary {
        CartSummary {
            lines: self.cart.clone(),
            total: self.cart.iter().map(CartLine::line_total).sum(),
            item_count: self.cart.iter().map(|l| l.quantity).sum(),
        }
    }

    /// Applies the whole cart against the catalog and clears it.
    ///
    /// Every line's deduction is clamped to the stock actually present, so a
    /// line whose product was drained (or deleted) underneath the cart
    /// fulfills fewer units, or zero, instead of failing the order. Either the
    /// whole cart is processed or, on validation failure, nothing is.
    pub fn checkout(
        &mut self,
        customer: &CustomerInfo,
    ) -> Result<(OrderConfirmation, Dirty), InventoryError> {
        for (field, value) in [
            ("name", &customer.name),
            ("phone", &customer.phone),
            ("address", &customer.address),
        ] {
            if value.trim().is_empty() {
                return Err(InventoryError::Validation(format!(
                    "customer {field} is required"
                )));
            }
        }
        if self.cart.is_empty() {
            return Err(InventoryError::EmptyCart);
        }

        let mut lines = Vec::with_capacity(self.cart.len());
        for line in &self.cart {
            let fulfilled = match self.catalog.iter_mut().find(|p| p.id == line.id) {
                Some(product) => {
                    let take = line.quantity.min(product.qty);
                    product.qty -= take;
                    take
                }
                None => 0,
            };
            lines.push(OrderLine {
                id: line.id,
                name: line.name.clone(),
                price: line.price,
                quantity: fulfilled,
            });
        }
        self.cart.clear();

        let confirmation = OrderConfirmation {
            customer: customer.name.trim().to_string(),
            item_count: lines.iter().map(|l| l.quantity).sum(),
            total: lines.iter().map(|l| l.price * f64::from(l.quantity)).sum(),
            lines,
        };
        Ok((
            confirmation,
            Dirty {
                catalog: true,
                cart: true,
                ..Dirty::default()
            },
        ))
    }

    /// Records a donation: stock leaves the catalog, the log gains a record.
    pub fn record_donation(
        &mut self,
        id: ProductId,
        qty: u32,
        recipient: &str,
    ) -> Result<(DonationRecord, Dirty), InventoryError> {
        let product = self.withdraw_stock(id, qty, recipient, "donation recipient")?;
        let record = DonationRecord {
            product_id: id,
            product,
            qty,
            recipient: recipient.trim().to_string(),
            date: Utc::now(),
        };
        self.donations.push(record.clone());
        Ok((
            record,
            Dirty {
                catalog: true,
                donations: true,
                ..Dirty::default()
            },
        ))
    }

    /// Records waste: same shape as a donation, with a reason for the cause.
    pub fn record_waste(
        &mut self,
        id: ProductId,
        qty: u32,
        reason: &str,
    ) -> Result<(WasteRecord, Dirty), InventoryError> {
        let product = self.withdraw_stock(id, qty, reason, "waste reason")?;
        let record = WasteRecord {
            product_id: id,
            product,
            qty,
            reason: reason.trim().to_string(),
            date: Utc::now(),
        };
        self.waste.push(record.clone());
        Ok((
            record,
            Dirty {
                catalog: true,
                waste: true,
                ..Dirty::default()
            },
        ))
    }

    /// Shared validation and stock decrement for both disposition kinds.
    /// Checks run in contract order: existence, quantity, cause, stock level.
    /// Returns the product name for the record snapshot.
    fn withdraw_stock(
        &mut self,
        id: ProductId,
        qty: u32,
        cause: &str,
        cause_field: &str,
    ) -> Result<String, InventoryError> {
        let product = self
            .catalog
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        if qty == 0 {
            return Err(InventoryError::Validation(
                "quantity must be greater than zero".to_string(),
            ));
        }
        if cause.trim().is_empty() {
            return Err(InventoryError::Validation(format!(
                "{cause_field} must not be empty"
            )));
        }
        if qty > product.qty {
            return Err(InventoryError::InsufficientStock {
                requested: qty,
                available: product.qty,
            });
        }
        product.qty -= qty;
        Ok(product.name.clone())
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// The fixed product list seeded when the catalog loads empty on startup.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "Vanilla Cupcake".to_string(),
            category: Some("Pastry".to_string()),
            price: 130.0,
            qty: 50,
            expiry: Some("2025-12-31".to_string()),
            image: "https://images.unsplash.com/photo-1464347744102-1b0d5c0c3a83?q=80&w=600&auto=format&fit=crop".to_string(),
            desc: Some("It's topped with buttercream frosting".to_string()),
        },
        Product {
            id: ProductId(2),
            name: "Banana Bread".to_string(),
            category: Some("Bread".to_string()),
            price: 100.0,
            qty: 20,
            expiry: Some("2025-11-30".to_string()),
            image: "https://images.unsplash.com/photo-1549575815-3e73b8ff9252?q=80&w=600&auto=format&fit=crop".to_string(),
            desc: Some("Moist and flavorful".to_string()),
        },
        Product {
            id: ProductId(3),
            name: "Carrot Cake".to_string(),
            category: Some("Cake".to_string()),
            price: 200.0,
            qty: 12,
            expiry: Some("2025-12-15".to_string()),
            image: "https://images.unsplash.com/photo-1551024601-bec3ebc12e5e?q=80&w=600&auto=format&fit=crop".to_string(),
            desc: Some("Classic with cream cheese icing".to_string()),
        },
    ]
}
