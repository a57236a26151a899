//! Demo storefront session against a file-backed store.
//!
//! Runs the full lifecycle once: load (or seed) the catalog, fill a cart,
//! check out, record a donation, and shut down. State lands in
//! `./bakehouse-data/` and survives across runs.

use bakehouse_ledger::lifecycle::{setup_tracing, InventorySystem};
use bakehouse_ledger::model::{CustomerInfo, ProductDraft};
use bakehouse_ledger::store::JsonFileStore;
use bakehouse_ledger::Session;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let store = JsonFileStore::open("./bakehouse-data").map_err(|e| e.to_string())?;
    let system = InventorySystem::start(store);
    let client = &system.client;
    let admin = Session::admin();

    let products = client.list_products().await.map_err(|e| e.to_string())?;
    info!(count = products.len(), "catalog loaded");

    let muffin = client
        .add_product(
            admin,
            ProductDraft {
                name: "Blueberry Muffin".to_string(),
                category: Some("Pastry".to_string()),
                price: 80.0,
                qty: 24,
                ..ProductDraft::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %muffin.id, "added a product");

    client.add_to_cart(muffin.id).await.map_err(|e| e.to_string())?;
    client.add_to_cart(muffin.id).await.map_err(|e| e.to_string())?;
    let summary = client.cart_summary().await.map_err(|e| e.to_string())?;
    info!(items = summary.item_count, total = summary.total, "cart ready");

    let confirmation = client
        .checkout(CustomerInfo {
            name: "Wanjiku".to_string(),
            phone: "0700 000 000".to_string(),
            address: "Moi Avenue, Nairobi".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(
        customer = %confirmation.customer,
        total = confirmation.total,
        "order placed"
    );

    let donation = client
        .record_donation(admin, muffin.id, 5, "Shelter A")
        .await
        .map_err(|e| e.to_string())?;
    info!(
        product = %donation.product,
        qty = donation.qty,
        recipient = %donation.recipient,
        "donation recorded"
    );

    system.shutdown().await?;
    Ok(())
}
