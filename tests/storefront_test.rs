//! End-to-end tests against a real spawned engine with an in-memory store.

use bakehouse_ledger::error::InventoryError;
use bakehouse_ledger::lifecycle::InventorySystem;
use bakehouse_ledger::model::{CustomerInfo, ProductDraft, ProductId};
use bakehouse_ledger::store::MemoryStore;
use bakehouse_ledger::Session;

fn start() -> InventorySystem {
    InventorySystem::start(MemoryStore::new())
}

fn draft(name: &str, price: f64, qty: u32) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price,
        qty,
        ..ProductDraft::default()
    }
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Wanjiku".to_string(),
        phone: "0700000000".to_string(),
        address: "Moi Avenue".to_string(),
    }
}

#[tokio::test]
async fn fresh_store_seeds_exactly_the_default_catalog() {
    let system = start();

    let products = system.client.list_products().await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Vanilla Cupcake", "Banana Bread", "Carrot Cake"]);
    assert_eq!(products[0].qty, 50);
    assert_eq!(products[1].price, 100.0);

    // Reads are idempotent: same answer without intervening mutation.
    let again = system.client.list_products().await.unwrap();
    assert_eq!(products, again);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn add_to_cart_on_zero_stock_leaves_cart_empty() {
    let system = start();
    let empty = system
        .client
        .add_product(Session::admin(), draft("Day-old Scone", 10.0, 0))
        .await
        .unwrap();

    let err = system.client.add_to_cart(empty.id).await.unwrap_err();
    assert_eq!(err, InventoryError::OutOfStock("Day-old Scone".to_string()));

    let summary = system.client.cart_summary().await.unwrap();
    assert!(summary.lines.is_empty());
    assert_eq!(summary.item_count, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn donation_moves_stock_into_the_log() {
    let system = start();
    let admin = Session::admin();
    let muffin = system
        .client
        .add_product(admin, draft("Muffin", 50.0, 10))
        .await
        .unwrap();

    let record = system
        .client
        .record_donation(admin, muffin.id, 4, "Shelter A")
        .await
        .unwrap();
    assert_eq!(record.qty, 4);
    assert_eq!(record.recipient, "Shelter A");
    assert_eq!(record.product, "Muffin");

    let products = system.client.list_products().await.unwrap();
    let muffin_now = products.iter().find(|p| p.id == muffin.id).unwrap();
    assert_eq!(muffin_now.qty, 6);

    let log = system.client.list_donations().await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0], record);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cart_cannot_exceed_available_stock() {
    let system = start();
    let scone = system
        .client
        .add_product(Session::admin(), draft("Scone", 60.0, 2))
        .await
        .unwrap();

    let line = system.client.add_to_cart(scone.id).await.unwrap();
    assert_eq!(line.quantity, 1);
    let line = system.client.add_to_cart(scone.id).await.unwrap();
    assert_eq!(line.quantity, 2);

    let err = system.client.add_to_cart(scone.id).await.unwrap_err();
    assert_eq!(
        err,
        InventoryError::StockExceeded {
            in_cart: 2,
            available: 2
        }
    );

    let summary = system.client.cart_summary().await.unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].quantity, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn empty_cart_checkout_touches_nothing() {
    let system = start();
    let before = system.client.list_products().await.unwrap();

    let err = system.client.checkout(customer()).await.unwrap_err();
    assert_eq!(err, InventoryError::EmptyCart);

    let after = system.client.list_products().await.unwrap();
    assert_eq!(before, after);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn deleting_a_product_evicts_it_from_the_cart() {
    let system = start();
    let admin = Session::admin();
    let scone = system
        .client
        .add_product(admin, draft("Scone", 60.0, 5))
        .await
        .unwrap();
    let tart = system
        .client
        .add_product(admin, draft("Tart", 90.0, 5))
        .await
        .unwrap();

    system.client.add_to_cart(scone.id).await.unwrap();
    system.client.add_to_cart(tart.id).await.unwrap();

    system.client.delete_product(admin, scone.id).await.unwrap();

    let summary = system.client.cart_summary().await.unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].id, tart.id);

    let products = system.client.list_products().await.unwrap();
    assert!(products.iter().all(|p| p.id != scone.id));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_clamps_lines_whose_stock_drained() {
    let system = start();
    let admin = Session::admin();
    let a = system
        .client
        .add_product(admin, draft("Scone", 60.0, 5))
        .await
        .unwrap();
    let b = system
        .client
        .add_product(admin, draft("Tart", 90.0, 1))
        .await
        .unwrap();

    for _ in 0..3 {
        system.client.add_to_cart(a.id).await.unwrap();
    }
    system.client.add_to_cart(b.id).await.unwrap();

    // Stock for B drains after it entered the cart.
    system.client.update_stock(admin, b.id, 0).await.unwrap();

    let confirmation = system.client.checkout(customer()).await.unwrap();
    assert_eq!(confirmation.item_count, 3);
    assert_eq!(confirmation.total, 180.0);
    let b_line = confirmation.lines.iter().find(|l| l.id == b.id).unwrap();
    assert_eq!(b_line.quantity, 0);

    // The whole cart cleared and A's stock dropped; B stayed at zero.
    let summary = system.client.cart_summary().await.unwrap();
    assert!(summary.lines.is_empty());
    let products = system.client.list_products().await.unwrap();
    assert_eq!(products.iter().find(|p| p.id == a.id).unwrap().qty, 2);
    assert_eq!(products.iter().find(|p| p.id == b.id).unwrap().qty, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn stock_never_goes_negative_across_mixed_operations() {
    let system = start();
    let admin = Session::admin();
    let scone = system
        .client
        .add_product(admin, draft("Scone", 60.0, 3))
        .await
        .unwrap();

    system.client.add_to_cart(scone.id).await.unwrap();
    system.client.add_to_cart(scone.id).await.unwrap();
    system
        .client
        .record_waste(admin, scone.id, 2, "dropped tray")
        .await
        .unwrap();
    system.client.checkout(customer()).await.unwrap();

    // 3 - 2 waste = 1 left at checkout; the cart wanted 2, clamped to 1.
    let products = system.client.list_products().await.unwrap();
    assert_eq!(products.iter().find(|p| p.id == scone.id).unwrap().qty, 0);

    let err = system
        .client
        .record_donation(admin, scone.id, 1, "Shelter A")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        InventoryError::InsufficientStock {
            requested: 1,
            available: 0
        }
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn storefront_sessions_cannot_touch_the_catalog() {
    let system = start();
    let shopper = Session::storefront();

    let err = system
        .client
        .add_product(shopper, draft("Scone", 60.0, 5))
        .await
        .unwrap_err();
    assert_eq!(err, InventoryError::Unauthorized("add products"));

    let err = system
        .client
        .update_stock(shopper, ProductId(1), 99)
        .await
        .unwrap_err();
    assert_eq!(err, InventoryError::Unauthorized("update stock"));

    let err = system
        .client
        .record_waste(shopper, ProductId(1), 1, "expired")
        .await
        .unwrap_err();
    assert_eq!(err, InventoryError::Unauthorized("record waste"));

    // Nothing changed: the seed catalog is intact.
    let products = system.client.list_products().await.unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].qty, 50);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_product_ids_are_rejected_everywhere() {
    let system = start();
    let admin = Session::admin();
    let missing = ProductId(999);

    assert_eq!(
        system.client.add_to_cart(missing).await.unwrap_err(),
        InventoryError::NotFound(missing)
    );
    assert_eq!(
        system.client.update_stock(admin, missing, 5).await.unwrap_err(),
        InventoryError::NotFound(missing)
    );
    assert_eq!(
        system.client.delete_product(admin, missing).await.unwrap_err(),
        InventoryError::NotFound(missing)
    );
    assert_eq!(
        system
            .client
            .record_donation(admin, missing, 1, "Shelter A")
            .await
            .unwrap_err(),
        InventoryError::NotFound(missing)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_requires_complete_customer_details() {
    let system = start();
    let scone = system
        .client
        .add_product(Session::admin(), draft("Scone", 60.0, 5))
        .await
        .unwrap();
    system.client.add_to_cart(scone.id).await.unwrap();

    let err = system
        .client
        .checkout(CustomerInfo {
            phone: "".to_string(),
            ..customer()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Validation(_)));

    // The failed checkout left the cart alone.
    let summary = system.client.cart_summary().await.unwrap();
    assert_eq!(summary.item_count, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn clear_cart_empties_without_touching_stock() {
    let system = start();
    let scone = system
        .client
        .add_product(Session::admin(), draft("Scone", 60.0, 5))
        .await
        .unwrap();
    system.client.add_to_cart(scone.id).await.unwrap();
    system.client.add_to_cart(scone.id).await.unwrap();

    system.client.clear_cart().await.unwrap();

    let summary = system.client.cart_summary().await.unwrap();
    assert!(summary.lines.is_empty());
    assert_eq!(summary.total, 0.0);
    let products = system.client.list_products().await.unwrap();
    assert_eq!(products.iter().find(|p| p.id == scone.id).unwrap().qty, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cart_summary_is_stable_between_mutations() {
    let system = start();
    let scone = system
        .client
        .add_product(Session::admin(), draft("Scone", 60.0, 5))
        .await
        .unwrap();
    system.client.add_to_cart(scone.id).await.unwrap();

    let first = system.client.cart_summary().await.unwrap();
    let second = system.client.cart_summary().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total, 60.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn disposition_logs_are_separate_and_ordered() {
    let system = start();
    let admin = Session::admin();
    let muffin = system
        .client
        .add_product(admin, draft("Muffin", 50.0, 20))
        .await
        .unwrap();

    system
        .client
        .record_donation(admin, muffin.id, 3, "Shelter A")
        .await
        .unwrap();
    system
        .client
        .record_waste(admin, muffin.id, 1, "burnt batch")
        .await
        .unwrap();
    system
        .client
        .record_donation(admin, muffin.id, 2, "Shelter B")
        .await
        .unwrap();

    let donations = system.client.list_donations().await.unwrap();
    assert_eq!(donations.len(), 2);
    assert_eq!(donations[0].recipient, "Shelter A");
    assert_eq!(donations[1].recipient, "Shelter B");

    let waste = system.client.list_waste().await.unwrap();
    assert_eq!(waste.len(), 1);
    assert_eq!(waste[0].reason, "burnt batch");

    let products = system.client.list_products().await.unwrap();
    assert_eq!(products.iter().find(|p| p.id == muffin.id).unwrap().qty, 14);

    system.shutdown().await.unwrap();
}
