//! Integration tests for the screens around the product list: sales entry,
//! profile settings and notice delivery.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use stockroom::{
    update_profile, FormFields, InMemoryKeyValueStore, KeyValueStore, LogNoticeSink,
    ProductCatalog, ProfileSettings, SaleInput, SaleStatus, SalesBook, SalesLedger,
    USER_NAME_KEY,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn sales_are_numbered_and_listed_newest_first() {
    let mut book = SalesBook::seeded();

    let first = book
        .record_on(
            SaleInput::try_new("Ada", "Premium Widget", 1, 29.99, SaleStatus::Pending).unwrap(),
            day(16),
        )
        .unwrap();
    let second = book
        .record_on(
            SaleInput::try_new("Grace", "Standard Tool", 2, 39.98, SaleStatus::Completed)
                .unwrap(),
            day(16),
        )
        .unwrap();

    assert_eq!(first.as_str(), "ORD-006");
    assert_eq!(second.as_str(), "ORD-007");

    let order: Vec<&str> = book.ledger().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        order,
        vec!["ORD-007", "ORD-006", "ORD-001", "ORD-002", "ORD-003", "ORD-004", "ORD-005"]
    );
}

#[test]
fn sale_form_uses_catalog_names() {
    let mut catalog = ProductCatalog::seeded();
    catalog.delete_one(stockroom::ProductId(2));

    let mut book = SalesBook::new(SalesLedger::new());
    let form = FormFields::from_pairs([
        ("customer", "Linus"),
        ("product", "deluxe-gadget"),
        ("quantity", "1"),
        ("amount", "49.99"),
        ("status", "completed"),
    ]);

    // the gadget is gone from the catalog, so the slug is kept as chosen
    let id = book.record_from_form(&form, catalog.store()).unwrap();
    let sale = book.ledger().get(&id).unwrap();
    assert_eq!(id.as_str(), "ORD-001");
    assert_eq!(sale.product, "deluxe-gadget");
    assert_eq!(sale.status, SaleStatus::Completed);
}

#[test]
fn profile_defaults_then_saved_values() {
    let store = InMemoryKeyValueStore::new();
    assert_eq!(
        ProfileSettings::load(&store).unwrap(),
        ProfileSettings::default()
    );

    let buffer = Arc::new(Mutex::new(Vec::new()));
    let mut sink = LogNoticeSink::with_buffer(Arc::clone(&buffer));
    let form = FormFields::from_pairs([("name", "Ada Lovelace"), ("email", "ada@example.com")]);
    update_profile(&store, &form, &mut sink).unwrap();

    // another view sharing the same client storage sees the change
    let other_view = store.clone();
    let loaded = ProfileSettings::load(&other_view).unwrap();
    assert_eq!(loaded.name, "Ada Lovelace");
    assert_eq!(
        other_view.get(USER_NAME_KEY).unwrap().as_deref(),
        Some("Ada Lovelace")
    );
    assert_eq!(
        buffer.lock().unwrap().as_slice(),
        &["[NOTICE] Profile updated: Your profile has been updated successfully.".to_string()]
    );
}

#[cfg(feature = "emitter")]
#[test]
fn emitter_sink_receives_catalog_notices() {
    use std::sync::mpsc;
    use std::time::Duration;
    use stockroom::{CatalogConfig, EmitterNoticeSink, ProductInput, RecordStore};

    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);
    let mut sink = EmitterNoticeSink::default();
    sink.on("ProductAdded", move |payload: String| {
        if let Ok(tx) = tx.lock() {
            let _ = tx.send(payload);
        }
    });

    let mut catalog = ProductCatalog::with_sink(RecordStore::new(), CatalogConfig::default(), sink);
    catalog
        .create(ProductInput::try_new("Widget", "W-1", "X", 1, 1.0).unwrap())
        .unwrap();

    let payload = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value["kind"], "product_added");
    assert_eq!(value["id"], 1);
}
