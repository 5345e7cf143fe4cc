//! Fixtures shared by the product list tests.

use std::sync::{Arc, Mutex};

use stockroom::{
    CatalogConfig, FilteredView, LogNoticeSink, ProductCatalog, ProductInput, RecordStore,
};

/// Store built by creating each row in order, so ids are 1..=n.
pub fn store_of(rows: &[(&str, &str, &str, i64, f64)]) -> RecordStore {
    rows.iter()
        .fold(RecordStore::new(), |store, &(name, sku, category, stock, price)| {
            let input = ProductInput::try_new(name, sku, category, stock, price).unwrap();
            store.create(input).unwrap().0
        })
}

/// The two-record store used by the stock-sort scenarios.
pub fn a_and_b() -> RecordStore {
    store_of(&[("A", "S1", "X", 10, 5.0), ("B", "S2", "Y", 3, 20.0)])
}

/// Catalog whose notices land in the returned buffer.
pub fn buffered_catalog(
    store: RecordStore,
    config: CatalogConfig,
) -> (ProductCatalog<LogNoticeSink>, Arc<Mutex<Vec<String>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = LogNoticeSink::with_buffer(Arc::clone(&buffer));
    (ProductCatalog::with_sink(store, config, sink), buffer)
}

pub fn product(name: &str, sku: &str, category: &str, stock: i64, price: f64) -> ProductInput {
    ProductInput::try_new(name, sku, category, stock, price).unwrap()
}

pub fn ids(view: &FilteredView) -> Vec<u64> {
    view.iter().map(|r| r.id.get()).collect()
}
