mod catalog;
mod config;
mod export;
mod form;
mod notice;
mod product;
mod profile;
mod query;
mod sales;
mod selection;
mod store;

pub use catalog::{CatalogError, ProductCatalog};
pub use config::{CatalogConfig, DEFAULT_LOW_STOCK_THRESHOLD};
pub use export::{export_csv, CsvExport, ExportQuoting, CSV_HEADER, DEFAULT_EXPORT_FILENAME};
pub use form::{FieldProblem, FormFields, ValidationError};
pub use notice::{LogNoticeSink, LogNoticeSinkError, Notice, NoticeSink};
pub use product::{seed_products, ProductId, ProductInput, ProductRecord, StockStatus};
pub use profile::{
    update_profile, InMemoryKeyValueStore, KeyValueStore, ProfileError, ProfileSettings,
    StoreError, DEFAULT_USER_EMAIL, DEFAULT_USER_NAME, USER_EMAIL_KEY, USER_NAME_KEY,
};
pub use query::{
    category_options, collate, run_query, CategoryFilter, FilteredView, QueryState,
    SortDirection, SortKey, ALL_CATEGORIES,
};
pub use sales::{
    product_slug, OrderId, SaleInput, SaleRecord, SaleStatus, SalesBook, SalesError,
    SalesLedger, UnknownStatus,
};
pub use selection::SelectionTracker;
pub use store::{Applied, RecordStore};

#[cfg(feature = "emitter")]
pub use notice::EmitterNoticeSink;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
