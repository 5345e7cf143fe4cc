//! ProductCatalog - the owned state behind the product list screen.

use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::export::{export_csv, CsvExport};
use crate::form::FormFields;
use crate::notice::{LogNoticeSink, Notice, NoticeSink};
use crate::product::{seed_products, ProductId, ProductInput, ProductRecord, StockStatus};
use crate::query::{category_options, run_query, CategoryFilter, FilteredView, QueryState, SortKey};
use crate::selection::SelectionTracker;
use crate::store::RecordStore;

use super::CatalogError;

/// Record store, query state and selection for one session, plus the
/// notice sink operations report to.
///
/// Every state change goes through `&mut self`; the store itself is an
/// immutable snapshot that is swapped on each mutation, so a caller can keep
/// an earlier [`RecordStore`] around for comparison or undo.
pub struct ProductCatalog<S: NoticeSink = LogNoticeSink> {
    store: RecordStore,
    query: QueryState,
    selection: SelectionTracker,
    config: CatalogConfig,
    notices: S,
}

impl ProductCatalog<LogNoticeSink> {
    /// Catalog over `store` with notices going to the log.
    pub fn new(store: RecordStore, config: CatalogConfig) -> Self {
        Self::with_sink(store, config, LogNoticeSink::new())
    }

    /// Catalog holding the demo products a fresh dashboard starts with.
    pub fn seeded() -> Self {
        Self::new(
            RecordStore::from_records(seed_products()),
            CatalogConfig::default(),
        )
    }
}

impl<S: NoticeSink> ProductCatalog<S> {
    pub fn with_sink(store: RecordStore, config: CatalogConfig, notices: S) -> Self {
        Self {
            store,
            query: QueryState::default(),
            selection: SelectionTracker::default(),
            config,
            notices,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.notices
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.notices
    }

    pub fn get(&self, id: ProductId) -> Option<&ProductRecord> {
        self.store.get(id)
    }

    // --- QUERY ---

    /// The rows currently on screen.
    pub fn view(&self) -> FilteredView {
        run_query(&self.store, &self.query)
    }

    /// Category filter options, "all" first.
    pub fn categories(&self) -> Vec<String> {
        category_options(&self.store)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.query.category_filter = filter;
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.query.sort_by(key);
    }

    pub fn set_query(&mut self, state: QueryState) {
        self.query = state;
    }

    pub fn reset_query(&mut self) {
        self.query.reset();
    }

    pub fn stock_status(&self, record: &ProductRecord) -> StockStatus {
        record.stock_status(self.config.low_stock_threshold)
    }

    /// Records below the low-stock threshold, in store order.
    pub fn low_stock(&self) -> Vec<&ProductRecord> {
        self.store
            .iter()
            .filter(|r| self.stock_status(r).is_low())
            .collect()
    }

    // --- SELECTION ---

    pub fn toggle(&mut self, id: ProductId) {
        self.selection.toggle(id);
    }

    /// Header checkbox against the current view.
    pub fn toggle_all(&mut self) {
        let view = self.view();
        self.selection.toggle_all(&view);
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(&self.view())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- MUTATIONS ---

    /// Append a product and return its id.
    pub fn create(&mut self, input: ProductInput) -> Result<ProductId, CatalogError> {
        let (store, id) = self
            .store
            .create(input)
            .ok_or(CatalogError::IdsExhausted)?;
        self.store = store;
        debug!(id = id.get(), "product created");
        self.notify(Notice::ProductAdded { id: id.get() });
        Ok(id)
    }

    /// Parse the add-product form, then create.
    pub fn create_from_form(&mut self, form: &FormFields) -> Result<ProductId, CatalogError> {
        let input = ProductInput::from_form(form)?;
        self.create(input)
    }

    /// Replace every field of `id` except the id itself.
    pub fn update(&mut self, id: ProductId, input: ProductInput) -> Result<(), CatalogError> {
        let applied = self.store.update(id, input);
        if !applied.changed {
            if self.config.reject_unknown_updates {
                return Err(CatalogError::NotFound { id });
            }
            debug!(id = id.get(), "update ignored, no such product");
            return Ok(());
        }
        self.store = applied.store;
        debug!(id = id.get(), "product updated");
        self.notify(Notice::ProductUpdated { id: id.get() });
        Ok(())
    }

    /// Parse the edit-product form, then update.
    pub fn update_from_form(
        &mut self,
        id: ProductId,
        form: &FormFields,
    ) -> Result<(), CatalogError> {
        let input = ProductInput::from_form(form)?;
        self.update(id, input)
    }

    /// Remove one product. Returns whether it existed; unknown ids are a
    /// no-op.
    pub fn delete_one(&mut self, id: ProductId) -> bool {
        let name = match self.store.get(id) {
            Some(record) => record.name.clone(),
            None => return false,
        };
        self.store = self.store.delete_one(id).store;
        self.selection.forget(&[id]);
        debug!(id = id.get(), "product deleted");
        self.notify(Notice::ProductDeleted { id: id.get(), name });
        true
    }

    /// Remove every listed product and drop them from the selection.
    /// Returns how many records were removed.
    pub fn delete_many(&mut self, ids: &[ProductId]) -> usize {
        let before = self.store.len();
        let applied = self.store.delete_many(ids);
        self.selection.forget(ids);
        if !applied.changed {
            return 0;
        }
        self.store = applied.store;
        let removed = before - self.store.len();
        debug!(removed, "products deleted");
        self.notify(Notice::ProductsDeleted { count: removed });
        removed
    }

    /// Bulk delete of the current selection; the selection ends up empty.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.ids();
        let removed = self.delete_many(&ids);
        self.selection.clear();
        removed
    }

    // --- EXPORT ---

    /// CSV of the current view, in view order.
    pub fn export(&mut self) -> CsvExport {
        let view = self.view();
        let body = export_csv(&view, self.config.export_quoting);
        let export = CsvExport {
            filename: self.config.export_filename.clone(),
            body,
        };
        debug!(rows = view.len(), filename = %export.filename, "products exported");
        self.notify(Notice::ExportCompleted {
            filename: export.filename.clone(),
            rows: view.len(),
        });
        export
    }

    fn notify(&mut self, notice: Notice) {
        if let Err(e) = self.notices.deliver(&notice) {
            warn!(kind = notice.kind(), error = %e, "notice delivery failed");
        }
    }
}
