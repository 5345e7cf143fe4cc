//! Query evaluation: filter, then sort, from scratch on every call.

use std::cmp::Ordering;

use crate::product::{ProductId, ProductRecord};
use crate::store::RecordStore;

use super::collate::collate;
use super::{QueryState, SortDirection, SortKey, ALL_CATEGORIES};

/// The ordered rows a query produced. Empty is a valid result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    records: Vec<ProductRecord>,
}

impl FilteredView {
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids in view order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Evaluate `state` against `store`.
///
/// A record is kept when its name, sku or category contains the search term
/// (case-insensitive) and the category filter admits it. Survivors are sorted
/// stably with the direction folded into the comparator, so records with
/// equal keys stay in store order whichever way the list is sorted.
pub fn run_query(store: &RecordStore, state: &QueryState) -> FilteredView {
    let needle = state.search_term.to_lowercase();
    let mut records: Vec<ProductRecord> = store
        .iter()
        .filter(|r| state.category_filter.admits(&r.category) && r.matches_lowercase(&needle))
        .cloned()
        .collect();

    let key = state.sort_key;
    let direction = state.sort_direction;
    records.sort_by(|a, b| directed(compare_by(key, a, b), direction));

    FilteredView { records }
}

/// Filter option list: the "all" sentinel followed by the store's distinct
/// categories.
pub fn category_options(store: &RecordStore) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(store.categories())
        .collect()
}

fn compare_by(key: SortKey, a: &ProductRecord, b: &ProductRecord) -> Ordering {
    match key {
        SortKey::Name => collate(&a.name, &b.name),
        SortKey::Stock => a.stock.cmp(&b.stock),
        SortKey::Price => a.price.total_cmp(&b.price),
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
