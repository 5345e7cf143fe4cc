//! Selection Tracker - which product rows are checked.
//!
//! The selection is a plain id set, independent of the query, but the bulk
//! operations take the current [`FilteredView`]: select-all selects what is
//! on screen, nothing else.

use std::collections::BTreeSet;

use crate::product::ProductId;
use crate::query::FilteredView;
use crate::store::RecordStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<ProductId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id in or out of the selection.
    pub fn toggle(&mut self, id: ProductId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Header checkbox: clear when exactly the view is selected, otherwise
    /// replace the selection with the view's ids.
    ///
    /// Replacing drops ids selected under an earlier filter.
    pub fn toggle_all(&mut self, view: &FilteredView) {
        if self.covers_exactly(view) {
            self.selected.clear();
        } else {
            self.selected = view.iter().map(|r| r.id).collect();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Checked state of the header checkbox.
    pub fn all_selected(&self, view: &FilteredView) -> bool {
        self.selected.len() == view.len() && !view.is_empty()
    }

    pub fn is_selected(&self, id: ProductId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids, ascending.
    pub fn ids(&self) -> Vec<ProductId> {
        self.selected.iter().copied().collect()
    }

    /// Drop the given ids from the selection.
    pub fn forget(&mut self, ids: &[ProductId]) {
        for id in ids {
            self.selected.remove(id);
        }
    }

    /// Drop ids that no longer exist in `store`.
    pub fn reconcile(&mut self, store: &RecordStore) {
        self.selected.retain(|id| store.contains(*id));
    }

    fn covers_exactly(&self, view: &FilteredView) -> bool {
        self.selected.len() == view.len() && view.iter().all(|r| self.selected.contains(&r.id))
    }
}
