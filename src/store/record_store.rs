//! RecordStore - immutable, cheaply cloned snapshots of the product list.

use std::collections::HashSet;
use std::sync::Arc;

use crate::product::{ProductId, ProductInput, ProductRecord};

/// An ordered snapshot of product records.
///
/// Mutations never touch `self`; they return the next snapshot. Records keep
/// insertion order regardless of how any view sorts them. Clone-friendly via
/// Arc, so holding on to an old snapshot costs nothing.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<Vec<ProductRecord>>,
    /// Highest id ever handed out by this store lineage.
    high_water: u64,
}

/// Result of a mutation that may not have matched anything.
#[derive(Debug, Clone)]
pub struct Applied {
    pub store: RecordStore,
    pub changed: bool,
}

impl RecordStore {
    /// Create an empty store. The first created record gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing records, keeping their order and ids.
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let high_water = records.iter().map(|r| r.id.get()).max().unwrap_or(0);
        Self {
            records: Arc::new(records),
            high_water,
        }
    }

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

    pub fn get(&self, id: ProductId) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Id the next `create` will assign: one past the largest id present,
    /// or past the largest ever assigned if that was deleted since. `None`
    /// once `u64::MAX` has been handed out.
    pub fn next_id(&self) -> Option<ProductId> {
        let max_present = self.records.iter().map(|r| r.id.get()).max().unwrap_or(0);
        ProductId(max_present.max(self.high_water)).next()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect()
    }

    /// Append a new record, returning the new snapshot and the assigned id,
    /// or `None` when the id space is used up.
    pub fn create(&self, input: ProductInput) -> Option<(RecordStore, ProductId)> {
        let id = self.next_id()?;
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend(self.records.iter().cloned());
        records.push(input.into_record(id));
        let store = RecordStore {
            records: Arc::new(records),
            high_water: id.get(),
        };
        Some((store, id))
    }

    /// Replace every field of the record with `id`, keeping its position.
    ///
    /// `changed` is false when no record has that id; the snapshot is then
    /// the same one.
    pub fn update(&self, id: ProductId, input: ProductInput) -> Applied {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return self.unchanged();
        };
        let mut records = self.records.as_ref().clone();
        records[index] = input.into_record(id);
        Applied {
            store: self.with_records(records),
            changed: true,
        }
    }

    /// Remove the record with `id`, if present.
    pub fn delete_one(&self, id: ProductId) -> Applied {
        self.delete_where(|r| r.id == id)
    }

    /// Remove every record whose id is listed. Unknown ids are ignored.
    pub fn delete_many(&self, ids: &[ProductId]) -> Applied {
        let ids: HashSet<ProductId> = ids.iter().copied().collect();
        self.delete_where(|r| ids.contains(&r.id))
    }

    fn delete_where(&self, doomed: impl Fn(&ProductRecord) -> bool) -> Applied {
        if !self.records.iter().any(&doomed) {
            return self.unchanged();
        }
        let records = self
            .records
            .iter()
            .filter(|r| !doomed(*r))
            .cloned()
            .collect();
        Applied {
            store: self.with_records(records),
            changed: true,
        }
    }

    fn with_records(&self, records: Vec<ProductRecord>) -> RecordStore {
        RecordStore {
            records: Arc::new(records),
            high_water: self.high_water,
        }
    }

    fn unchanged(&self) -> Applied {
        Applied {
            store: self.clone(),
            changed: false,
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
