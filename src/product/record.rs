use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product within one session's record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn get(self) -> u64 {
        self.0
    }

    /// `None` past `u64::MAX`.
    pub(crate) fn next(self) -> Option<ProductId> {
        self.0.checked_add(1).map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

/// A product row.
///
/// `stock` and `price` are not range-checked; negative values are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
}

impl ProductRecord {
    pub fn stock_status(&self, low_stock_threshold: i64) -> StockStatus {
        StockStatus::classify(self.stock, low_stock_threshold)
    }

    /// Case-insensitive substring match over name, sku and category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.sku, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Stock level band shown next to each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Low,
    InStock,
}

impl StockStatus {
    pub fn classify(stock: i64, low_stock_threshold: i64) -> Self {
        if stock < low_stock_threshold {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }

    pub fn is_low(self) -> bool {
        self == StockStatus::Low
    }
}
