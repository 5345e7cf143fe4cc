use serde::{Deserialize, Serialize};

use crate::export::{ExportQuoting, DEFAULT_EXPORT_FILENAME};

/// Stock below this many units is flagged as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 50;

/// Tunables for a [`ProductCatalog`](crate::ProductCatalog).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```ignore
/// let config = CatalogConfig::from_json(r#"{ "export_quoting": "quoted" }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub low_stock_threshold: i64,
    pub export_filename: String,
    pub export_quoting: ExportQuoting,
    /// Report `NotFound` when an update names an id that is not in the store.
    /// When false, such updates are silently ignored.
    pub reject_unknown_updates: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            export_quoting: ExportQuoting::None,
            reject_unknown_updates: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_export_quoting(mut self, quoting: ExportQuoting) -> Self {
        self.export_quoting = quoting;
        self
    }

    pub fn with_reject_unknown_updates(mut self, reject: bool) -> Self {
        self.reject_unknown_updates = reject;
        self
    }
}
