//! Notices - the success messages a dashboard shows after each operation.
//!
//! Operations hand a [`Notice`] to a [`NoticeSink`]. Delivery is fire and
//! forget: a sink that fails is logged, the operation still succeeds.

mod sink;

use serde::{Deserialize, Serialize};

pub use sink::{LogNoticeSink, LogNoticeSinkError, NoticeSink};

#[cfg(feature = "emitter")]
pub use sink::EmitterNoticeSink;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    ProductAdded { id: u64 },
    ProductUpdated { id: u64 },
    ProductDeleted { id: u64, name: String },
    ProductsDeleted { count: usize },
    ExportCompleted { filename: String, rows: usize },
    SaleCreated { id: String },
    ProfileSaved,
}

impl Notice {
    /// Event name used when a notice is emitted.
    pub fn kind(&self) -> &'static str {
        match self {
            Notice::ProductAdded { .. } => "ProductAdded",
            Notice::ProductUpdated { .. } => "ProductUpdated",
            Notice::ProductDeleted { .. } => "ProductDeleted",
            Notice::ProductsDeleted { .. } => "ProductsDeleted",
            Notice::ExportCompleted { .. } => "ExportCompleted",
            Notice::SaleCreated { .. } => "SaleCreated",
            Notice::ProfileSaved => "ProfileSaved",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notice::ProductAdded { .. } => "Product Added",
            Notice::ProductUpdated { .. } => "Product Updated",
            Notice::ProductDeleted { .. } => "Product Deleted",
            Notice::ProductsDeleted { .. } => "Products Deleted",
            Notice::ExportCompleted { .. } => "Export Successful",
            Notice::SaleCreated { .. } => "Sale Created",
            Notice::ProfileSaved => "Profile updated",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notice::ProductAdded { .. } => "Your product has been added successfully.".to_string(),
            Notice::ProductUpdated { .. } => {
                "Your product has been updated successfully.".to_string()
            }
            Notice::ProductDeleted { name, .. } => {
                format!("{} has been deleted successfully.", name)
            }
            Notice::ProductsDeleted { count } => {
                format!("{} products have been deleted successfully.", count)
            }
            Notice::ExportCompleted { .. } => "Products exported to CSV successfully.".to_string(),
            Notice::SaleCreated { .. } => "New sale has been recorded successfully.".to_string(),
            Notice::ProfileSaved => "Your profile has been updated successfully.".to_string(),
        }
    }

    /// JSON payload carried by emitted notices.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
