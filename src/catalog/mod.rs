//! Catalog - the product list engine as one owned state object.
//!
//! ## Example
//!
//! ```ignore
//! use stockroom::{ProductCatalog, SortKey, CategoryFilter};
//!
//! let mut catalog = ProductCatalog::seeded();
//! catalog.set_search("kit");
//! catalog.sort_by(SortKey::Price);
//!
//! for row in catalog.view().iter() {
//!     println!("{} {}", row.name, row.price);
//! }
//!
//! catalog.toggle_all();
//! catalog.delete_selected();
//! let csv = catalog.export();
//! ```

mod catalog;
mod error;

pub use catalog::ProductCatalog;
pub use error::CatalogError;
