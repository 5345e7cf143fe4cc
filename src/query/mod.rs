//! Query Engine - derives the displayed product list from the store.
//!
//! ## Example
//!
//! ```ignore
//! use stockroom::{run_query, QueryState, SortKey, SortDirection, CategoryFilter};
//!
//! let state = QueryState::new()
//!     .with_search("widget")
//!     .with_category(CategoryFilter::parse("Electronics"))
//!     .with_sort(SortKey::Price, SortDirection::Desc);
//!
//! let view = run_query(&store, &state);
//! ```

mod collate;
mod engine;
mod state;

pub use collate::collate;
pub use engine::{category_options, run_query, FilteredView};
pub use state::{CategoryFilter, QueryState, SortDirection, SortKey, ALL_CATEGORIES};
