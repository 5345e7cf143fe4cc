//! Products - the record type held by the store and the command that
//! creates or replaces one.

mod form;
mod record;
mod seed;

pub use form::ProductInput;
pub use record::{ProductId, ProductRecord, StockStatus};
pub use seed::seed_products;
