//! Sales - order entry for the sales screen.
//!
//! Orders are numbered `ORD-001`, `ORD-002`, ... and listed newest first.

mod book;
mod form;
mod ledger;
mod record;

pub use book::{SalesBook, SalesError};
pub use form::{product_slug, SaleInput};
pub use ledger::SalesLedger;
pub use record::{OrderId, SaleRecord, SaleStatus, UnknownStatus};
