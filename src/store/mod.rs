//! Record Store - the product list for one session.

mod record_store;

pub use record_store::{Applied, RecordStore};
