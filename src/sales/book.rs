use std::fmt;

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use crate::form::{FormFields, ValidationError};
use crate::notice::{LogNoticeSink, Notice, NoticeSink};
use crate::store::RecordStore;

use super::{OrderId, SaleInput, SalesLedger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalesError {
    Validation(ValidationError),
    /// Every `ORD-<n>` number up to `u64::MAX` is already in the ledger.
    OrderNumbersExhausted,
}

impl fmt::Display for SalesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalesError::Validation(err) => write!(f, "invalid sale: {}", err),
            SalesError::OrderNumbersExhausted => write!(f, "no order numbers left"),
        }
    }
}

impl std::error::Error for SalesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SalesError::Validation(err) => Some(err),
            SalesError::OrderNumbersExhausted => None,
        }
    }
}

impl From<ValidationError> for SalesError {
    fn from(err: ValidationError) -> Self {
        SalesError::Validation(err)
    }
}

/// The sales screen's owned state: the ledger plus where notices go.
pub struct SalesBook<S: NoticeSink = LogNoticeSink> {
    ledger: SalesLedger,
    notices: S,
}

impl SalesBook<LogNoticeSink> {
    pub fn new(ledger: SalesLedger) -> Self {
        Self::with_sink(ledger, LogNoticeSink::new())
    }

    pub fn seeded() -> Self {
        Self::new(SalesLedger::seeded())
    }
}

impl<S: NoticeSink> SalesBook<S> {
    pub fn with_sink(ledger: SalesLedger, notices: S) -> Self {
        Self { ledger, notices }
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    pub fn sink(&self) -> &S {
        &self.notices
    }

    /// Record a sale dated today, as a UTC calendar date.
    pub fn record(&mut self, input: SaleInput) -> Result<OrderId, SalesError> {
        self.record_on(input, Utc::now().date_naive())
    }

    pub fn record_on(&mut self, input: SaleInput, date: NaiveDate) -> Result<OrderId, SalesError> {
        let (ledger, id) = self
            .ledger
            .record(input, date)
            .ok_or(SalesError::OrderNumbersExhausted)?;
        self.ledger = ledger;
        debug!(id = %id, "sale recorded");
        let notice = Notice::SaleCreated { id: id.to_string() };
        if let Err(e) = self.notices.deliver(&notice) {
            warn!(kind = notice.kind(), error = %e, "notice delivery failed");
        }
        Ok(id)
    }

    /// Parse the new-sale form against the current product list, then
    /// record it dated today.
    pub fn record_from_form(
        &mut self,
        form: &FormFields,
        products: &RecordStore,
    ) -> Result<OrderId, SalesError> {
        let input = SaleInput::from_form(form, products)?;
        self.record(input)
    }
}
