use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const ORDER_PREFIX: &str = "ORD-";

/// Order number such as `ORD-007`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// `ORD-` followed by the number padded to at least three digits.
    pub fn from_number(number: u64) -> Self {
        OrderId(format!("{}{:03}", ORDER_PREFIX, number))
    }

    /// Wrap an arbitrary id, e.g. one imported from elsewhere.
    pub fn new(id: impl Into<String>) -> Self {
        OrderId(id.into())
    }

    /// The numeric part, when the id has the `ORD-<digits>` shape.
    pub fn number(&self) -> Option<u64> {
        self.0.strip_prefix(ORDER_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Pending,
        SaleStatus::Processing,
        SaleStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Processing => "processing",
            SaleStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string names no known status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sale status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for SaleStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One sales order row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: OrderId,
    pub customer: String,
    pub product: String,
    pub quantity: i64,
    pub amount: f64,
    pub status: SaleStatus,
    pub date: NaiveDate,
}
