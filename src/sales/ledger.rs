//! SalesLedger - immutable snapshots of recorded orders, newest first.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{OrderId, SaleInput, SaleRecord, SaleStatus};

#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    sales: Arc<Vec<SaleRecord>>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing orders, keeping their order.
    pub fn from_sales(sales: Vec<SaleRecord>) -> Self {
        Self {
            sales: Arc::new(sales),
        }
    }

    /// The orders a fresh dashboard starts with.
    pub fn seeded() -> Self {
        let rows = [
            ("ORD-001", "John Smith", "Premium Widget", 2, 59.98, SaleStatus::Completed, 15),
            ("ORD-002", "Sarah Johnson", "Deluxe Gadget", 1, 49.99, SaleStatus::Pending, 15),
            ("ORD-003", "Mike Wilson", "Professional Kit", 3, 299.97, SaleStatus::Completed, 14),
            ("ORD-004", "Emily Davis", "Standard Tool", 5, 99.95, SaleStatus::Processing, 14),
            ("ORD-005", "David Brown", "Basic Component", 10, 149.90, SaleStatus::Completed, 13),
        ];
        let sales = rows
            .into_iter()
            .filter_map(|(id, customer, product, quantity, amount, status, day)| {
                Some(SaleRecord {
                    id: OrderId::new(id),
                    customer: customer.to_string(),
                    product: product.to_string(),
                    quantity,
                    amount,
                    status,
                    date: NaiveDate::from_ymd_opt(2024, 1, day)?,
                })
            })
            .collect();
        Self::from_sales(sales)
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaleRecord> {
        self.sales.iter()
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    pub fn get(&self, id: &OrderId) -> Option<&SaleRecord> {
        self.sales.iter().find(|s| &s.id == id)
    }

    /// One past the highest `ORD-<n>` number present; ids of another shape
    /// do not count. `None` once `ORD-18446744073709551615` is taken.
    pub fn next_order_id(&self) -> Option<OrderId> {
        let last = self
            .sales
            .iter()
            .filter_map(|s| s.id.number())
            .max()
            .unwrap_or(0);
        last.checked_add(1).map(OrderId::from_number)
    }

    /// Record a sale dated `date`, placed ahead of every earlier order.
    ///
    /// `None` when no order number is left.
    pub fn record(&self, input: SaleInput, date: NaiveDate) -> Option<(SalesLedger, OrderId)> {
        let id = self.next_order_id()?;
        let mut sales = Vec::with_capacity(self.sales.len() + 1);
        sales.push(input.into_record(id.clone(), date));
        sales.extend(self.sales.iter().cloned());
        Some((Self::from_sales(sales), id))
    }

    /// Orders with the given status, newest first.
    pub fn with_status(&self, status: SaleStatus) -> Vec<&SaleRecord> {
        self.sales.iter().filter(|s| s.status == status).collect()
    }
}
