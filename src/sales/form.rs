use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::{finite, non_blank, FieldProblem, FormFields, ValidationError};
use crate::store::RecordStore;

use super::{OrderId, SaleRecord, SaleStatus};

/// A validated new-sale command: customer and product non-blank, amount
/// finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SaleFields")]
pub struct SaleInput {
    customer: String,
    /// Product display name.
    product: String,
    quantity: i64,
    amount: f64,
    status: SaleStatus,
}

#[derive(Deserialize)]
struct SaleFields {
    customer: String,
    product: String,
    quantity: i64,
    amount: f64,
    #[serde(default)]
    status: SaleStatus,
}

impl TryFrom<SaleFields> for SaleInput {
    type Error = ValidationError;

    fn try_from(fields: SaleFields) -> Result<Self, Self::Error> {
        SaleInput::try_new(
            fields.customer,
            fields.product,
            fields.quantity,
            fields.amount,
            fields.status,
        )
    }
}

impl SaleInput {
    pub const CUSTOMER: &'static str = "customer";
    pub const PRODUCT: &'static str = "product";
    pub const QUANTITY: &'static str = "quantity";
    pub const AMOUNT: &'static str = "amount";
    pub const STATUS: &'static str = "status";

    pub fn try_new(
        customer: impl Into<String>,
        product: impl Into<String>,
        quantity: i64,
        amount: f64,
        status: SaleStatus,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            customer: non_blank(Self::CUSTOMER, customer.into())?,
            product: non_blank(Self::PRODUCT, product.into())?,
            quantity,
            amount: finite(Self::AMOUNT, amount)?,
            status,
        })
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn status(&self) -> SaleStatus {
        self.status
    }

    pub(crate) fn into_record(self, id: OrderId, date: NaiveDate) -> SaleRecord {
        SaleRecord {
            id,
            customer: self.customer,
            product: self.product,
            quantity: self.quantity,
            amount: self.amount,
            status: self.status,
            date,
        }
    }

    /// Parse the new-sale dialog.
    ///
    /// The product field carries a slug picked from the product list; it is
    /// resolved to the display name of the matching record in `products`, or
    /// kept verbatim when nothing matches. A missing status means pending.
    pub fn from_form(form: &FormFields, products: &RecordStore) -> Result<Self, ValidationError> {
        let customer = form.required_text(Self::CUSTOMER)?;
        let product_choice = form.required_text(Self::PRODUCT)?;
        let quantity = form.required_integer(Self::QUANTITY)?;
        let amount = form.required_decimal(Self::AMOUNT)?;
        let status = match form.optional_text(Self::STATUS) {
            None => SaleStatus::default(),
            Some(raw) => raw.parse().map_err(|_| {
                ValidationError::with_value(Self::STATUS, FieldProblem::UnknownOption, &raw)
            })?,
        };

        Ok(Self {
            customer,
            product: resolve_product(&product_choice, products),
            quantity,
            amount,
            status,
        })
    }
}

/// Option value for a product name: lowercase, runs of anything that is not
/// a letter or digit collapsed to `-`.
pub fn product_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn resolve_product(choice: &str, products: &RecordStore) -> String {
    products
        .iter()
        .find(|r| product_slug(&r.name) == choice)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| choice.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::seed_products;

    fn sale_form() -> FormFields {
        FormFields::from_pairs([
            ("customer", "Ada Lovelace"),
            ("product", "professional-kit"),
            ("quantity", "2"),
            ("amount", "199.98"),
        ])
    }

    #[test]
    fn slugs_collapse_separators() {
        assert_eq!(product_slug("Premium Widget"), "premium-widget");
        assert_eq!(product_slug("  Nuts & Bolts!"), "nuts-bolts");
    }

    #[test]
    fn slug_resolves_to_display_name() {
        let products = RecordStore::from_records(seed_products());
        let input = SaleInput::from_form(&sale_form(), &products).unwrap();
        assert_eq!(input.product(), "Professional Kit");
        assert_eq!(input.status(), SaleStatus::Pending);
    }

    #[test]
    fn unknown_slug_is_kept() {
        let mut form = sale_form();
        form.set("product", "mystery-box");
        let input = SaleInput::from_form(&form, &RecordStore::new()).unwrap();
        assert_eq!(input.product(), "mystery-box");
    }

    #[test]
    fn bad_status_is_a_validation_error() {
        let mut form = sale_form();
        form.set("status", "shipped");
        let err = SaleInput::from_form(&form, &RecordStore::new()).unwrap_err();
        assert_eq!(err.field, "status");
        assert_eq!(err.problem, FieldProblem::UnknownOption);
    }

    #[test]
    fn typed_input_rejects_blank_customer() {
        let err = SaleInput::try_new(" ", "Deluxe Gadget", 1, 49.99, SaleStatus::Pending)
            .unwrap_err();
        assert_eq!(err.field, "customer");
        assert_eq!(err.problem, FieldProblem::Blank);
    }

    #[test]
    fn typed_input_rejects_infinite_amount() {
        let err = SaleInput::try_new("Ada", "Deluxe Gadget", 1, f64::INFINITY, SaleStatus::Pending)
            .unwrap_err();
        assert_eq!(err.field, "amount");
    }
}
