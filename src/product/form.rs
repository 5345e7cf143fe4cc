use serde::{Deserialize, Serialize};

use crate::form::{finite, non_blank, FormFields, ValidationError};

use super::{ProductId, ProductRecord};

/// A validated create/update command for a product.
///
/// Only obtainable through [`ProductInput::try_new`], [`ProductInput::from_form`]
/// or deserialization, all of which apply the same checks: name, sku and
/// category non-blank, price finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductFields")]
pub struct ProductInput {
    name: String,
    sku: String,
    category: String,
    stock: i64,
    price: f64,
}

#[derive(Deserialize)]
struct ProductFields {
    name: String,
    sku: String,
    category: String,
    stock: i64,
    price: f64,
}

impl TryFrom<ProductFields> for ProductInput {
    type Error = ValidationError;

    fn try_from(fields: ProductFields) -> Result<Self, Self::Error> {
        ProductInput::try_new(
            fields.name,
            fields.sku,
            fields.category,
            fields.stock,
            fields.price,
        )
    }
}

impl ProductInput {
    pub const NAME: &'static str = "name";
    pub const SKU: &'static str = "sku";
    pub const CATEGORY: &'static str = "category";
    pub const STOCK: &'static str = "stock";
    pub const PRICE: &'static str = "price";

    /// Checks fields in form order and reports the first failure.
    pub fn try_new(
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        stock: i64,
        price: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank(Self::NAME, name.into())?,
            sku: non_blank(Self::SKU, sku.into())?,
            category: non_blank(Self::CATEGORY, category.into())?,
            stock,
            price: finite(Self::PRICE, price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Parse the product dialog's fields. Fails on the first missing, blank or
    /// non-numeric field, in form order.
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            name: form.required_text(Self::NAME)?,
            sku: form.required_text(Self::SKU)?,
            category: form.required_text(Self::CATEGORY)?,
            stock: form.required_integer(Self::STOCK)?,
            price: form.required_decimal(Self::PRICE)?,
        })
    }

    /// Pre-filled form for editing an existing record.
    pub fn to_form(&self) -> FormFields {
        FormFields::new()
            .with(Self::NAME, self.name.as_str())
            .with(Self::SKU, self.sku.as_str())
            .with(Self::CATEGORY, self.category.as_str())
            .with(Self::STOCK, self.stock.to_string())
            .with(Self::PRICE, self.price.to_string())
    }

    pub(crate) fn into_record(self, id: ProductId) -> ProductRecord {
        ProductRecord {
            id,
            name: self.name,
            sku: self.sku,
            category: self.category,
            stock: self.stock,
            price: self.price,
        }
    }
}

/// Starting point for an edit. Fails for records loaded with blank text.
impl TryFrom<&ProductRecord> for ProductInput {
    type Error = ValidationError;

    fn try_from(record: &ProductRecord) -> Result<Self, Self::Error> {
        ProductInput::try_new(
            record.name.clone(),
            record.sku.clone(),
            record.category.clone(),
            record.stock,
            record.price,
        )
    }
}
