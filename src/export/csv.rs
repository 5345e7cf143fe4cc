//! CSV export of the current product list.

use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// Header line of every export.
pub const CSV_HEADER: &str = "Product,SKU,Category,Stock,Price";

/// Default file name handed to the save mechanism.
pub const DEFAULT_EXPORT_FILENAME: &str = "products.csv";

const FIELD_DELIMITER: char = ',';
const RECORD_DELIMITER: &str = "\n";
const TEXT_QUALIFIER: char = '"';

/// How field values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportQuoting {
    /// Raw values, no escaping. A comma inside a value shifts the columns of
    /// that line; kept as the default because consumers of earlier exports
    /// rely on this exact byte layout.
    #[default]
    None,
    /// Every field wrapped in double quotes, embedded quotes doubled. The
    /// header is written unquoted.
    Quoted,
}

/// A finished export: file name plus text body, ready for a one-shot save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

impl CsvExport {
    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body.into_bytes()
    }
}

/// Serialize `records` in the given order: header, then one line per record
/// as `name,sku,category,stock,price`, joined by `\n` with no trailing
/// newline.
pub fn export_csv<'a, I>(records: I, quoting: ExportQuoting) -> String
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(records.into_iter().map(|r| record_line(r, quoting)));
    lines.join(RECORD_DELIMITER)
}

fn record_line(record: &ProductRecord, quoting: ExportQuoting) -> String {
    let stock = record.stock.to_string();
    let price = record.price.to_string();
    [
        record.name.as_str(),
        record.sku.as_str(),
        record.category.as_str(),
        stock.as_str(),
        price.as_str(),
    ]
    .iter()
    .map(|value| qualify(value, quoting))
    .collect::<Vec<_>>()
    .join(&FIELD_DELIMITER.to_string())
}

fn qualify(value: &str, quoting: ExportQuoting) -> String {
    match quoting {
        ExportQuoting::None => value.to_string(),
        ExportQuoting::Quoted => {
            let q = TEXT_QUALIFIER;
            let escaped = value.replace(q, &format!("{}{}", q, q));
            format!("{}{}{}", q, escaped, q)
        }
    }
}
