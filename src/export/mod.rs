//! Export - delimited text for the platform's file-save mechanism.

mod csv;

pub use csv::{export_csv, CsvExport, ExportQuoting, CSV_HEADER, DEFAULT_EXPORT_FILENAME};
