//! FormFields - raw submitted form values and typed field extraction.

use std::collections::HashMap;

use super::{FieldProblem, ValidationError};

/// Raw name/value pairs as a form submits them.
///
/// Every value is text; typed commands are built from it with the
/// `required_*` accessors, which report the first offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs. Later pairs win on duplicate names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a field value, returning self for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Non-blank text, returned as submitted.
    pub fn required_text(&self, field: &'static str) -> Result<String, ValidationError> {
        let raw = self.raw(field)?;
        if raw.trim().is_empty() {
            return Err(ValidationError::new(field, FieldProblem::Blank));
        }
        Ok(raw.to_string())
    }

    /// Text that may be absent or blank.
    pub fn optional_text(&self, field: &str) -> Option<String> {
        self.get(field)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// A whole number. Surrounding whitespace is ignored.
    pub fn required_integer(&self, field: &'static str) -> Result<i64, ValidationError> {
        let raw = self.raw(field)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(field, FieldProblem::Blank));
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(value);
        }
        // "12.0" and "1e2" are whole numbers too, "12.5" is not
        match parse_finite(trimmed) {
            Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
                Ok(value as i64)
            }
            Some(_) => Err(ValidationError::with_value(
                field,
                FieldProblem::NotAnInteger,
                raw,
            )),
            None => Err(ValidationError::with_value(
                field,
                FieldProblem::NotANumber,
                raw,
            )),
        }
    }

    /// A finite decimal number. Surrounding whitespace is ignored.
    pub fn required_decimal(&self, field: &'static str) -> Result<f64, ValidationError> {
        let raw = self.raw(field)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(field, FieldProblem::Blank));
        }
        parse_finite(trimmed)
            .ok_or_else(|| ValidationError::with_value(field, FieldProblem::NotANumber, raw))
    }

    fn raw(&self, field: &'static str) -> Result<&str, ValidationError> {
        self.get(field)
            .ok_or_else(|| ValidationError::new(field, FieldProblem::Missing))
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Same rule as [`FormFields::required_text`], for values built in code.
pub(crate) fn non_blank(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, FieldProblem::Blank));
    }
    Ok(value)
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::with_value(
            field,
            FieldProblem::NotANumber,
            &value.to_string(),
        ));
    }
    Ok(value)
}
