use std::fmt;

/// Why a single form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    /// The field was not submitted at all.
    Missing,
    /// The field was submitted but holds only whitespace.
    Blank,
    /// The field should hold a finite decimal number.
    NotANumber,
    /// The field should hold a whole number.
    NotAnInteger,
    /// The field should hold one of a fixed set of options.
    UnknownOption,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing => write!(f, "is required"),
            FieldProblem::Blank => write!(f, "must not be blank"),
            FieldProblem::NotANumber => write!(f, "must be a number"),
            FieldProblem::NotAnInteger => write!(f, "must be a whole number"),
            FieldProblem::UnknownOption => write!(f, "is not one of the allowed options"),
        }
    }
}

/// A form failed required-field or numeric validation.
///
/// Raised while parsing, before any store is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub problem: FieldProblem,
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: &'static str, problem: FieldProblem) -> Self {
        Self {
            field,
            problem,
            value: None,
        }
    }

    pub fn with_value(field: &'static str, problem: FieldProblem, value: &str) -> Self {
        Self {
            field,
            problem,
            value: Some(value.to_string()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "field '{}' {} (got {:?})", self.field, self.problem, value),
            None => write!(f, "field '{}' {}", self.field, self.problem),
        }
    }
}

impl std::error::Error for ValidationError {}
