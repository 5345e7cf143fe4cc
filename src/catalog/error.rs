use std::fmt;

use crate::form::ValidationError;
use crate::product::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The submitted form did not parse; the store is unchanged.
    Validation(ValidationError),
    /// An update named an id the store does not hold.
    NotFound { id: ProductId },
    /// The store already handed out id `u64::MAX`.
    IdsExhausted,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation(err) => write!(f, "invalid product: {}", err),
            CatalogError::NotFound { id } => write!(f, "product not found: {}", id),
            CatalogError::IdsExhausted => write!(f, "no product ids left"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Validation(err) => Some(err),
            CatalogError::NotFound { .. } | CatalogError::IdsExhausted => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::Validation(err)
    }
}
