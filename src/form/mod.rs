//! Forms - raw text input parsed into typed, validated commands.
//!
//! Nothing in the crate mutates state from raw input directly. A form is
//! first turned into a command object (`ProductInput`, `SaleInput`, ...)
//! through [`FormFields`]; only a command that parsed cleanly reaches a
//! mutation.

mod error;
mod fields;

pub use error::{FieldProblem, ValidationError};
pub use fields::FormFields;
pub(crate) use fields::{finite, non_blank};
