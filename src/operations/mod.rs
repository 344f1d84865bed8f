pub mod validation;

pub use validation::{parse_selection, ValidationError};
