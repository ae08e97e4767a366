/// A field value that parsed but breaks an invariant of its type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the field '{field}' must not be empty")]
    EmptyText { field: &'static str },
    #[error("the field '{field}' must contain at least one element")]
    EmptyCollection { field: &'static str },
    #[error("the field '{field}' is {value}, expected {expected}")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("the field '{field}' is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{0} can not be represented as a rational number")]
    NotRepresentable(String),
}

/// Why a JSON document could not be turned into a value object.
///
/// Nested failures are passed up unchanged, so the error always names the
/// innermost field that was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("the given JSON representation of {type_name} is not a JSON object")]
    NotAnObject { type_name: &'static str },
    #[error("the mandatory field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("the field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("the given text is not valid JSON: {0}")]
    Syntax(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ParseError {
    pub(crate) fn invalid(field: &'static str, reason: impl core::fmt::Display) -> Self {
        ParseError::InvalidField {
            field,
            reason: format!("{reason}"),
        }
    }
}
