use core::fmt::Display;

use super::codec::JsonCodec;
use super::error::ValidationError;

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn trimmed_text(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText { field });
    }
    Ok(if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    })
}

pub(crate) fn max_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub(crate) fn within<T: PartialOrd + Display>(
    field: &'static str,
    value: &T,
    min: Option<T>,
    max: Option<T>,
    expected: &'static str,
) -> Result<(), ValidationError> {
    let below = min.is_some_and(|min| *value < min);
    let above = max.is_some_and(|max| *value > max);
    if below || above {
        return Err(ValidationError::OutOfRange {
            field,
            value: value.to_string(),
            expected,
        });
    }
    Ok(())
}

pub(crate) fn non_negative<T: PartialOrd + Display + Default>(
    field: &'static str,
    value: &T,
) -> Result<(), ValidationError> {
    within(field, value, Some(T::default()), None, "a value >= 0")
}

/// Bounds of an optional nested value object, `customData` included.
pub(crate) fn nested<T: JsonCodec>(value: Option<&T>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), JsonCodec::check_bounds)
}
