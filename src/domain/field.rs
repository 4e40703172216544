//! The `Field` contract shared by every validated value object.

use super::errors::ValidationError;

/// A single value that has passed its type's validation rule.
///
/// Every specialization provides a pure [`Field::validate`] function that
/// turns raw user input into the underlying value. Constructors call it
/// uniformly, so a field value can never exist without having been
/// validated first.
pub trait Field: Sized {
    /// The underlying value type (a string or a date).
    type Value;

    /// Validate raw input and produce the underlying value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing why `raw` was rejected.
    fn validate(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Wrap an already validated value.
    fn from_valid(value: Self::Value) -> Self;

    /// Validate `raw` and construct the field.
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::validate(raw).map(Self::from_valid)
    }
}
