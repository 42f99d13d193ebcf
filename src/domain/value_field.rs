//! ValueField: the required-or-optional scalar behind every contact attribute.

use super::errors::ValidationError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A scalar attribute value with a "must be present" constraint.
///
/// Identity is the value alone: two fields holding the same string are equal
/// and hash the same regardless of their `required` flag.
///
/// # Example
///
/// ```
/// use phonebook::domain::ValueField;
///
/// let field = ValueField::new("555-1234", "phone", false).unwrap();
/// assert_eq!(field.as_str(), "555-1234");
/// assert!(ValueField::new("", "name", true).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ValueField {
    value: String,
    required: bool,
}

impl ValueField {
    /// Create a new field, rejecting an empty value when `required` is set.
    ///
    /// `field` names the attribute in the validation error.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequiredValue` if the field is required
    /// and the value is empty.
    pub fn new(
        value: impl Into<String>,
        field: &'static str,
        required: bool,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        if required && value.is_empty() {
            return Err(ValidationError::MissingRequiredValue { field });
        }
        Ok(Self { value, required })
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this field was constructed as required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the held value is empty (only possible for optional fields).
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl PartialEq for ValueField {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ValueField {}

impl Hash for ValueField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for ValueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
