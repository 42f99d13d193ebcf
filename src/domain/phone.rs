//! Phone value object.

use super::errors::ValidationError;
use super::value_field::ValueField;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number belonging to a contact.
///
/// Phones are optional at the field level and carry no format validation:
/// any token the user typed is kept as-is. Equality and hashing are by
/// value, which is what record dedup and membership checks rely on.
///
/// # Example
///
/// ```
/// use phonebook::domain::Phone;
///
/// let phone = Phone::new("+1-555-1234").unwrap();
/// assert_eq!(phone.as_str(), "+1-555-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(ValueField);

impl Phone {
    /// Create a new Phone.
    ///
    /// # Errors
    ///
    /// Phones are optional, so this currently always succeeds.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        ValueField::new(phone, "phone", false).map(Self)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the number is blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
