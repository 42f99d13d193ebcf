//! Record model representing one contact in the directory.

use crate::domain::{Name, Phone};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A contact: a name plus the phone numbers it owns.
///
/// The name is fixed at construction. Phones never hold two equal values
/// after an add; construction itself keeps whatever it is given so that a
/// decoded row is represented faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

/// Outcome of a phone-level mutation on a [`Record`].
///
/// `Display` renders the status line shown to the user. A missing phone is a
/// normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Phones were appended (requested values, whether or not they were new)
    PhonesAdded { name: Name, phones: Vec<Phone> },

    /// A phone was replaced in place
    PhoneChanged { name: Name, old: Phone, new: Phone },

    /// A phone was removed
    PhoneDeleted { name: Name, phone: Phone },

    /// The targeted phone is not on the record; nothing changed
    PhoneNotFound { name: Name, phone: Phone },
}

impl RecordOutcome {
    /// Whether the operation found nothing to act on.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PhoneNotFound { .. })
    }
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhonesAdded { name, phones } => {
                write!(
                    f,
                    "Phone numbers {} for user {} added successfully.",
                    join_phones(phones),
                    name
                )
            }
            Self::PhoneChanged { name, old, new } => write!(
                f,
                "The phone number {} for the user {} has been changed to {}.",
                old, name, new
            ),
            Self::PhoneDeleted { name, phone } => write!(
                f,
                "Phone number {} for user {} deleted successfully.",
                phone, name
            ),
            Self::PhoneNotFound { name, phone } => {
                write!(f, "Phone number {} for user {} not found.", phone, name)
            }
        }
    }
}

/// Join phone values with `", "` for display.
pub fn join_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Record {
    /// Create a new record with the given phones.
    pub fn new(name: Name, phones: Vec<Phone>) -> Self {
        Self { name, phones }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in display order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Whether `phone` is on this record (by value).
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Append phones, then drop value duplicates keeping the first occurrence.
    pub fn add_phones(&mut self, new_phones: Vec<Phone>) -> RecordOutcome {
        self.phones.extend(new_phones.iter().cloned());

        let mut seen = HashSet::with_capacity(self.phones.len());
        self.phones.retain(|phone| seen.insert(phone.clone()));

        RecordOutcome::PhonesAdded {
            name: self.name.clone(),
            phones: new_phones,
        }
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> RecordOutcome {
        match self.phones.iter().position(|phone| phone == old) {
            Some(index) => {
                self.phones[index] = new.clone();
                RecordOutcome::PhoneChanged {
                    name: self.name.clone(),
                    old: old.clone(),
                    new,
                }
            }
            None => RecordOutcome::PhoneNotFound {
                name: self.name.clone(),
                phone: old.clone(),
            },
        }
    }

    /// Remove the first occurrence of `phone`.
    pub fn delete_phone(&mut self, phone: &Phone) -> RecordOutcome {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                RecordOutcome::PhoneDeleted {
                    name: self.name.clone(),
                    phone: phone.clone(),
                }
            }
            None => RecordOutcome::PhoneNotFound {
                name: self.name.clone(),
                phone: phone.clone(),
            },
        }
    }

    /// Consume the record, keeping its phones under a different name.
    pub(crate) fn renamed(self, name: Name) -> Self {
        Self {
            name,
            phones: self.phones,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, join_phones(&self.phones))
    }
}
