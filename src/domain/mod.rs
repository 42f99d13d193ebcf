//! Domain value objects and types.
//!
//! This module contains the typed attributes a contact is made of. Both
//! `Name` and `Phone` are built on `ValueField` and compare by value, so
//! they can key maps and be deduplicated in sets.

pub mod errors;
pub mod name;
pub mod phone;
pub mod value_field;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
pub use value_field::ValueField;
