//! Persistence codec for the contacts file.
//!
//! The `csv` crate handles the tabular layer; `codec` maps rows to and from
//! a [`Directory`](crate::models::Directory).

pub mod codec;

pub use codec::{decode, decode_str, encode, encode_to_string, HEADER};
