//! Data models for the contact directory.

pub mod directory;
pub mod record;

pub use directory::Directory;
pub use record::{join_phones, Record, RecordOutcome};
