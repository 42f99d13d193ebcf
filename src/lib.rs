//! Phonebook - a personal contact directory backed by a flat CSV file.
//!
//! Contacts are named records owning zero or more phone numbers. Every
//! command runs a full load, mutate, store cycle against the backing file;
//! no directory state lives between commands.
//!
//! # Architecture
//!
//! - **domain**: Value fields (`Name`, `Phone`) with value-based equality
//! - **models**: `Record` and the `Directory` aggregate with their mutations
//! - **storage**: Encoding a directory to the CSV file format and back
//! - **repositories**: Repository trait and the file-backed implementation
//! - **services**: The lookup step every command handler starts with
//! - **commands**: Command table, dispatch, and handlers
//! - **repl**: The interactive input loop
//! - **config**: Configuration from environment variables
//! - **error**: Error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;
pub mod services;
pub mod storage;

pub use commands::{CommandContext, CommandTable, Reply};
pub use config::Config;
pub use domain::{Name, Phone, ValidationError, ValueField};
pub use error::{CommandError, ConfigError, DirectoryError, StorageError};
pub use models::{Directory, Record, RecordOutcome};
pub use repl::Session;
pub use repositories::{CsvDirectoryRepository, DirectoryRepository};
pub use services::LookupService;
