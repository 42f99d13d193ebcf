//! Lookup service.
//!
//! Loads the directory and answers "does this contact exist" in one call, so
//! every command handler starts from the same load-then-check step.

use crate::error::StorageResult;
use crate::models::Directory;
use crate::repositories::DirectoryRepository;
use std::sync::Arc;
use tracing::debug;

/// Load/check/store front for the directory repository.
///
/// Each `lookup` reads the whole store. There is no cached state between
/// calls, which is fine at personal-directory scale.
#[derive(Clone)]
pub struct LookupService {
    repository: Arc<dyn DirectoryRepository>,
}

impl LookupService {
    /// Create a new lookup service over `repository`.
    pub fn new(repository: Arc<dyn DirectoryRepository>) -> Self {
        Self { repository }
    }

    /// Load the directory and report whether `name` is one of its keys.
    pub fn lookup(&self, name: &str) -> StorageResult<(Directory, bool)> {
        let directory = self.repository.load()?;
        let exists = directory.contains(name);
        debug!(name, exists, "looked up contact");
        Ok((directory, exists))
    }

    /// Load the directory without checking for a particular name.
    pub fn load_all(&self) -> StorageResult<Directory> {
        self.repository.load()
    }

    /// Persist `directory`, replacing the stored one.
    pub fn store(&self, directory: &Directory) -> StorageResult<()> {
        self.repository.save(directory)
    }
}
