use phonebook::error::{StorageError, StorageResult};
use phonebook::models::Directory;
use phonebook::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the "stored" directory in memory, tracks method calls for
/// verification, and can be told to fail saves.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    directory: Arc<Mutex<Directory>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a new empty MockDirectoryRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that starts out holding `directory`.
    pub fn with_directory(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.directory.lock().unwrap() = directory;
        repo
    }

    /// The directory as last saved.
    pub fn stored(&self) -> Directory {
        self.directory.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self) -> StorageResult<Directory> {
        self.track_call("load");
        Ok(self.directory.lock().unwrap().clone())
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }

        *self.directory.lock().unwrap() = directory.clone();
        Ok(())
    }
}
