use crate::error::StorageResult;
use crate::models::Directory;

/// Repository for the contact directory.
///
/// Provides abstraction over where the directory is stored, enabling
/// different implementations (flat file, in-memory mock). Every call works
/// on the whole directory: there is no partial load or incremental save.
pub trait DirectoryRepository: Send + Sync {
    /// Read the full directory. A store that does not exist yet is empty.
    fn load(&self) -> StorageResult<Directory>;

    /// Replace the stored directory with `directory`.
    fn save(&self, directory: &Directory) -> StorageResult<()>;
}
