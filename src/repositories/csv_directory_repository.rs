use crate::error::StorageResult;
use crate::models::Directory;
use crate::repositories::traits::DirectoryRepository;
use crate::storage::codec;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Directory repository backed by a CSV file on disk.
///
/// Saving writes a temporary file next to the target and renames it into
/// place, so readers see either the old or the new contents in full. There is
/// no locking: two processes saving at once race and the last rename wins.
#[derive(Debug, Clone)]
pub struct CsvDirectoryRepository {
    path: PathBuf,
}

impl CsvDirectoryRepository {
    /// Create a repository for the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl DirectoryRepository for CsvDirectoryRepository {
    fn load(&self) -> StorageResult<Directory> {
        match File::open(&self.path) {
            Ok(file) => {
                debug!(path = %self.path.display(), "loading contacts file");
                codec::decode(BufReader::new(file))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "contacts file missing, starting empty");
                Ok(Directory::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            codec::encode(directory, &mut writer)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;

        debug!(
            path = %self.path.display(),
            contacts = directory.len(),
            "saved contacts file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Phone};
    use crate::error::StorageError;
    use crate::models::Record;

    fn sample_directory() -> Directory {
        [Record::new(
            Name::new("Alice").unwrap(),
            vec![Phone::new("555-1234").unwrap()],
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvDirectoryRepository::new(dir.path().join("absent.csv"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvDirectoryRepository::new(dir.path().join("data.csv"));

        repo.save(&sample_directory()).unwrap();
        assert_eq!(repo.load().unwrap(), sample_directory());
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvDirectoryRepository::new(dir.path().join("data.csv"));

        repo.save(&sample_directory()).unwrap();
        repo.save(&Directory::new()).unwrap();

        assert!(repo.load().unwrap().is_empty());
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvDirectoryRepository::new(dir.path().join("nested/deeper/data.csv"));

        repo.save(&sample_directory()).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "not,a,contacts,file\n").unwrap();

        let repo = CsvDirectoryRepository::new(path);
        assert!(matches!(repo.load(), Err(StorageError::Format { .. })));
    }
}
