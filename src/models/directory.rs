//! Directory: every contact, keyed by name.

use crate::domain::Name;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Record;
use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

/// The full set of contacts, keyed by the contact's name.
///
/// Every entry's key equals its record's name; the methods below are the
/// only way to insert, so the invariant holds for any directory built
/// through this API. Iteration is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record already stored under its name.
    ///
    /// This does not merge phones; callers that want "append to an existing
    /// contact" must look the record up and call
    /// [`Record::add_phones`] instead.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "adding record");
        self.records.insert(key, record)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no such contact exists.
    pub fn delete_record(&mut self, name: &Name) -> DirectoryResult<Record> {
        debug!(name = %name, "deleting record");
        self.records
            .remove(name.as_str())
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }

    /// Store `new_record` in place of the record currently under `name`.
    ///
    /// When `new_record` carries a different name this is a rename: the
    /// entry under `name` is removed and `new_record` is inserted under its
    /// own name. Returns the record that was displaced, if any.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::AlreadyExists` if a rename would overwrite
    /// another contact. The directory is unchanged in that case.
    pub fn change_record(
        &mut self,
        name: &Name,
        new_record: Record,
    ) -> DirectoryResult<Option<Record>> {
        if new_record.name() == name {
            return Ok(self.add_record(new_record));
        }

        if self.contains(new_record.name().as_str()) {
            return Err(DirectoryError::AlreadyExists(new_record.name().to_string()));
        }

        debug!(from = %name, to = %new_record.name(), "renaming record via change");
        let previous = self.records.remove(name.as_str());
        self.add_record(new_record);
        Ok(previous)
    }

    /// Move the record under `old` to `new`, keeping its phones.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if `old` is absent and
    /// `DirectoryError::AlreadyExists` if `new` is already taken.
    pub fn rename_record(&mut self, old: &Name, new: Name) -> DirectoryResult<()> {
        if old == &new {
            return if self.contains(old.as_str()) {
                Ok(())
            } else {
                Err(DirectoryError::NotFound(old.to_string()))
            };
        }
        if self.contains(new.as_str()) {
            return Err(DirectoryError::AlreadyExists(new.to_string()));
        }

        let record = self.delete_record(old)?;
        self.add_record(record.renamed(new));
        Ok(())
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Whether a contact with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory has no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, sorted by name.
    pub fn records(&self) -> btree_map::Values<'_, String, Record> {
        self.records.values()
    }

    /// Iterate over `(name, record)` pairs, sorted by name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;

    fn record(name: &str, phones: &[&str]) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            phones.iter().map(|p| Phone::new(*p).unwrap()).collect(),
        )
    }

    fn name(value: &str) -> Name {
        Name::new(value).unwrap()
    }

    #[test]
    fn test_add_record_keys_by_name() {
        let mut dir = Directory::new();
        let rec = record("Alice", &["1"]);
        dir.add_record(rec.clone());

        assert_eq!(dir.get("Alice"), Some(&rec));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_add_record_overwrites_without_merging() {
        let mut dir = Directory::new();
        dir.add_record(record("Alice", &["1"]));
        let previous = dir.add_record(record("Alice", &["2"]));

        assert_eq!(previous, Some(record("Alice", &["1"])));
        assert_eq!(dir.get("Alice"), Some(&record("Alice", &["2"])));
    }

    #[test]
    fn test_delete_record() {
        let mut dir: Directory = [record("Alice", &["1"]), record("Bob", &["2"])]
            .into_iter()
            .collect();

        let removed = dir.delete_record(&name("Alice")).unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(!dir.contains("Alice"));
        assert!(dir.contains("Bob"));
    }

    #[test]
    fn test_delete_record_missing_is_error() {
        let mut dir = Directory::new();
        assert_eq!(
            dir.delete_record(&name("Ghost")),
            Err(DirectoryError::NotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn test_change_record_same_name_overwrites() {
        let mut dir: Directory = [record("Alice", &["1"])].into_iter().collect();
        let updated = record("Alice", &["1", "2"]);

        dir.change_record(&name("Alice"), updated.clone()).unwrap();
        assert_eq!(dir.get("Alice"), Some(&updated));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_change_record_with_new_name_renames() {
        let mut dir: Directory = [record("Alice", &["1"])].into_iter().collect();
        let renamed = record("Alicia", &["1"]);

        let previous = dir.change_record(&name("Alice"), renamed.clone()).unwrap();
        assert_eq!(previous, Some(record("Alice", &["1"])));
        assert_eq!(dir.get("Alicia"), Some(&renamed));
        assert!(!dir.contains("Alice"));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_change_record_rename_onto_existing_fails() {
        let mut dir: Directory = [record("Alice", &["1"]), record("Bob", &["2"])]
            .into_iter()
            .collect();
        let before = dir.clone();

        let result = dir.change_record(&name("Alice"), record("Bob", &["1"]));
        assert_eq!(result, Err(DirectoryError::AlreadyExists("Bob".to_string())));
        assert_eq!(dir, before);
    }

    #[test]
    fn test_rename_record() {
        let mut dir: Directory = [record("Alice", &["1", "2"])].into_iter().collect();
        dir.rename_record(&name("Alice"), name("Alicia")).unwrap();

        assert_eq!(dir.get("Alicia"), Some(&record("Alicia", &["1", "2"])));
        assert!(!dir.contains("Alice"));
    }

    #[test]
    fn test_rename_record_errors() {
        let mut dir: Directory = [record("Alice", &[]), record("Bob", &[])]
            .into_iter()
            .collect();

        assert_eq!(
            dir.rename_record(&name("Ghost"), name("Casper")),
            Err(DirectoryError::NotFound("Ghost".to_string()))
        );
        assert_eq!(
            dir.rename_record(&name("Alice"), name("Bob")),
            Err(DirectoryError::AlreadyExists("Bob".to_string()))
        );
        assert!(dir.rename_record(&name("Alice"), name("Alice")).is_ok());
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let dir: Directory = [record("Carol", &[]), record("Alice", &[]), record("Bob", &[])]
            .into_iter()
            .collect();
        let names: Vec<&str> = dir.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}
