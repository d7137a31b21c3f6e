//! Insertion-ordered name → record store.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::HashMap;

/// The address book.
///
/// Records are keyed by their name. Iteration follows insertion order;
/// overwriting an existing name keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record. `None` when the name is unknown.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable counterpart of [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Keyed access that treats an unknown name as an error.
    ///
    /// # Errors
    ///
    /// Returns `BookError::MissingKey` if the name is not in the book.
    pub fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::MissingKey(name.to_string()))
    }

    /// Remove a record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if the name is not in the book.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.records().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        book.add_record(record("alice", "1111111111"));
        assert_eq!(book.len(), 1);
        assert!(book.contains("alice"));
        assert_eq!(book.find("alice").unwrap().phones().len(), 1);
        assert!(book.find("bob").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));
        book.add_record(record("bob", "2222222222"));
        book.add_record(record("alice", "3333333333"));

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["alice", "bob"]);
        assert_eq!(
            book.find("alice").unwrap().phones()[0].as_str(),
            "3333333333"
        );
    }

    #[test]
    fn test_records_follow_insertion_order() {
        let mut book = AddressBook::new();
        for (name, phone) in [("zoe", "1111111111"), ("adam", "2222222222"), ("mia", "3333333333")] {
            book.add_record(record(name, phone));
        }
        assert_eq!(names(&book), vec!["zoe", "adam", "mia"]);
    }

    #[test]
    fn test_record_mut_missing_key() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.record_mut("ghost").unwrap_err(),
            BookError::MissingKey("ghost".to_string())
        );

        book.add_record(record("alice", "1111111111"));
        book.record_mut("alice")
            .unwrap()
            .add_phone("2222222222")
            .unwrap();
        assert_eq!(book.find("alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));
        book.add_record(record("bob", "2222222222"));

        let removed = book.delete("alice").unwrap();
        assert_eq!(removed.name().as_str(), "alice");
        assert_eq!(names(&book), vec!["bob"]);

        assert_eq!(
            book.delete("alice").unwrap_err(),
            BookError::RecordNotFound("alice".to_string())
        );
    }

    #[test]
    fn test_readd_after_delete_goes_last() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));
        book.add_record(record("bob", "2222222222"));
        book.delete("alice").unwrap();
        book.add_record(record("alice", "3333333333"));
        assert_eq!(names(&book), vec!["bob", "alice"]);
    }
}
