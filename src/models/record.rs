//! Contact record: a name and its phone numbers.

use crate::domain::{Name, Phone};
use crate::error::{RecordError, RecordResult};
use std::fmt;

/// One contact in the address book.
///
/// The name is fixed at creation. Phones keep insertion order and may contain
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if the name is empty.
    pub fn new(name: impl Into<String>) -> RecordResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and append a phone.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<()> {
        let index = self.position(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// The old entry is removed and the new one is appended, so the edited
    /// phone always ends up last. The old entry is removed before `new_phone`
    /// is validated, so a malformed replacement still drops it.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> RecordResult<()> {
        let index = self.position(old_phone)?;
        self.phones.remove(index);
        self.phones.push(Phone::new(new_phone)?);
        Ok(())
    }

    /// Look up a phone by exact value. `None` when absent.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join(", ")
        )
    }
}
