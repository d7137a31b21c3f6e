//! Data model of the contact assistant.

pub mod record;

pub use record::Record;
