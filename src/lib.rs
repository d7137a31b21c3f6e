//! Contact assistant - an interactive, in-memory address book.
//!
//! The bot reads commands from the terminal, keeps contacts and their phone
//! numbers in memory, and answers with plain text.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`)
//! - **models**: The contact `Record`
//! - **book**: The insertion-ordered `AddressBook`
//! - **commands**: Parsing, handlers and the error-to-message translator
//! - **repl**: The read/dispatch/print loop
//! - **error**: Error types for every layer
//! - **config**: Configuration from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use commands::{dispatch, Command, Reply};
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, RecordError};
pub use models::Record;
pub use repl::Repl;
