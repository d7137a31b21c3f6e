//! Command parsing and dispatch.
//!
//! A line of input is split into a command word and its arguments, routed to
//! a handler, and turned into the text the bot prints back.

pub mod handlers;

pub use handlers::{
    add_contact, change_contact, input_error, show_all, show_phone, CONTACT_NOT_FOUND,
    INVALID_FORMAT, MISSING_CONTACT,
};

use crate::book::AddressBook;
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// The commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Hello,
    Add,
    Change,
    Phone,
    All,
    Unknown,
}

impl Command {
    /// Map a command word to a command. Matching is case-sensitive.
    pub fn from_word(word: &str) -> Self {
        match word {
            "close" | "exit" => Command::Exit,
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            _ => Command::Unknown,
        }
    }
}

/// Split a raw input line into a command and its arguments.
///
/// An empty or blank line yields `Command::Unknown`.
pub fn parse_input(line: &str) -> (Command, Vec<&str>) {
    let mut words = line.split_whitespace();
    match words.next() {
        Some(word) => (Command::from_word(word), words.collect()),
        None => (Command::Unknown, Vec::new()),
    }
}

/// What the loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

/// Parse one line, run it against the book, and produce the reply.
pub fn dispatch(line: &str, book: &mut AddressBook) -> Reply {
    let (command, args) = parse_input(line);
    debug!(?command, argc = args.len(), "Dispatching command");

    match command {
        Command::Exit => Reply::Exit(FAREWELL.to_string()),
        Command::Hello => Reply::Continue(GREETING.to_string()),
        Command::Add => Reply::Continue(input_error(|| add_contact(&args, book))),
        Command::Change => Reply::Continue(input_error(|| change_contact(&args, book))),
        Command::Phone => Reply::Continue(input_error(|| show_phone(&args, book))),
        Command::All => Reply::Continue(show_all(book)),
        Command::Unknown => Reply::Continue(INVALID_COMMAND.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word() {
        assert_eq!(Command::from_word("close"), Command::Exit);
        assert_eq!(Command::from_word("exit"), Command::Exit);
        assert_eq!(Command::from_word("hello"), Command::Hello);
        assert_eq!(Command::from_word("phone"), Command::Phone);
        assert_eq!(Command::from_word("EXIT"), Command::Unknown);
        assert_eq!(Command::from_word("Add"), Command::Unknown);
    }

    #[test]
    fn test_parse_input() {
        let (command, args) = parse_input("  add   alice 1234567890 \n");
        assert_eq!(command, Command::Add);
        assert_eq!(args, vec!["alice", "1234567890"]);

        let (command, args) = parse_input("all");
        assert_eq!(command, Command::All);
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_input(""), (Command::Unknown, Vec::new()));
        assert_eq!(parse_input("   \t "), (Command::Unknown, Vec::new()));
    }

    #[test]
    fn test_dispatch_basic_replies() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("hello", &mut book),
            Reply::Continue(GREETING.to_string())
        );
        assert_eq!(dispatch("exit", &mut book), Reply::Exit(FAREWELL.to_string()));
        assert_eq!(dispatch("close", &mut book), Reply::Exit(FAREWELL.to_string()));
        assert_eq!(
            dispatch("", &mut book),
            Reply::Continue(INVALID_COMMAND.to_string())
        );
        assert_eq!(
            dispatch("remove alice", &mut book),
            Reply::Continue(INVALID_COMMAND.to_string())
        );
    }

    #[test]
    fn test_dispatch_routes_to_handlers() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("add alice 1234567890", &mut book),
            Reply::Continue("Contact alice with phone 1234567890 added.".to_string())
        );
        assert_eq!(
            dispatch("phone alice", &mut book),
            Reply::Continue("Contact name: alice, phones: 1234567890".to_string())
        );
        assert_eq!(
            dispatch("add alice", &mut book),
            Reply::Continue(INVALID_FORMAT.to_string())
        );
    }
}
