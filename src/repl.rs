//! The interactive command loop.

use crate::book::AddressBook;
use crate::commands::{dispatch, Reply, FAREWELL};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Reads commands line by line and writes the bot's replies.
///
/// Generic over the input and output streams so it can run against a terminal
/// or an in-memory buffer.
pub struct Repl<R, W> {
    input: R,
    output: W,
    prompt: String,
    book: AddressBook,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, prompt: impl Into<String>) -> Self {
        Self {
            input,
            output,
            prompt: prompt.into(),
            book: AddressBook::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until `close`/`exit` or end of input.
    ///
    /// End of input behaves like `exit`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing the streams.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", WELCOME)?;
        info!("Assistant started");

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                writeln!(self.output, "{}", FAREWELL)?;
                break;
            }

            match dispatch(line.trim(), &mut self.book) {
                Reply::Continue(text) => writeln!(self.output, "{}", text)?,
                Reply::Exit(text) => {
                    writeln!(self.output, "{}", text)?;
                    break;
                }
            }
        }

        info!(contacts = self.book.len(), "Assistant stopped");
        Ok(())
    }

    /// Consume the loop and return the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
