//! Input/output abstractions
//!
//! Sessions read guesses through [`InputReader`] and write text through
//! [`OutputWriter`], so the whole loop can run against mocks in tests.

use std::io::{self, BufRead, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input after showing a prompt.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str) -> io::Result<()>;
}

/// Terminal I/O implementation using stdin/stdout
#[derive(Debug, Default)]
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt} ")?;
        stdout.flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        Ok((read > 0).then_some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Mock input reader that replays canned lines, then reports end of input.
    pub struct MockInput {
        responses: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl MockInput {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(|s| s.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.responses.pop_front())
        }
    }

    /// Mock output writer for testing
    #[derive(Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// All output joined into one string.
        pub fn text(&self) -> String {
            self.messages.join("\n")
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) -> io::Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }
    }

    /// Writer whose every call fails.
    pub struct BrokenOutput;

    impl OutputWriter for BrokenOutput {
        fn writeln(&mut self, _message: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }
}
