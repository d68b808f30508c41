//! Line-oriented terminal I/O.

use crate::GameError;
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Blocking line I/O used by prompts and the round.
///
/// The binary wires this to stdin/stdout; tests script it with in-memory
/// buffers.
pub trait Terminal {
    /// Reads one line without its trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, GameError>;

    /// Writes text as-is and flushes it.
    fn write(&mut self, text: &str) -> Result<(), GameError>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        self.write(text)?;
        self.write("\n")
    }

    /// Writes `prompt` and then reads the answer.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        self.write(prompt)?;
        self.read_line()
    }
}

/// [`Terminal`] over any buffered reader and writer.
#[derive(Debug, derive_new::new)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W> {
    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("End of input");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        trace!(line = %trimmed, "Read line");
        Ok(Some(trimmed.to_string()))
    }

    fn write(&mut self, text: &str) -> Result<(), GameError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut console = Console::new(Cursor::new("first\r\nsecond\n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_writes_before_reading() {
        let mut console = Console::new(Cursor::new("Alice\n"), Vec::new());
        let answer = console.prompt("Name? ").unwrap();
        assert_eq!(answer.as_deref(), Some("Alice"));
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Name? ");
    }
}
