//! Console I/O boundary.

use std::io::{self, BufRead, Read, Write};

use crate::error::InputError;

/// Text console consumed by the round driver.
pub trait Console {
    /// Writes text.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Writes a single character.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    fn write_char(&mut self, c: char) -> io::Result<()> {
        self.write_text(c.encode_utf8(&mut [0; 4]))
    }

    /// Writes an integer in decimal.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    fn write_int(&mut self, value: i64) -> io::Result<()> {
        self.write_text(&value.to_string())
    }

    /// Reads one line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedInput`] if the line is too long, or
    /// [`InputError::Io`] if reading fails.
    fn read_line(&mut self) -> Result<Option<String>, InputError>;

    /// Reads one line and parses it as an integer.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotANumber`] if the line is not a number, or any
    /// error from [`Console::read_line`].
    fn read_int(&mut self) -> Result<Option<i64>, InputError> {
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        line.trim()
            .parse()
            .map(Some)
            .map_err(|_| InputError::NotANumber)
    }

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A [`Console`] over any buffered reader and writer.
///
/// Lines longer than the configured limit are consumed and rejected.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
    max_line_len: usize,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Creates a console accepting lines up to `max_line_len` bytes.
    pub const fn new(reader: R, writer: W, max_line_len: usize) -> Self {
        Self {
            reader,
            writer,
            max_line_len,
        }
    }

    /// Returns the writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        // Prompts must be visible before blocking on input.
        self.writer.flush().map_err(|e| InputError::Io(e.kind()))?;

        let limit = self.max_line_len;
        // Room for "\r\n" after a line of exactly `limit` bytes.
        let take = limit as u64 + 2;
        let mut buf = Vec::new();
        let read = (&mut self.reader)
            .take(take)
            .read_until(b'\n', &mut buf)
            .map_err(|e| InputError::Io(e.kind()))?;
        if read == 0 {
            return Ok(None);
        }

        let terminated = buf.last() == Some(&b'\n');
        if terminated {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        if buf.len() > limit {
            if !terminated {
                self.reader
                    .skip_until(b'\n')
                    .map_err(|e| InputError::Io(e.kind()))?;
            }
            return Err(InputError::MalformedInput { limit });
        }

        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
