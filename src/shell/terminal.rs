//! Output formatting over a [`ByteIo`] transport.
//!
//! `Terminal` owns the transport and the output newline mode. Every write is
//! mapped into [`IoError::Write`], every read into [`IoError::Read`], so the
//! shell can propagate with `?` without caring which side failed.

use core::fmt::Write as _;

use crate::config::NewLineMode;
use crate::error::{CliError, IoError};
use crate::io::ByteIo;
use crate::response::Response;

/// Erase-on-terminal idiom: back up, overwrite with a space, back up again.
const ERASE_LAST: &[u8] = b"\x08 \x08";

/// Spaces written in chunks when blanking a line.
const BLANK: &[u8; 16] = b"                ";

/// Transport plus output formatting rules.
#[derive(Debug)]
pub struct Terminal<IO> {
    io: IO,
    output: NewLineMode,
}

impl<IO: ByteIo> Terminal<IO> {
    /// Wrap a transport with the given output newline mode.
    pub fn new(io: IO, output: NewLineMode) -> Self {
        Self { io, output }
    }

    /// Pull whatever input is available into `buf`.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, IoError<IO::Error>> {
        self.io.read_bytes(buf).map_err(IoError::Read)
    }

    /// Write a single byte.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), IoError<IO::Error>> {
        self.io.write_byte(byte).map_err(IoError::Write)
    }

    /// Write raw bytes. Empty slices write nothing.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), IoError<IO::Error>> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.io.write_bytes(bytes).map_err(IoError::Write)
    }

    /// Write a string.
    pub fn write_str(&mut self, s: &str) -> Result<(), IoError<IO::Error>> {
        self.write_bytes(s.as_bytes())
    }

    /// Write a line break in the configured output mode.
    pub fn new_line(&mut self) -> Result<(), IoError<IO::Error>> {
        self.write_bytes(self.output.line_break())
    }

    /// Erase the last character on screen.
    pub fn erase_last(&mut self) -> Result<(), IoError<IO::Error>> {
        self.write_bytes(ERASE_LAST)
    }

    /// Blank `len` columns of the current line and return to column 0.
    pub fn clear_line(&mut self, len: usize) -> Result<(), IoError<IO::Error>> {
        self.write_byte(b'\r')?;
        let mut remaining = len;
        while remaining > 0 {
            let n = remaining.min(BLANK.len());
            self.write_bytes(&BLANK[..n])?;
            remaining -= n;
        }
        self.write_byte(b'\r')
    }

    /// Write a handler response, applying its formatting flags.
    ///
    /// Silent responses write nothing at all, flags included.
    pub fn write_response(&mut self, response: &Response) -> Result<(), IoError<IO::Error>> {
        if response.is_silent() {
            return Ok(());
        }

        if response.prefix_newline {
            self.new_line()?;
        }

        self.write_str(response.message.as_str())?;

        if response.postfix_newline {
            self.new_line()?;
        }

        Ok(())
    }

    /// Write `Error: <description>` followed by a line break.
    pub fn write_error(&mut self, error: &CliError) -> Result<(), IoError<IO::Error>> {
        let mut msg: heapless::String<160> = heapless::String::new();
        // Overlong descriptions are cut short
        let _ = write!(msg, "Error: {}", error);
        self.write_str(msg.as_str())?;
        self.new_line()
    }

    /// Borrow the transport.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Mutably borrow the transport.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Give the transport back.
    pub fn into_inner(self) -> IO {
        self.io
    }
}
