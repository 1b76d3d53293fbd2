//! Test fixtures and utilities for tinycli testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of the ByteIo trait
//! - `RecordingHandler`: Command handler that records every call
//! - `TEST_COMMANDS`: Command list mirroring a typical demo console

#![allow(dead_code)]

use std::collections::VecDeque;
use tinycli::{ByteIo, CliError, CommandHandler, CommandKind, CommandMeta, Response};

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Transport failure reported by [`MockIo`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MockError {
    /// Read side failed
    Read,

    /// Write side failed
    Write,
}

/// Mock I/O for testing.
///
/// Provides in-memory byte I/O with input queue and output capture.
/// Uses `std` types (VecDeque, Vec) since tests run with std support.
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates user typing)
    input: VecDeque<u8>,

    /// Output capture (collects all output)
    output: Vec<u8>,

    /// Fail the next read
    fail_read: bool,

    /// Remaining bytes that may be written before writes fail
    write_budget: Option<usize>,
}

impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockIo with pre-loaded input.
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Add input to queue (simulates user typing).
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Get captured output as string (lossy for non-UTF-8 bytes).
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Get captured output as bytes (useful for checking control sequences).
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Check if input queue is empty.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Remaining input count.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Make the next read fail.
    pub fn fail_next_read(&mut self) {
        self.fail_read = true;
    }

    /// Allow `n` more bytes to be written, then fail every write.
    pub fn fail_writes_after(&mut self, n: usize) {
        self.write_budget = Some(n);
    }
}

impl ByteIo for MockIo {
    type Error = MockError;

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if std::mem::take(&mut self.fail_read) {
            return Err(MockError::Read);
        }

        let mut n = 0;
        while n < buf.len() {
            match self.input.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if let Some(budget) = self.write_budget.as_mut() {
            if *budget == 0 {
                return Err(MockError::Write);
            }
            *budget -= 1;
        }
        self.output.push(byte);
        Ok(())
    }
}

// ============================================================================
// RecordingHandler - Command Handler for Testing
// ============================================================================

/// One recorded handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Command id the handler was asked to run
    pub id: String,

    /// Arguments as UTF-8 strings (lossy)
    pub args: Vec<String>,
}

/// Command handler that records every call.
///
/// Behavior by id:
/// - `test`: responds with the arguments joined by spaces
/// - `test_reverse`: responds with the arguments in reverse order
/// - `exit`: silent response, sets `exited`
/// - `fail`: `CliError::CommandFailed`
/// - `led`: exactly one parameter, `on` or `off`; sets `led`
/// - `ghost`: `CliError::CommandNotFound`
/// - `fetch` (async): responds `fetched`
#[derive(Debug, Default)]
pub struct RecordingHandler {
    /// Every call in order
    pub calls: Vec<Call>,

    /// Set by the `exit` command
    pub exited: bool,

    /// State switched by the `led` command
    pub led: bool,
}

impl RecordingHandler {
    /// Create handler with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent call.
    pub fn last(&self) -> Option<&Call> {
        self.calls.last()
    }

    fn record(&mut self, id: &str, args: &[&[u8]]) {
        self.calls.push(Call {
            id: id.to_string(),
            args: args
                .iter()
                .map(|a| String::from_utf8_lossy(a).into_owned())
                .collect(),
        });
    }

    fn respond(&mut self, id: &str, args: &[&[u8]]) -> Result<Response, CliError> {
        let words: Vec<String> = args
            .iter()
            .map(|a| String::from_utf8_lossy(a).into_owned())
            .collect();

        match id {
            "test" if words.is_empty() => Ok(Response::success(id)),
            "test" => Ok(Response::success(&words.join(" "))),
            "test_reverse" => {
                let reversed: Vec<&str> = words.iter().rev().map(String::as_str).collect();
                Ok(Response::success(&reversed.join(" ")))
            }
            "exit" => {
                self.exited = true;
                Ok(Response::none())
            }
            "fail" => Err(CliError::failed("sensor offline")),
            "led" => {
                CliError::check_arity(args, 1, 1)?;
                self.led = match args[1] {
                    b"on" => true,
                    b"off" => false,
                    _ => {
                        return Err(CliError::BadArgument {
                            index: 0,
                            expected: "on|off",
                        });
                    }
                };
                Ok(Response::success(if self.led { "LED on" } else { "LED off" }))
            }
            _ => Err(CliError::CommandNotFound),
        }
    }
}

impl CommandHandler for RecordingHandler {
    fn execute(&mut self, id: &str, args: &[&[u8]]) -> Result<Response, CliError> {
        self.record(id, args);
        self.respond(id, args)
    }

    #[cfg(feature = "async")]
    async fn execute_async(&mut self, id: &str, args: &[&[u8]]) -> Result<Response, CliError> {
        self.record(id, args);
        match id {
            "fetch" => {
                tokio::task::yield_now().await;
                Ok(Response::success("fetched"))
            }
            _ => self.respond(id, args),
        }
    }
}

// ============================================================================
// TEST_COMMANDS - Command List for Testing
// ============================================================================

/// Command list used by most tests.
///
/// `ghost` is registered but unknown to the handler.
pub const TEST_COMMANDS: &[CommandMeta] = &[
    CommandMeta::new("exit"),
    CommandMeta::new("test"),
    CommandMeta::new("test_reverse"),
    CommandMeta::new("fail"),
    CommandMeta::new("ghost"),
    CommandMeta::new("led"),
];

/// Command list with one async command.
#[cfg(feature = "async")]
pub const ASYNC_COMMANDS: &[CommandMeta] = &[
    CommandMeta::new("test"),
    CommandMeta {
        id: "fetch",
        name: "fetch",
        kind: CommandKind::Async,
    },
];

/// Command list with a single-byte alias and a shadowed duplicate.
pub const ALIAS_COMMANDS: &[CommandMeta] = &[
    CommandMeta {
        id: "test",
        name: "t",
        kind: CommandKind::Sync,
    },
    CommandMeta {
        id: "test_reverse",
        name: "t",
        kind: CommandKind::Sync,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_io_basic() {
        let mut io = MockIo::new();

        io.push_input(b"hello");
        let mut buf = [0u8; 3];
        assert_eq!(io.read_bytes(&mut buf), Ok(3));
        assert_eq!(&buf, b"hel");

        io.write_byte(b'x').unwrap();
        io.write_bytes(b"yz").unwrap();
        assert_eq!(io.output(), "xyz");
    }

    #[test]
    fn test_mock_io_drains_input() {
        let mut io = MockIo::with_input(b"ok\r");
        assert_eq!(io.input_len(), 3);

        let mut buf = [0u8; 8];
        assert_eq!(io.read_bytes(&mut buf), Ok(3));
        assert_eq!(io.read_bytes(&mut buf), Ok(0));
        assert!(io.input_empty());
    }

    #[test]
    fn test_mock_io_failures() {
        let mut io = MockIo::with_input(b"a");
        io.fail_next_read();
        let mut buf = [0u8; 1];
        assert_eq!(io.read_bytes(&mut buf), Err(MockError::Read));
        // Only one read fails
        assert_eq!(io.read_bytes(&mut buf), Ok(1));

        io.fail_writes_after(1);
        assert_eq!(io.write_bytes(b"xy"), Err(MockError::Write));
        assert_eq!(io.output_bytes(), b"x");
    }

    #[test]
    fn test_recording_handler() {
        let mut handler = RecordingHandler::new();
        let response = handler.execute("test_reverse", &[b"test_reverse", b"a"]).unwrap();
        assert_eq!(response.message.as_str(), "a test_reverse");
        assert_eq!(handler.last().unwrap().id, "test_reverse");

        assert!(handler.execute("exit", &[]).unwrap().is_silent());
        assert!(handler.exited);

        assert_eq!(handler.execute("ghost", &[]), Err(CliError::CommandNotFound));
        assert_eq!(handler.calls.len(), 3);
    }

    #[test]
    fn test_recording_handler_led() {
        let mut handler = RecordingHandler::new();
        let response = handler.execute("led", &[b"led", b"on"]).unwrap();
        assert_eq!(response.message.as_str(), "LED on");
        assert!(handler.led);

        assert_eq!(
            handler.execute("led", &[b"led"]),
            Err(CliError::ArgumentCount { min: 1, max: 1, given: 0 })
        );
        assert_eq!(
            handler.execute("led", &[b"led", b"dim"]),
            Err(CliError::BadArgument { index: 0, expected: "on|off" })
        );
        assert!(handler.led);
    }
}
