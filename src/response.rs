//! Response types for command execution.
//!
//! `Response` is what a handler hands back after a successful run: an optional
//! message plus formatting flags. Failures return `Err(CliError)` instead.

use crate::config::RESPONSE_CAPACITY;

/// Command execution response with message and formatting flags.
///
/// An empty message writes nothing, so a handler that produced its own output
/// (or none) returns [`Response::none()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response message (truncated to `RESPONSE_CAPACITY` bytes)
    pub message: heapless::String<RESPONSE_CAPACITY>,

    /// Add a line break before the message
    pub prefix_newline: bool,

    /// Add a line break after the message
    pub postfix_newline: bool,
}

impl Response {
    /// Create success response with default formatting (message + line break).
    pub fn success(message: &str) -> Self {
        Self {
            message: truncated(message),
            prefix_newline: false,
            postfix_newline: true,
        }
    }

    /// Create a response that writes nothing.
    pub fn none() -> Self {
        Self::success("")
    }

    /// Builder method to add a line break before the message.
    pub fn with_prefix_newline(mut self) -> Self {
        self.prefix_newline = true;
        self
    }

    /// Builder method to suppress the line break after the message.
    pub fn without_postfix_newline(mut self) -> Self {
        self.postfix_newline = false;
        self
    }

    /// True when nothing will be written for this response.
    pub fn is_silent(&self) -> bool {
        self.message.is_empty()
    }
}

/// Copy `text` into a fixed string, stopping at the last whole char that fits.
pub(crate) fn truncated<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl Default for Response {
    fn default() -> Self {
        Self::none()
    }
}
