//! Configuration types and capacity constants.
//!
//! Capacities are const generics on [`Shell`](crate::Shell) so every buffer is sized
//! at compile time. Newline handling is chosen once at construction through
//! [`ShellConfig`]; prompt, not-found text and echo travel with each update in
//! [`UpdateContext`].

use core::ops::BitOr;

/// Default line buffer capacity (one slot is reserved, so 127 usable bytes).
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// Default number of history carousel slots.
pub const DEFAULT_HISTORY_SIZE: usize = 5;

/// Default maximum number of tokens handed to a command handler.
pub const DEFAULT_MAX_PARAMS: usize = 10;

/// Line buffer capacity for [`MinimalShell`](crate::MinimalShell).
pub const MINIMAL_LINE_CAPACITY: usize = 64;

/// History slots for [`MinimalShell`](crate::MinimalShell).
pub const MINIMAL_HISTORY_SIZE: usize = 3;

/// Token limit for [`MinimalShell`](crate::MinimalShell).
pub const MINIMAL_MAX_PARAMS: usize = 4;

/// Number of bytes pulled from the transport per `update()` call.
pub const INPUT_CHUNK: usize = 3;

/// Maximum length of a handler response message.
pub const RESPONSE_CAPACITY: usize = 128;

/// Set of line-break bytes: carriage return, line feed, or both.
///
/// Used for input (which byte submits a line) and output (which bytes form a
/// line break) independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NewLineMode(u8);

impl NewLineMode {
    /// Neither flag set. As an output mode this falls back to CRLF.
    pub const NONE: Self = Self(0);

    /// Carriage return (`\r`).
    pub const CR: Self = Self(0x1);

    /// Line feed (`\n`).
    pub const LF: Self = Self(0x2);

    /// Both carriage return and line feed.
    pub const CRLF: Self = Self(0x1 | 0x2);

    /// Check whether every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bytes emitted for a line break in this output mode.
    pub const fn line_break(self) -> &'static [u8] {
        match self.0 {
            0x1 => b"\r",
            0x2 => b"\n",
            _ => b"\r\n",
        }
    }
}

impl BitOr for NewLineMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Echo typed bytes back to the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Echo {
    /// Input is consumed silently
    Disabled,

    /// Every accepted byte is written back verbatim
    #[default]
    Enabled,
}

impl Echo {
    /// True for [`Echo::Enabled`].
    pub const fn is_enabled(self) -> bool {
        matches!(self, Echo::Enabled)
    }
}

/// Construction-time shell configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Which byte(s) submit the current line
    pub input: NewLineMode,

    /// Which byte(s) are written as a line break
    pub output: NewLineMode,
}

impl ShellConfig {
    /// Create configuration from input and output newline modes.
    pub const fn new(input: NewLineMode, output: NewLineMode) -> Self {
        Self { input, output }
    }
}

impl Default for ShellConfig {
    /// CR submits (what most terminal emulators send on Enter), CRLF is written.
    fn default() -> Self {
        Self::new(NewLineMode::CR, NewLineMode::CRLF)
    }
}

/// Per-update display settings.
///
/// The prompt and not-found text are borrowed for the duration of one call,
/// so callers may change them between polls (e.g. to show a current mode).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UpdateContext<'p> {
    /// Prompt written after every submission and redraw
    pub prompt: &'p str,

    /// Message written when no command matches (a line break always follows)
    pub not_found: Option<&'p str>,

    /// Echo typed bytes
    pub echo: Echo,
}

impl<'p> UpdateContext<'p> {
    /// Create context with echo enabled and no not-found message.
    pub const fn new(prompt: &'p str) -> Self {
        Self {
            prompt,
            not_found: None,
            echo: Echo::Enabled,
        }
    }

    /// Builder method to set the not-found message.
    pub const fn with_not_found(mut self, message: &'p str) -> Self {
        self.not_found = Some(message);
        self
    }

    /// Builder method to set echo mode.
    pub const fn with_echo(mut self, echo: Echo) -> Self {
        self.echo = echo;
        self
    }
}
