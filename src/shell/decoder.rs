//! Input decoder for raw terminal bytes.
//!
//! Provides state machine for interpreting ANSI escape sequences (arrow keys)
//! and line terminators according to the configured input newline mode.
//!
//! This is a pure decoder - it doesn't manage buffers or I/O. It simply converts
//! raw bytes into logical input events.

use crate::config::NewLineMode;

const ESC: u8 = 0x1b;
const CR: u8 = b'\r';
const LF: u8 = b'\n';
const TAB: u8 = b'\t';
const BS: u8 = 0x08;
const DEL: u8 = 0x7f;

/// Decoder state for escape sequence handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputState {
    /// Normal input mode
    Normal,

    /// Saw ESC
    EscapeStart,

    /// Saw ESC [ (control sequence, waiting for final byte)
    EscapeSequence,
}

/// Logical input event from terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// No event (accumulating sequence, or byte dropped)
    None,

    /// Byte to append to the line
    Byte(u8),

    /// Line terminator accepted by the input mode
    Enter,

    /// Backspace key (ASCII BS or DEL)
    Backspace,

    /// Tab key
    Tab,

    /// Up arrow key (history previous)
    UpArrow,

    /// Down arrow key (history next)
    DownArrow,
}

/// Terminal input decoder.
///
/// Pure state machine - doesn't manage buffers or perform I/O. Unrecognized
/// escape sequences are swallowed whole and never reach the line, but a
/// control key that cuts a sequence short (Enter, Backspace, Tab) still acts.
#[derive(Debug)]
pub struct InputDecoder {
    state: InputState,
    mode: NewLineMode,
}

impl InputDecoder {
    /// Create new decoder in Normal state for the given input newline mode.
    pub const fn new(mode: NewLineMode) -> Self {
        Self {
            state: InputState::Normal,
            mode,
        }
    }

    /// Decode a single byte into an input event.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut decoder = InputDecoder::new(NewLineMode::CR);
    ///
    /// assert_eq!(decoder.decode(b'h'), InputEvent::Byte(b'h'));
    /// assert_eq!(decoder.decode(b'\r'), InputEvent::Enter);
    ///
    /// // Up arrow (ESC [ A)
    /// decoder.decode(0x1b);
    /// decoder.decode(b'[');
    /// assert_eq!(decoder.decode(b'A'), InputEvent::UpArrow);
    /// ```
    pub fn decode(&mut self, byte: u8) -> InputEvent {
        match self.state {
            InputState::Normal => self.decode_normal(byte),
            InputState::EscapeStart => self.decode_escape_start(byte),
            InputState::EscapeSequence => self.decode_escape_sequence(byte),
        }
    }

    fn decode_normal(&mut self, byte: u8) -> InputEvent {
        match byte {
            ESC => {
                self.state = InputState::EscapeStart;
                InputEvent::None
            }

            // CR submits only in CR-only mode, LF whenever LF is enabled.
            // A terminator the mode does not accept is dropped.
            CR if self.mode == NewLineMode::CR => InputEvent::Enter,
            LF if self.mode.contains(NewLineMode::LF) => InputEvent::Enter,
            CR | LF => InputEvent::None,

            TAB => InputEvent::Tab,
            BS | DEL => InputEvent::Backspace,

            // Remaining C0 controls
            0x00..=0x1f => InputEvent::None,

            _ => InputEvent::Byte(byte),
        }
    }

    fn decode_escape_start(&mut self, byte: u8) -> InputEvent {
        match byte {
            b'[' => {
                self.state = InputState::EscapeSequence;
                InputEvent::None
            }
            // Restart: the earlier ESC is dropped
            ESC => InputEvent::None,
            _ => self.abandon_escape(byte),
        }
    }

    fn decode_escape_sequence(&mut self, byte: u8) -> InputEvent {
        match byte {
            // Parameter and intermediate bytes
            0x20..=0x3f => InputEvent::None,
            b'A' => {
                self.state = InputState::Normal;
                InputEvent::UpArrow
            }
            b'B' => {
                self.state = InputState::Normal;
                InputEvent::DownArrow
            }
            _ => self.abandon_escape(byte),
        }
    }

    /// Drop a pending escape. Control keys still act; anything else is
    /// swallowed with the sequence.
    fn abandon_escape(&mut self, byte: u8) -> InputEvent {
        self.state = InputState::Normal;
        match byte {
            0x00..=0x1f | DEL => self.decode_normal(byte),
            _ => InputEvent::None,
        }
    }

    /// Current decoder state.
    pub fn state(&self) -> InputState {
        self.state
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new(NewLineMode::CR)
    }
}
