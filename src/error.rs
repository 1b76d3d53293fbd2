//! Error types for shell operations.
//!
//! Two families: [`IoError`] is what the engine surfaces to its caller when the
//! transport fails, and [`CliError`] is what command handlers report back to the
//! engine. Capacity limits are never errors; overflowing input is dropped.

use core::fmt;

use crate::config::RESPONSE_CAPACITY;
use crate::response::truncated;

/// Transport failure surfaced by `update()` and friends.
///
/// The update cycle stops at the failing call. Output already written is not
/// rolled back, so the terminal display may lag the line buffer afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoError<E> {
    /// The read side of the transport reported an error
    Read(E),

    /// The write side of the transport reported an error
    Write(E),
}

impl<E> IoError<E> {
    /// Unwrap the underlying transport error.
    pub fn into_inner(self) -> E {
        match self {
            IoError::Read(e) | IoError::Write(e) => e,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for IoError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Read(e) => write!(f, "read failed: {:?}", e),
            IoError::Write(e) => write!(f, "write failed: {:?}", e),
        }
    }
}

/// Command handler error type.
///
/// Returned from [`CommandHandler`](crate::CommandHandler) implementations.
/// `CommandNotFound` takes the same path as a name with no registry match;
/// everything else is printed as `Error: <description>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// The handler has no command with this id
    CommandNotFound,

    /// Parameter count outside `min..=max` (the command name is not counted)
    ArgumentCount {
        /// Fewest parameters accepted
        min: usize,
        /// Most parameters accepted
        max: usize,
        /// Parameters on the line
        given: usize,
    },

    /// A parameter could not be interpreted
    BadArgument {
        /// Position, 0 being the first token after the command name
        index: usize,
        /// What would have been accepted, e.g. `"on|off"`
        expected: &'static str,
    },

    /// Async command reached through the sync `update()`
    #[cfg(feature = "async")]
    AsyncInSyncContext,

    /// Command ran but reported failure
    CommandFailed(heapless::String<RESPONSE_CAPACITY>),
}

impl CliError {
    /// Failure carrying `message`, truncated to `RESPONSE_CAPACITY` bytes.
    pub fn failed(message: &str) -> Self {
        CliError::CommandFailed(truncated(message))
    }

    /// Check the parameter count of handler arguments (name first).
    ///
    /// ```
    /// use tinycli::CliError;
    ///
    /// let args: [&[u8]; 2] = [b"led", b"on"];
    /// assert_eq!(CliError::check_arity(&args, 1, 1), Ok(()));
    /// assert_eq!(
    ///     CliError::check_arity(&args[..1], 1, 1),
    ///     Err(CliError::ArgumentCount { min: 1, max: 1, given: 0 })
    /// );
    /// ```
    pub fn check_arity(args: &[&[u8]], min: usize, max: usize) -> Result<(), CliError> {
        let given = args.len().saturating_sub(1);
        if (min..=max).contains(&given) {
            Ok(())
        } else {
            Err(CliError::ArgumentCount { min, max, given })
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CommandNotFound => f.write_str("Command not found"),
            CliError::ArgumentCount { min, max, given } if min == max => {
                write!(f, "Expected {} arguments, got {}", min, given)
            }
            CliError::ArgumentCount { min, max, given } => {
                write!(f, "Expected {} to {} arguments, got {}", min, max, given)
            }
            CliError::BadArgument { index, expected } => {
                write!(f, "Argument {}: expected {}", index + 1, expected)
            }
            #[cfg(feature = "async")]
            CliError::AsyncInSyncContext => f.write_str("Async command requires async context"),
            CliError::CommandFailed(msg) => f.write_str(msg),
        }
    }
}
