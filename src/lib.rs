//! # tinycli
//!
//! Allocation-free line editor and command dispatcher for serial consoles.
//!
//! **Key features:**
//! - **Static allocation** - Every buffer is sized by const generics, zero heap usage
//! - **Const initialization** - Command lists defined at compile time
//! - **Optional features** - Tab completion, command history, argument passing, async
//! - **Flexible I/O** - Platform-agnostic byte I/O trait
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tinycli::{CommandMeta, DefaultShell, Registry, Shell, ShellConfig, UpdateContext};
//!
//! const COMMANDS: &[CommandMeta] = &[CommandMeta::new("led"), CommandMeta::new("status")];
//!
//! let ctx = UpdateContext::new("$ ").with_not_found("> Command not found");
//! let mut shell: DefaultShell<_, _> =
//!     Shell::new(Registry::new(COMMANDS), MyHandler::new(), uart, ShellConfig::default());
//!
//! shell.activate(&ctx)?;
//! loop {
//!     shell.update(&ctx)?;
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `completion` - Tab completion against registered command names (default)
//! - `history` - Command history with up/down arrow recall (default)
//! - `parameters` - Handlers receive the tokenized line (default)
//! - `async` - Async command execution support
//! - `tracing` - Diagnostics through the `tracing` crate
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

// Foundation: configuration and byte I/O
pub mod config;
pub mod io;

// Error handling
pub mod error;

// Diagnostics (no-op unless the `tracing` feature is enabled)
mod logging;

// Command data model
pub mod registry;

// Response types
pub mod response;

// Shell orchestration
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::ByteIo;

// Configuration
pub use config::{Echo, NewLineMode, ShellConfig, UpdateContext};

// Error types
pub use error::{CliError, IoError};

// Registry types
pub use registry::completion::{Completion, suggest_completions};
pub use registry::{CommandKind, CommandMeta, Registry};

// Response types
pub use response::Response;

// Shell types
pub use shell::handler::CommandHandler;
pub use shell::{DefaultShell, HistoryDirection, MinimalShell, Shell};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
