//! Shell orchestration and command processing.
//!
//! The `Shell` struct brings together all components: it pulls bytes from the
//! transport, decodes them, edits the line, recalls history, completes names,
//! and on submission tokenizes the line and dispatches it to the handler.

use crate::config::{
    DEFAULT_HISTORY_SIZE, DEFAULT_LINE_CAPACITY, DEFAULT_MAX_PARAMS, INPUT_CHUNK,
    MINIMAL_HISTORY_SIZE, MINIMAL_LINE_CAPACITY, MINIMAL_MAX_PARAMS, ShellConfig, UpdateContext,
};
use crate::error::{CliError, IoError};
use crate::io::ByteIo;
use crate::logging::{debug, trace};
use crate::registry::{CommandKind, Registry};
use crate::response::Response;

// Sub-modules
pub mod decoder;
pub mod handler;
pub mod history;
pub mod line;
pub mod parser;
pub mod terminal;

// Re-export key types
pub use decoder::{InputDecoder, InputEvent, InputState};
pub use handler::CommandHandler;
pub use history::Carousel;
pub use line::LineBuffer;
pub use terminal::Terminal;

/// History navigation direction.
///
/// Self-documenting alternative to bool.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Up arrow key
    Previous = 0,

    /// Down arrow key
    Next = 1,
}

/// Result of resolving a submitted line.
#[derive(Debug)]
enum Dispatch {
    /// Blank line, nothing to resolve
    Skipped,

    /// First token matched no registered name
    NotFound,

    /// Handler ran
    Done(Result<Response, CliError>),
}

/// Shell with default capacities (128-byte line, 5 history slots, 10 tokens).
pub type DefaultShell<'reg, IO, H> =
    Shell<'reg, IO, H, DEFAULT_LINE_CAPACITY, DEFAULT_HISTORY_SIZE, DEFAULT_MAX_PARAMS>;

/// Shell sized for small targets (64-byte line, 3 history slots, 4 tokens).
pub type MinimalShell<'reg, IO, H> =
    Shell<'reg, IO, H, MINIMAL_LINE_CAPACITY, MINIMAL_HISTORY_SIZE, MINIMAL_MAX_PARAMS>;

/// Shell orchestration struct.
///
/// Generic over:
/// - `'reg`: Lifetime of the command list (typically `'static`)
/// - `IO`: [`ByteIo`] transport
/// - `H`: [`CommandHandler`] implementation
/// - `LINE`: line buffer capacity (usable length is `LINE - 1`)
/// - `HISTORY`: history carousel slots
/// - `PARAMS`: maximum tokens handed to the handler
///
/// All state is owned and fixed-size. The shell never allocates.
pub struct Shell<
    'reg,
    IO,
    H,
    const LINE: usize = DEFAULT_LINE_CAPACITY,
    const HISTORY: usize = DEFAULT_HISTORY_SIZE,
    const PARAMS: usize = DEFAULT_MAX_PARAMS,
> where
    IO: ByteIo,
    H: CommandHandler,
{
    /// Registered commands
    registry: Registry<'reg>,

    /// Line being typed
    line: LineBuffer<LINE>,

    /// Input decoder (escape sequence state machine)
    decoder: InputDecoder,

    /// Submitted lines (zero-size stub without `history`)
    history: Carousel<HISTORY, LINE>,

    /// Transport and output formatting
    terminal: Terminal<IO>,

    /// Command handler
    handler: H,

    /// Newline configuration
    config: ShellConfig,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<IO, H, const LINE: usize, const HISTORY: usize, const PARAMS: usize> core::fmt::Debug
    for Shell<'_, IO, H, LINE, HISTORY, PARAMS>
where
    IO: ByteIo,
    H: CommandHandler,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("commands", &self.registry.len())
            .field("line", &self.line.as_bytes())
            .field("decoder", &self.decoder.state())
            .field("history", &self.history.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Core methods
// ============================================================================

impl<'reg, IO, H, const LINE: usize, const HISTORY: usize, const PARAMS: usize>
    Shell<'reg, IO, H, LINE, HISTORY, PARAMS>
where
    IO: ByteIo,
    H: CommandHandler,
{
    /// Create new Shell.
    ///
    /// Nothing is written until `activate()` is called.
    pub fn new(registry: Registry<'reg>, handler: H, io: IO, config: ShellConfig) -> Self {
        Self {
            registry,
            line: LineBuffer::new(),
            decoder: InputDecoder::new(config.input),
            history: Carousel::new(),
            terminal: Terminal::new(io, config.output),
            handler,
            config,
        }
    }

    /// Write the initial prompt.
    pub fn activate(&mut self, ctx: &UpdateContext<'_>) -> Result<(), IoError<IO::Error>> {
        self.terminal.write_str(ctx.prompt)
    }

    /// Poll the transport once and process what arrived.
    ///
    /// Reads at most [`INPUT_CHUNK`] bytes. Returns how many were processed;
    /// `Ok(0)` means no input was available.
    ///
    /// This is a **convenience method** for polling loops. Interrupt- or
    /// DMA-driven drivers should buffer bytes themselves and call
    /// [`process_byte()`](Self::process_byte) directly.
    ///
    /// A sync update reaching an async command reports
    /// [`CliError::AsyncInSyncContext`] to the terminal.
    pub fn update(&mut self, ctx: &UpdateContext<'_>) -> Result<usize, IoError<IO::Error>> {
        let mut buf = [0u8; INPUT_CHUNK];
        let n = self.terminal.read(&mut buf)?.min(INPUT_CHUNK);

        for &byte in &buf[..n] {
            self.process_byte(byte, ctx)?;
        }

        Ok(n)
    }

    /// Process a single byte of input.
    pub fn process_byte(
        &mut self,
        byte: u8,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), IoError<IO::Error>> {
        match self.decoder.decode(byte) {
            InputEvent::Enter => self.handle_enter(ctx),
            event => self.handle_edit(event, ctx),
        }
    }

    /// Async version of [`update()`](Self::update) (requires `async` feature).
    ///
    /// Runs both sync and async commands.
    #[cfg(feature = "async")]
    pub async fn update_async(
        &mut self,
        ctx: &UpdateContext<'_>,
    ) -> Result<usize, IoError<IO::Error>> {
        let mut buf = [0u8; INPUT_CHUNK];
        let n = self.terminal.read(&mut buf)?.min(INPUT_CHUNK);

        for &byte in &buf[..n] {
            self.process_byte_async(byte, ctx).await?;
        }

        Ok(n)
    }

    /// Async version of [`process_byte()`](Self::process_byte) (requires `async` feature).
    #[cfg(feature = "async")]
    pub async fn process_byte_async(
        &mut self,
        byte: u8,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), IoError<IO::Error>> {
        match self.decoder.decode(byte) {
            InputEvent::Enter => self.handle_enter_async(ctx).await,
            event => self.handle_edit(event, ctx),
        }
    }

    /// Handle every event except Enter.
    fn handle_edit(
        &mut self,
        event: InputEvent,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), IoError<IO::Error>> {
        match event {
            InputEvent::None | InputEvent::Enter => Ok(()),
            InputEvent::Byte(byte) => self.insert(byte, ctx),
            InputEvent::Backspace => self.handle_backspace(),
            InputEvent::Tab => self.handle_tab(ctx),
            InputEvent::UpArrow => self.handle_history(HistoryDirection::Previous, ctx),
            InputEvent::DownArrow => self.handle_history(HistoryDirection::Next, ctx),
        }
    }

    /// Append a byte to the line, echoing it if enabled.
    ///
    /// A full line drops the byte silently.
    fn insert(&mut self, byte: u8, ctx: &UpdateContext<'_>) -> Result<(), IoError<IO::Error>> {
        if self.line.push(byte).is_err() {
            trace!(byte, "line full, byte dropped");
            return Ok(());
        }

        if ctx.echo.is_enabled() {
            self.terminal.write_byte(byte)?;
        }
        Ok(())
    }

    fn handle_backspace(&mut self) -> Result<(), IoError<IO::Error>> {
        if self.line.pop().is_some() {
            self.terminal.erase_last()?;
        }
        Ok(())
    }

    /// Handle Tab (completion, or an ordinary byte when completion is disabled).
    fn handle_tab(&mut self, ctx: &UpdateContext<'_>) -> Result<(), IoError<IO::Error>> {
        #[cfg(feature = "completion")]
        {
            use crate::registry::completion::{Completion, suggest_completions};

            match suggest_completions(self.registry.commands(), self.line.as_bytes()) {
                Completion::None => {
                    trace!("no completion");
                }
                Completion::Single(cmd) => {
                    let name = cmd.name;
                    trace!(name, "completed");
                    let old_len = self.line.len() + ctx.prompt.len();
                    self.line.replace(name.as_bytes());
                    self.redraw(old_len, ctx)?;
                }
                Completion::Multiple(matches) => {
                    trace!("ambiguous completion");
                    self.terminal.new_line()?;
                    for (i, cmd) in matches.enumerate() {
                        if i > 0 {
                            self.terminal.write_byte(b' ')?;
                        }
                        self.terminal.write_str(cmd.name)?;
                    }
                    self.terminal.new_line()?;
                    self.terminal.write_str(ctx.prompt)?;
                    self.terminal.write_bytes(self.line.as_bytes())?;
                }
            }
            Ok(())
        }

        #[cfg(not(feature = "completion"))]
        {
            self.insert(b'\t', ctx)
        }
    }

    /// Handle history navigation.
    ///
    /// Without the `history` feature the carousel is always empty, so arrows
    /// do nothing.
    fn handle_history(
        &mut self,
        direction: HistoryDirection,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), IoError<IO::Error>> {
        let old_len = self.line.len() + ctx.prompt.len();

        let entry = match direction {
            HistoryDirection::Previous => self.history.previous(),
            HistoryDirection::Next => self.history.next(),
        };

        let Some(entry) = entry else {
            return Ok(());
        };

        trace!(?direction, "history recall");
        self.line.replace(entry);
        self.redraw(old_len, ctx)
    }

    /// Blank `old_len` columns, then write prompt and line.
    fn redraw(&mut self, old_len: usize, ctx: &UpdateContext<'_>) -> Result<(), IoError<IO::Error>> {
        self.terminal.clear_line(old_len)?;
        self.terminal.write_str(ctx.prompt)?;
        self.terminal.write_bytes(self.line.as_bytes())
    }

    /// Steps shared by both submit paths, before dispatch.
    fn begin_submit(&mut self, ctx: &UpdateContext<'_>) -> Result<(), IoError<IO::Error>> {
        self.history.push(self.line.as_bytes());

        if ctx.echo.is_enabled() {
            self.terminal.new_line()?;
        }
        Ok(())
    }

    /// Handle Enter: tokenize, dispatch, report, prompt.
    fn handle_enter(&mut self, ctx: &UpdateContext<'_>) -> Result<(), IoError<IO::Error>> {
        self.begin_submit(ctx)?;

        let tokens = parser::tokenize::<PARAMS>(self.line.as_bytes());
        let outcome = match self.registry.resolve(&tokens) {
            None if tokens.is_empty() => Dispatch::Skipped,
            None => Dispatch::NotFound,
            Some(cmd) => {
                debug!(id = cmd.id, argc = tokens.len(), "dispatching command");
                let args = handler_args(&tokens);
                let result = match cmd.kind {
                    CommandKind::Sync => self.handler.execute(cmd.id, args),
                    #[cfg(feature = "async")]
                    CommandKind::Async => Err(CliError::AsyncInSyncContext),
                };
                Dispatch::Done(result)
            }
        };
        // Tokens borrow the line, which finish_submit clears
        drop(tokens);

        self.finish_submit(outcome, ctx)
    }

    /// Async Enter: like `handle_enter` but awaits async commands.
    #[cfg(feature = "async")]
    async fn handle_enter_async(
        &mut self,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), IoError<IO::Error>> {
        self.begin_submit(ctx)?;

        let tokens = parser::tokenize::<PARAMS>(self.line.as_bytes());
        let outcome = match self.registry.resolve(&tokens) {
            None if tokens.is_empty() => Dispatch::Skipped,
            None => Dispatch::NotFound,
            Some(cmd) => {
                debug!(id = cmd.id, argc = tokens.len(), "dispatching command");
                let args = handler_args(&tokens);
                let result = match cmd.kind {
                    CommandKind::Sync => self.handler.execute(cmd.id, args),
                    CommandKind::Async => self.handler.execute_async(cmd.id, args).await,
                };
                Dispatch::Done(result)
            }
        };
        // Tokens borrow the line, which finish_submit clears
        drop(tokens);

        self.finish_submit(outcome, ctx)
    }

    /// Reset the line, report the outcome, and write the prompt.
    fn finish_submit(
        &mut self,
        outcome: Dispatch,
        ctx: &UpdateContext<'_>,
    ) -> Result<(), IoError<IO::Error>> {
        self.line.clear();

        match outcome {
            Dispatch::Skipped => {}
            Dispatch::NotFound | Dispatch::Done(Err(CliError::CommandNotFound)) => {
                debug!("command not found");
                if let Some(message) = ctx.not_found {
                    self.terminal.write_str(message)?;
                }
                self.terminal.new_line()?;
            }
            Dispatch::Done(Ok(response)) => self.terminal.write_response(&response)?,
            Dispatch::Done(Err(e)) => self.terminal.write_error(&e)?,
        }

        self.terminal.write_str(ctx.prompt)
    }

    // ========================================
    // Accessors
    // ========================================

    /// Borrow the transport.
    pub fn io(&self) -> &IO {
        self.terminal.io()
    }

    /// Mutably borrow the transport.
    pub fn io_mut(&mut self) -> &mut IO {
        self.terminal.io_mut()
    }

    /// Borrow the command handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutably borrow the command handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Newline configuration given at construction.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Registered commands.
    pub fn registry(&self) -> Registry<'reg> {
        self.registry
    }

    /// Tear the shell down, giving back the transport and the handler.
    pub fn into_parts(self) -> (IO, H) {
        (self.terminal.into_inner(), self.handler)
    }

    /// Get current line content (test-only).
    ///
    /// Available in both unit tests and integration tests.
    #[doc(hidden)]
    pub fn __test_line(&self) -> &[u8] {
        self.line.as_bytes()
    }
}

/// Arguments handed to the handler: all tokens, or none without `parameters`.
fn handler_args<'t, 'l>(tokens: &'t [&'l [u8]]) -> &'t [&'l [u8]] {
    if cfg!(feature = "parameters") {
        tokens
    } else {
        &[]
    }
}

// ============================================================================
// Tests
// ============================================================================
