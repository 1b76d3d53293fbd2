//! Command registry data structures.
//!
//! The registry is a caller-owned, const-initializable list of command metadata.
//! Execution logic lives separately in a [`CommandHandler`](crate::CommandHandler),
//! which receives the matched command's `id`.

// Sub-modules
pub mod completion;

/// Command kind marker (sync or async).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// Synchronous command
    Sync,

    /// Asynchronous command (requires `async` feature)
    #[cfg(feature = "async")]
    Async,
}

/// Command metadata (const-initializable, no execution logic).
///
/// `name` is what the user types; `id` is what the handler dispatches on.
/// Keeping them separate lets one handler serve aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMeta {
    /// Unique identifier passed to the handler
    pub id: &'static str,

    /// Command name (exact, case-sensitive match against the first token)
    pub name: &'static str,

    /// Command kind (sync or async marker)
    pub kind: CommandKind,
}

impl CommandMeta {
    /// Create synchronous command metadata whose id equals its name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            id: name,
            name,
            kind: CommandKind::Sync,
        }
    }
}

/// Ordered, borrowed view over the caller's command list.
///
/// Registration order is significant: lookup and completion walk the list
/// front to back, and a duplicated name is only ever reachable at its first
/// position.
#[derive(Debug, Copy, Clone)]
pub struct Registry<'reg> {
    commands: &'reg [CommandMeta],
}

impl<'reg> Registry<'reg> {
    /// Wrap a command list.
    pub const fn new(commands: &'reg [CommandMeta]) -> Self {
        Self { commands }
    }

    /// All registered commands in registration order.
    pub fn commands(&self) -> &'reg [CommandMeta] {
        self.commands
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Find the first command whose name equals `name` byte-for-byte.
    pub fn find(&self, name: &[u8]) -> Option<&'reg CommandMeta> {
        self.commands.iter().find(|cmd| cmd.name.as_bytes() == name)
    }

    /// Resolve a token list to a command by its first token.
    ///
    /// Returns `None` both for an empty token list and for an unknown name;
    /// callers distinguish the two by checking `tokens.is_empty()`.
    pub fn resolve(&self, tokens: &[&[u8]]) -> Option<&'reg CommandMeta> {
        tokens.first().and_then(|name| self.find(name))
    }

    /// Name of the first command that shadows an earlier one, if any.
    ///
    /// Dispatch tolerates duplicates (first wins). Call this at startup to
    /// reject them instead.
    pub fn find_duplicate(&self) -> Option<&'reg str> {
        self.commands
            .iter()
            .enumerate()
            .find(|(i, cmd)| self.commands[..*i].iter().any(|prev| prev.name == cmd.name))
            .map(|(_, cmd)| cmd.name)
    }
}
