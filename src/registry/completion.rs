//! Tab completion against registered command names.
//!
//! Prefix matching only: a name matches when the typed bytes are a prefix of it.
//! Uses stub function pattern - module always exists, the lookup reports no
//! matches when the `completion` feature is disabled.

#![cfg_attr(not(feature = "completion"), allow(unused_variables))]

use super::CommandMeta;

/// Outcome of a completion lookup.
///
/// Only `Single` is meant to rewrite the line; `Multiple` is for display.
#[derive(Debug, Clone)]
pub enum Completion<'reg, 'inp> {
    /// Nothing matches the typed prefix
    None,

    /// Exactly one command matches
    Single(&'reg CommandMeta),

    /// Two or more commands match, in registration order
    Multiple(Matches<'reg, 'inp>),
}

/// Iterator over commands whose names start with a prefix.
///
/// Walks the registry lazily, so listing matches needs no storage.
#[derive(Debug, Clone)]
pub struct Matches<'reg, 'inp> {
    commands: core::slice::Iter<'reg, CommandMeta>,
    prefix: &'inp [u8],
}

impl<'reg, 'inp> Matches<'reg, 'inp> {
    #[cfg_attr(not(feature = "completion"), allow(dead_code))]
    fn new(commands: &'reg [CommandMeta], prefix: &'inp [u8]) -> Self {
        Self {
            commands: commands.iter(),
            prefix,
        }
    }
}

impl<'reg> Iterator for Matches<'reg, '_> {
    type Item = &'reg CommandMeta;

    fn next(&mut self) -> Option<Self::Item> {
        let prefix = self.prefix;
        self.commands
            .find(|cmd| cmd.name.as_bytes().starts_with(prefix))
    }
}

/// Suggest completions for the typed prefix.
///
/// # Feature-enabled behavior
///
/// 1. Counts registered names that start with `input` (an empty input matches all)
/// 2. One match: returns it for the caller to substitute into the line
/// 3. Several matches: returns an iterator over them for display
/// 4. No matches: returns `Completion::None`
///
/// # Feature-disabled behavior
///
/// Always returns `Completion::None`.
///
/// # Examples
///
/// ```rust,ignore
/// const COMMANDS: &[CommandMeta] = &[CommandMeta::new("test"), CommandMeta::new("test_reverse")];
///
/// match suggest_completions(COMMANDS, b"te") {
///     Completion::Multiple(m) => assert_eq!(m.count(), 2),
///     _ => unreachable!(),
/// }
/// ```
#[cfg(feature = "completion")]
pub fn suggest_completions<'reg, 'inp>(
    commands: &'reg [CommandMeta],
    input: &'inp [u8],
) -> Completion<'reg, 'inp> {
    let mut matches = Matches::new(commands, input);

    let Some(first) = matches.next() else {
        return Completion::None;
    };

    if matches.next().is_none() {
        return Completion::Single(first);
    }

    Completion::Multiple(Matches::new(commands, input))
}

/// Stub implementation when completion feature is disabled.
#[cfg(not(feature = "completion"))]
pub fn suggest_completions<'reg, 'inp>(
    commands: &'reg [CommandMeta],
    input: &'inp [u8],
) -> Completion<'reg, 'inp> {
    Completion::None
}

// ============================================================================
// Tests
// ============================================================================
