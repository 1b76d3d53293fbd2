//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::{MockIo, RecordingHandler, TEST_COMMANDS};
use tinycli::{CommandMeta, DefaultShell, Registry, Shell, ShellConfig, UpdateContext};

/// Shell type used by the integration tests.
pub type TestShell = DefaultShell<'static, MockIo, RecordingHandler>;

/// Prompt used by [`CTX`].
pub const PROMPT: &str = "$ ";

/// Not-found message used by [`CTX`].
pub const NOT_FOUND: &str = "> Command not found";

/// Update context with echo enabled.
pub const CTX: UpdateContext<'static> = UpdateContext::new(PROMPT).with_not_found(NOT_FOUND);

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create a shell with default config over `TEST_COMMANDS`, activated, output cleared.
pub fn create_test_shell() -> TestShell {
    create_shell(TEST_COMMANDS, ShellConfig::default())
}

/// Create an activated shell with the given command list and config.
pub fn create_shell(commands: &'static [CommandMeta], config: ShellConfig) -> TestShell {
    let mut shell = Shell::new(
        Registry::new(commands),
        RecordingHandler::new(),
        MockIo::new(),
        config,
    );
    shell.activate(&CTX).unwrap();
    shell.io_mut().clear_output();
    shell
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Feed bytes one at a time without submitting.
pub fn type_input(shell: &mut TestShell, input: &[u8]) {
    for &b in input {
        shell.process_byte(b, &CTX).unwrap();
    }
}

/// Feed bytes one at a time with a custom context.
pub fn type_input_with(shell: &mut TestShell, input: &[u8], ctx: &UpdateContext<'_>) {
    for &b in input {
        shell.process_byte(b, ctx).unwrap();
    }
}

/// Press Enter as configured by default (CR).
pub fn press_enter(shell: &mut TestShell) {
    shell.process_byte(b'\r', &CTX).unwrap();
}

/// Press Backspace (DEL).
pub fn press_backspace(shell: &mut TestShell) {
    shell.process_byte(0x7f, &CTX).unwrap();
}

/// Press Backspace `n` times.
pub fn press_backspace_n(shell: &mut TestShell, n: usize) {
    for _ in 0..n {
        press_backspace(shell);
    }
}

/// Press Tab.
pub fn press_tab(shell: &mut TestShell) {
    shell.process_byte(b'\t', &CTX).unwrap();
}

/// Press Up arrow (ESC [ A).
pub fn press_up(shell: &mut TestShell) {
    type_input(shell, b"\x1b[A");
}

/// Press Down arrow (ESC [ B).
pub fn press_down(shell: &mut TestShell) {
    type_input(shell, b"\x1b[B");
}

/// Clear output, type `cmd`, press Enter, and return what was written.
pub fn execute_command(shell: &mut TestShell, cmd: &str) -> String {
    shell.io_mut().clear_output();
    type_input(shell, cmd.as_bytes());
    press_enter(shell);
    shell.io().output()
}

/// Call `update()` until the input queue is drained. Returns total bytes consumed.
pub fn run_until_idle(shell: &mut TestShell, ctx: &UpdateContext<'_>) -> usize {
    let mut total = 0;
    loop {
        let n = shell.update(ctx).unwrap();
        if n == 0 {
            return total;
        }
        total += n;
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {:?}",
            forbid,
            output
        );
    }
}

/// Assert that output ends with a fresh prompt.
pub fn assert_prompt(output: &str) {
    assert!(
        output.ends_with(PROMPT),
        "Expected output to end with prompt {:?}, got: {:?}",
        PROMPT,
        output
    );
}
