//! Command handler trait for executing commands.
//!
//! Maps command IDs to execution functions, implementing the execution side
//! of the metadata/execution separation pattern. Application state lives in
//! the implementing type.

use crate::error::CliError;
use crate::response::Response;

/// Command execution handler trait.
/// Maps command IDs to execution functions (dispatches on unique ID, not display name).
///
/// `args` holds every token of the line including the command name, or is
/// empty when the `parameters` feature is disabled.
pub trait CommandHandler {
    /// Execute synchronous command by unique ID.
    fn execute(&mut self, id: &str, args: &[&[u8]]) -> Result<Response, CliError>;

    /// Execute asynchronous command by unique ID (requires `async` feature).
    /// Uses `async fn` without Send bounds for both single and multi-threaded executors.
    #[cfg(feature = "async")]
    #[allow(async_fn_in_trait)]
    async fn execute_async(&mut self, id: &str, args: &[&[u8]]) -> Result<Response, CliError>;
}

impl<H: CommandHandler + ?Sized> CommandHandler for &mut H {
    fn execute(&mut self, id: &str, args: &[&[u8]]) -> Result<Response, CliError> {
        (**self).execute(id, args)
    }

    #[cfg(feature = "async")]
    async fn execute_async(&mut self, id: &str, args: &[&[u8]]) -> Result<Response, CliError> {
        (**self).execute_async(id, args).await
    }
}
