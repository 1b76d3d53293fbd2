#![no_std]
#![no_main]

use panic_halt as _;
use tinycli::{
    ByteIo, CliError, CommandHandler, CommandMeta, MinimalShell, Registry, Response, Shell,
    ShellConfig, UpdateContext,
};

// Minimal ByteIo implementation - measures only struct size
pub struct MinimalIo;

impl ByteIo for MinimalIo {
    type Error = ();

    fn read_bytes(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }

    fn write_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(not(feature = "async"))]
const COMMANDS: &[CommandMeta] = &[CommandMeta::new("status")];

#[cfg(feature = "async")]
const COMMANDS: &[CommandMeta] = &[
    CommandMeta::new("status"),
    CommandMeta {
        id: "info",
        name: "info",
        kind: tinycli::CommandKind::Async,
    },
];

// Minimal command handler
struct MinHandler;

impl CommandHandler for MinHandler {
    fn execute(&mut self, id: &str, _args: &[&[u8]]) -> Result<Response, CliError> {
        match id {
            "status" => Ok(Response::success("OK")),
            _ => Err(CliError::CommandNotFound),
        }
    }

    #[cfg(feature = "async")]
    async fn execute_async(&mut self, id: &str, _args: &[&[u8]]) -> Result<Response, CliError> {
        match id {
            "info" => Ok(Response::success("Info")),
            _ => Err(CliError::CommandNotFound),
        }
    }
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let ctx = UpdateContext::new("> ").with_not_found("?");
    let mut shell: MinimalShell<'static, MinimalIo, MinHandler> = Shell::new(
        Registry::new(COMMANDS),
        MinHandler,
        MinimalIo,
        ShellConfig::default(),
    );

    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(shell.activate(&ctx));

    // Feed a full line so decode, edit and dispatch paths are included
    for &byte in b"status\r" {
        let _ = core::hint::black_box(shell.process_byte(byte, &ctx));
    }

    loop {
        let _ = core::hint::black_box(shell.update(&ctx));
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
