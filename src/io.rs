//! Byte I/O abstraction for platform-agnostic input/output.
//!
//! The `ByteIo` trait is the engine's only contact with the outside world: a
//! pull interface for input and a push interface for output. Implement it for a
//! UART, a USB CDC endpoint, a terminal emulator, or a test double.

/// Platform-agnostic byte I/O trait.
///
/// - `read_bytes()` returns what is available now; `Ok(0)` means "no input", not an error
/// - `write_byte()` and `write_bytes()` are assumed to complete; there is no backpressure
/// - Infallible transports can use `core::convert::Infallible` as the error type
pub trait ByteIo {
    /// Platform-specific error type
    type Error;

    /// Read up to `buf.len()` bytes into `buf`.
    ///
    /// Returns:
    /// - `Ok(n)` with `n` bytes written to the front of `buf` (`n` may be 0)
    /// - `Err(Self::Error)` on a stream error
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a byte slice.
    ///
    /// Default implementation uses `write_byte()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &b in bytes {
            self.write_byte(b)?;
        }
        Ok(())
    }
}

impl<T: ByteIo + ?Sized> ByteIo for &mut T {
    type Error = T::Error;

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read_bytes(buf)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}
