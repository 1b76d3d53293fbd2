//! Fixed-capacity line buffer.
//!
//! Holds the command being typed. One slot of `CAP` is reserved, so the
//! logical length never exceeds `CAP - 1`. Growth past that is refused, never
//! reallocated.

/// Append rejected because the line is at its usable capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineFull;

/// Line buffer with `CAP - 1` usable bytes.
#[derive(Debug, Clone)]
pub struct LineBuffer<const CAP: usize> {
    bytes: heapless::Vec<u8, CAP>,
}

impl<const CAP: usize> LineBuffer<CAP> {
    /// Usable capacity (one slot reserved).
    pub const USABLE: usize = CAP.saturating_sub(1);

    /// Create an empty line.
    pub const fn new() -> Self {
        Self {
            bytes: heapless::Vec::new(),
        }
    }

    /// Append one byte. No-op returning `Err(LineFull)` at capacity.
    pub fn push(&mut self, byte: u8) -> Result<(), LineFull> {
        if self.bytes.len() >= Self::USABLE {
            return Err(LineFull);
        }
        self.bytes.push(byte).map_err(|_| LineFull)
    }

    /// Remove the last byte. Returns `None` on an empty line.
    pub fn pop(&mut self) -> Option<u8> {
        self.bytes.pop()
    }

    /// Replace the content, truncating to the usable capacity.
    pub fn replace(&mut self, content: &[u8]) {
        let n = content.len().min(Self::USABLE);
        self.bytes.clear();
        // Cannot fail: n <= USABLE < CAP
        let _ = self.bytes.extend_from_slice(&content[..n]);
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Current content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Current length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<const CAP: usize> Default for LineBuffer<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
