//! Command history carousel with up/down arrow recall.
//!
//! Uses stub type pattern - struct always exists, but behavior is feature-gated.
//!
//! The carousel is a fixed ring of `N` slots. The write cursor advances on every
//! non-empty push; the read cursor is independent and rotates on recall,
//! wrapping modulo the number of stored lines rather than `N`. Until the ring
//! has filled, recall walks newest-first; once it wraps, the read cursor keeps
//! its own position and order follows slot order.

#[cfg(not(feature = "history"))]
use core::marker::PhantomData;

/// Command history storage.
///
/// When `history` feature is enabled, stores lines in a fixed ring.
/// When disabled, zero-size stub that no-ops all operations.
#[derive(Debug)]
pub struct Carousel<const N: usize, const LINE: usize> {
    #[cfg(feature = "history")]
    slots: [heapless::Vec<u8, LINE>; N],

    #[cfg(feature = "history")]
    write_index: usize,

    #[cfg(feature = "history")]
    read_index: usize,

    #[cfg(feature = "history")]
    count: usize,

    #[cfg(not(feature = "history"))]
    _phantom: PhantomData<[u8; LINE]>,
}

impl<const N: usize, const LINE: usize> Carousel<N, LINE> {
    /// Create empty carousel.
    #[cfg(feature = "history")]
    pub const fn new() -> Self {
        Self {
            slots: [const { heapless::Vec::new() }; N],
            write_index: 0,
            read_index: 0,
            count: 0,
        }
    }

    /// Create empty carousel (stub version).
    #[cfg(not(feature = "history"))]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Store a line at the write cursor.
    ///
    /// Empty lines are ignored. Once all `N` slots are used the oldest line is
    /// overwritten without notice. Lines longer than a slot are truncated.
    #[cfg(feature = "history")]
    pub fn push(&mut self, line: &[u8]) {
        if line.is_empty() || N == 0 {
            return;
        }

        let slot = &mut self.slots[self.write_index];
        slot.clear();
        let n = line.len().min(LINE);
        // Cannot fail: n <= LINE
        let _ = slot.extend_from_slice(&line[..n]);

        self.write_index = (self.write_index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Store a line (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn push(&mut self, _line: &[u8]) {
        // No-op
    }

    /// Step the read cursor back (up arrow) and return that line.
    ///
    /// Wraps from slot 0 to `count - 1`. Returns `None` when empty.
    #[cfg(feature = "history")]
    pub fn previous(&mut self) -> Option<&[u8]> {
        if self.count == 0 {
            return None;
        }

        self.read_index = if self.read_index == 0 {
            self.count - 1
        } else {
            self.read_index - 1
        };

        Some(&self.slots[self.read_index])
    }

    /// Step back (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn previous(&mut self) -> Option<&[u8]> {
        None
    }

    /// Return the line at the read cursor (down arrow), then advance it.
    ///
    /// Wraps modulo `count`. Returns `None` when empty.
    #[cfg(feature = "history")]
    pub fn next(&mut self) -> Option<&[u8]> {
        if self.count == 0 {
            return None;
        }

        let index = self.read_index;
        self.read_index = (self.read_index + 1) % self.count;

        Some(&self.slots[index])
    }

    /// Advance (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn next(&mut self) -> Option<&[u8]> {
        None
    }

    /// True when nothing has been stored.
    #[cfg(feature = "history")]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Always empty (stub version).
    #[cfg(not(feature = "history"))]
    pub fn is_empty(&self) -> bool {
        true
    }

    /// Number of stored lines (at most `N`).
    #[cfg(feature = "history")]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always zero (stub version).
    #[cfg(not(feature = "history"))]
    pub fn len(&self) -> usize {
        0
    }
}

impl<const N: usize, const LINE: usize> Default for Carousel<N, LINE> {
    fn default() -> Self {
        Self::new()
    }
}
