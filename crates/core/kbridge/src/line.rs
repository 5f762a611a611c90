//! Fixed-capacity line assembly.
//!
//! [`LineBuf`] builds one NUL-terminated log line in a stack-allocated
//! [`ArrayVec`]. It never allocates, never panics on overflow, and keeps
//! the content a prefix of everything written to it: once a fragment does
//! not fit, the line is cut at the last UTF-8 character boundary that fits
//! and all later fragments are dropped.

use core::ffi::CStr;
use core::fmt;

use planck_noalloc::vec::ArrayVec;

use crate::LINE_MAX;

/// A stack-allocated, NUL-terminated log line of at most `N` bytes
/// (terminator included).
pub struct LineBuf<const N: usize = LINE_MAX> {
    buf: ArrayVec<u8, N>,
    /// Maximum number of content bytes; always `< N`.
    limit: usize,
    truncated: bool,
    invalid: bool,
}

impl<const N: usize> LineBuf<N> {
    /// Creates an empty line using the full buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(N)
    }

    /// Creates an empty line limited to `capacity` bytes, terminator
    /// included. The limit is clamped to `1..=N`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        const { assert!(N > 0, "a line buffer needs room for the terminator") };
        let capacity = capacity.clamp(1, N);
        Self {
            buf: ArrayVec::new(),
            limit: capacity - 1,
            truncated: false,
            invalid: false,
        }
    }

    /// Returns the line capacity, terminator included.
    pub fn capacity(&self) -> usize {
        self.limit + 1
    }

    /// Returns the number of content bytes (terminator excluded).
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` if no content has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if some written text did not fit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns `true` if some written text contained a NUL byte.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Returns the content written so far, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        match self.buf.as_slice() {
            [content @ .., 0] => content,
            content => content,
        }
    }

    /// Appends `s`, truncating at a character boundary if it does not fit.
    ///
    /// Text containing a NUL byte is not copied and marks the line invalid.
    /// Nothing is appended after the line has been truncated or terminated.
    pub fn push_str(&mut self, s: &str) {
        if s.as_bytes().contains(&0) {
            self.invalid = true;
            return;
        }
        if self.truncated || self.is_terminated() {
            return;
        }

        let room = self.limit - self.buf.len();
        let take = if s.len() <= room {
            s.len()
        } else {
            self.truncated = true;
            floor_char_boundary(s, room)
        };
        for &byte in s.as_bytes().iter().take(take) {
            // Cannot fail: `take <= room` and `limit < N`.
            let _ = self.buf.try_push(byte);
        }
    }

    /// Terminates the line and returns it as a C string.
    ///
    /// Returns `None` if the line is invalid. Calling this again returns the
    /// same string.
    pub fn terminate(&mut self) -> Option<&CStr> {
        if self.invalid {
            return None;
        }
        if !self.is_terminated() {
            // Cannot fail: content never exceeds `limit`, leaving one slot.
            let _ = self.buf.try_push(0);
        }
        CStr::from_bytes_with_nul(self.buf.as_slice()).ok()
    }

    fn is_terminated(&self) -> bool {
        self.buf.as_slice().last() == Some(&0)
    }
}

impl<const N: usize> Default for LineBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuf<N> {
    /// Never fails, so formatting runs to completion and a NUL anywhere in
    /// the output is still detected after truncation.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

/// Largest index `<= index` that lies on a character boundary of `s`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
