//! The log bridge.
//!
//! [`LogBridge`] is the safe front of the C sink. Each emit is independent:
//!
//! 1. Load the sink from the slot (one `Acquire` load, no lock).
//! 2. Validate the message: no NUL byte, valid UTF-8.
//! 3. Copy origin prefix and message into a stack [`LineBuf`] sized to
//!    `min(N, sink.max_len())`, truncating on overflow.
//! 4. Hand the terminated line to the sink exactly once.
//!
//! Nothing is allocated, nothing blocks, and no state outlives the call, so
//! concurrent emits from threads or interrupt handlers share nothing but the
//! sink itself.

use core::fmt;

use crate::error::BridgeError;
use crate::line::LineBuf;
use crate::sink::{KernelLogSink, SinkSlot};
use crate::{LINE_MAX, LogLevel, LogRecord};

/// Bridge from safe Rust to a kernel log sink, with lines of at most `N`
/// bytes (terminator included).
#[derive(Clone, Copy)]
pub struct LogBridge<'a, const N: usize = LINE_MAX> {
    slot: &'a SinkSlot,
}

#[cfg(not(loom))]
impl LogBridge<'static> {
    /// Returns a bridge bound to the process-wide sink slot.
    #[inline]
    pub fn global() -> Self {
        Self::new(crate::sink::global())
    }
}

impl<'a, const N: usize> LogBridge<'a, N> {
    /// Creates a bridge that borrows `slot` to find its sink.
    pub const fn new(slot: &'a SinkSlot) -> Self {
        Self { slot }
    }

    /// Emits `message` at `level`.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::Truncated`]: the message did not fit; a shortened
    ///   line was written.
    /// - [`BridgeError::InvalidEncoding`]: the message contains a NUL byte;
    ///   nothing was written.
    /// - [`BridgeError::SinkUnavailable`]: no sink is registered; nothing was
    ///   written.
    pub fn emit(&self, level: LogLevel, message: &str) -> Result<(), BridgeError> {
        self.emit_record(&LogRecord::new(level, message))
    }

    /// Emits a message given as raw bytes, which must be UTF-8.
    ///
    /// # Errors
    ///
    /// As [`emit`](Self::emit); invalid UTF-8 is also
    /// [`BridgeError::InvalidEncoding`].
    pub fn emit_bytes(&self, level: LogLevel, message: &[u8]) -> Result<(), BridgeError> {
        self.emit_record(&LogRecord::from_bytes(level, message))
    }

    /// Emits a full record, prefixing the line with its origin if present.
    ///
    /// # Errors
    ///
    /// As [`emit_bytes`](Self::emit_bytes).
    pub fn emit_record(&self, record: &LogRecord<'_>) -> Result<(), BridgeError> {
        let sink = self.sink()?;
        let message = record.validate()?;

        let mut line = LineBuf::<N>::with_capacity(sink.max_len());
        if let Some(origin) = record.origin() {
            push_origin(&mut line, origin);
        }
        line.push_str(message);
        finish(sink, record.level(), &mut line)
    }

    /// Formats `args` straight into the stack line and emits it.
    ///
    /// The whole output is checked for NUL bytes, including the part past the
    /// truncation point.
    ///
    /// # Errors
    ///
    /// As [`emit`](Self::emit). A `Display` implementation that reports an
    /// error yields [`BridgeError::InvalidEncoding`] and nothing is written.
    pub fn emit_fmt(
        &self,
        level: LogLevel,
        origin: Option<&'static str>,
        args: fmt::Arguments<'_>,
    ) -> Result<(), BridgeError> {
        let sink = self.sink()?;

        let mut line = LineBuf::<N>::with_capacity(sink.max_len());
        if let Some(origin) = origin {
            push_origin(&mut line, origin);
        }
        fmt::write(&mut line, args).map_err(|_| BridgeError::InvalidEncoding)?;
        finish(sink, level, &mut line)
    }

    fn sink(&self) -> Result<&'static KernelLogSink, BridgeError> {
        self.slot.current().ok_or(BridgeError::SinkUnavailable)
    }
}

fn push_origin<const N: usize>(line: &mut LineBuf<N>, origin: &str) {
    line.push_str(origin);
    line.push_str(": ");
}

fn finish<const N: usize>(
    sink: &KernelLogSink,
    level: LogLevel,
    line: &mut LineBuf<N>,
) -> Result<(), BridgeError> {
    let truncated = line.is_truncated();
    let cstr = line.terminate().ok_or(BridgeError::InvalidEncoding)?;
    sink.write(level, cstr);
    if truncated {
        Err(BridgeError::Truncated)
    } else {
        Ok(())
    }
}

/// Emits `message` at `level` through the process-wide sink.
///
/// # Errors
///
/// See [`LogBridge::emit`].
#[cfg(not(loom))]
pub fn emit(level: LogLevel, message: &str) -> Result<(), BridgeError> {
    LogBridge::global().emit(level, message)
}
