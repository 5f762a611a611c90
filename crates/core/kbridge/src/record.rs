//! Transient log records.

use crate::LogLevel;
use crate::error::BridgeError;

/// One log line, borrowed from the caller for the duration of an emit.
///
/// The message is held as bytes so records can also be built from foreign
/// buffers; [`validate`](Self::validate) checks it before anything crosses
/// the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    level: LogLevel,
    message: &'a [u8],
    origin: Option<&'static str>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record from UTF-8 text.
    pub const fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            level,
            message: message.as_bytes(),
            origin: None,
        }
    }

    /// Creates a record from raw bytes of unknown encoding.
    pub const fn from_bytes(level: LogLevel, message: &'a [u8]) -> Self {
        Self {
            level,
            message,
            origin: None,
        }
    }

    /// Tags the record with the module it originates from. The emitted line
    /// becomes `"<origin>: <message>"`.
    #[must_use]
    pub const fn with_origin(mut self, origin: &'static str) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Returns the record's level.
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the raw message bytes.
    pub const fn message(&self) -> &'a [u8] {
        self.message
    }

    /// Returns the originating module, if any.
    pub const fn origin(&self) -> Option<&'static str> {
        self.origin
    }

    /// Checks that the message and origin can be passed as a C string and
    /// returns the message as text.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidEncoding`] if either contains a NUL
    /// byte or the message is not valid UTF-8.
    pub fn validate(&self) -> Result<&'a str, BridgeError> {
        if self.message.contains(&0) {
            return Err(BridgeError::InvalidEncoding);
        }
        if self.origin.is_some_and(|origin| origin.as_bytes().contains(&0)) {
            return Err(BridgeError::InvalidEncoding);
        }
        core::str::from_utf8(self.message).map_err(|_| BridgeError::InvalidEncoding)
    }
}
