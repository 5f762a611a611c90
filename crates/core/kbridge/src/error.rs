//! Bridge error types.

use core::ffi::c_int;
use core::fmt;

const EFAULT: c_int = 14;
const ENODEV: c_int = 19;
const EINVAL: c_int = 22;

/// Errors reported by [`LogBridge`](crate::LogBridge).
///
/// None of these is fatal to the caller; they are values for the caller to
/// act on. Only [`Truncated`](Self::Truncated) still produces output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    /// The line exceeded the sink's capacity and was written shortened.
    Truncated,
    /// The message contained a NUL byte or invalid UTF-8. Nothing was written.
    InvalidEncoding,
    /// No sink has been registered yet. Nothing was written.
    SinkUnavailable,
    /// A panic was contained at the C boundary.
    Fault,
}

impl BridgeError {
    /// Returns `true` if the line reached the sink despite the error.
    pub const fn was_emitted(self) -> bool {
        matches!(self, Self::Truncated)
    }

    /// Maps the error onto the return convention of the C entry points:
    /// a positive value for a degraded but written line, a negative errno
    /// otherwise.
    pub const fn as_errno(self) -> c_int {
        match self {
            Self::Truncated => 1,
            Self::InvalidEncoding => -EINVAL,
            Self::SinkUnavailable => -ENODEV,
            Self::Fault => -EFAULT,
        }
    }

    /// Maps an emit result onto the C return convention (`0` on success).
    pub const fn result_to_errno(result: Result<(), Self>) -> c_int {
        match result {
            Ok(()) => 0,
            Err(e) => e.as_errno(),
        }
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => f.write_str("log line truncated"),
            Self::InvalidEncoding => f.write_str("invalid log message encoding"),
            Self::SinkUnavailable => f.write_str("kernel log sink unavailable"),
            Self::Fault => f.write_str("fault contained at log bridge boundary"),
        }
    }
}

impl core::error::Error for BridgeError {}
