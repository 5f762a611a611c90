//! Log severity levels.

use core::ffi::{CStr, c_int};

/// Kernel log severity level.
///
/// Discriminants are the kernel's numeric loglevels, which is also the raw
/// representation passed across the C boundary. Lower is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Error: something failed but the system may continue (`KERN_ERR`).
    Error = 3,
    /// Warning: unexpected condition, not necessarily an error (`KERN_WARNING`).
    Warn = 4,
    /// Informational: high-level progress messages (`KERN_INFO`).
    Info = 6,
}

impl LogLevel {
    /// Returns the human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
        }
    }

    /// Returns the raw kernel loglevel.
    pub const fn as_raw(self) -> c_int {
        self as c_int
    }

    /// Converts a raw kernel loglevel back into a [`LogLevel`].
    ///
    /// Returns `None` for loglevels the bridge does not pass through.
    pub const fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            3 => Some(Self::Error),
            4 => Some(Self::Warn),
            6 => Some(Self::Info),
            _ => None,
        }
    }

    /// Returns the `printk` format string for this level: the `SOH` level
    /// marker followed by a single `%s` conversion.
    ///
    /// The message itself is always the `%s` argument, never part of the
    /// format.
    pub const fn printk_format(self) -> &'static CStr {
        match self {
            Self::Error => c"\x013%s",
            Self::Warn => c"\x014%s",
            Self::Info => c"\x016%s",
        }
    }
}

impl core::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
