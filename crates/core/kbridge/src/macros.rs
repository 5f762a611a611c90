//! Leveled logging macros over the process-wide bridge.
//!
//! Lines are formatted straight into the bridge's stack buffer and tagged
//! with the calling module, giving `"<module path>: <message>"`. [`kemit!`]
//! returns the emit result; the per-level macros discard it, like
//! `pr_info!` and friends.

/// Emits a formatted line at the given level and returns the
/// `Result<(), BridgeError>` of the emit.
#[macro_export]
macro_rules! kemit {
    ($level:expr, $($arg:tt)*) => {
        $crate::LogBridge::global().emit_fmt(
            $level,
            ::core::option::Option::Some(::core::module_path!()),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Logs an error-level message.
#[macro_export]
macro_rules! kerr {
    ($($arg:tt)*) => {{
        let _ = $crate::kemit!($crate::LogLevel::Error, $($arg)*);
    }};
}

/// Logs a warning-level message.
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {{
        let _ = $crate::kemit!($crate::LogLevel::Warn, $($arg)*);
    }};
}

/// Logs an info-level message.
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {{
        let _ = $crate::kemit!($crate::LogLevel::Info, $($arg)*);
    }};
}
