//! C entry points into the bridge.
//!
//! C code hands over a pointer/length pair rather than a C string, so an
//! embedded NUL is detected instead of silently ending the message early.
//! Results use the kernel convention: `0` on success, a positive value for
//! a degraded line that was still written, a negative errno otherwise (see
//! [`BridgeError::as_errno`]).

use core::ffi::{c_char, c_int};

use crate::guard;
use crate::{BridgeError, LogBridge, LogLevel};

/// Emits `len` bytes starting at `msg` through `bridge` at the raw kernel
/// loglevel `level`, containing any panic.
///
/// An unknown level, a null `msg` with a non-zero `len`, or a `len` above
/// `isize::MAX` is reported as [`BridgeError::InvalidEncoding`].
///
/// # Safety
///
/// If `msg` is non-null and `len` is non-zero, `msg` must point to `len`
/// readable bytes that stay valid for the duration of the call.
pub unsafe fn emit_raw<const N: usize>(
    bridge: &LogBridge<'_, N>,
    level: c_int,
    msg: *const c_char,
    len: usize,
) -> c_int {
    let Some(level) = LogLevel::from_raw(level) else {
        return BridgeError::InvalidEncoding.as_errno();
    };
    let bytes: &[u8] = if len == 0 {
        &[]
    } else if msg.is_null() || isize::try_from(len).is_err() {
        return BridgeError::InvalidEncoding.as_errno();
    } else {
        // SAFETY: non-null, `len` fits in `isize`, and the caller guarantees
        // `len` readable bytes for the duration of the call.
        unsafe { core::slice::from_raw_parts(msg.cast::<u8>(), len) }
    };

    let result =
        guard::contain(|| bridge.emit_bytes(level, bytes)).unwrap_or(Err(BridgeError::Fault));
    BridgeError::result_to_errno(result)
}

/// Emits a message from C through the process-wide sink.
///
/// Returns `0` on success, `1` if the line was truncated, `-EINVAL` for an
/// invalid message or level, `-ENODEV` if no sink is registered, and
/// `-EFAULT` if a fault was contained.
///
/// # Safety
///
/// If `msg` is non-null and `len` is non-zero, `msg` must point to `len`
/// readable bytes that stay valid for the duration of the call.
#[cfg(not(loom))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kbridge_emit(level: c_int, msg: *const c_char, len: usize) -> c_int {
    // SAFETY: forwarded to the caller.
    unsafe { emit_raw(&LogBridge::global(), level, msg, len) }
}
