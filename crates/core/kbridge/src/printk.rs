//! Sink over the kernel's `_printk`.
//!
//! Only available with the `printk` feature, in builds linked against the
//! kernel. Register it once the console is up:
//!
//! ```ignore
//! // SAFETY: `_printk` may be called from any context.
//! unsafe { kbridge::sink::register_global(&kbridge::printk::PRINTK) };
//! ```

use core::ffi::{c_char, c_int};

use crate::{KernelLogSink, LogLevel};

/// Size of one printk record.
const PRINTK_RECORD_MAX: usize = 1024;
/// Bytes printk reserves in a record for its own prefix.
const PRINTK_PREFIX_MAX: usize = 48;

/// Longest line handed to `_printk`, terminator included.
pub const PRINTK_LINE_MAX: usize = PRINTK_RECORD_MAX - PRINTK_PREFIX_MAX;

unsafe extern "C" {
    fn _printk(fmt: *const c_char, ...) -> c_int;
}

unsafe extern "C" fn printk_write(level: c_int, line: *const c_char, _max_len: usize) {
    let fmt = LogLevel::from_raw(level)
        .unwrap_or(LogLevel::Info)
        .printk_format();
    // SAFETY: `fmt` is a static C string with exactly one `%s` conversion and
    // `line` is the NUL-terminated string consumed by it. The line is never
    // used as the format, so `%` in a message is printed literally.
    unsafe { _printk(fmt.as_ptr(), line) };
}

/// The kernel's printk, as a bridge sink.
pub static PRINTK: KernelLogSink = KernelLogSink::new("printk", PRINTK_LINE_MAX, printk_write);
