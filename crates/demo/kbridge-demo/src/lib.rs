//! Demo module logging through the kernel log bridge.
//!
//! Rust code calls [`demo_print`]; C code calls the exported `demo_print`
//! symbol. Both write one fixed informational line. They go through the
//! process-wide sink slot, which loom model builds leave out.

#![cfg_attr(not(test), no_std)]

#[cfg(not(loom))]
use kbridge::{BridgeError, LogLevel};

/// The line written by [`demo_print`].
pub const DEMO_MESSAGE: &str = "Hello from demo!";

/// Writes [`DEMO_MESSAGE`] at info level through the process-wide sink.
///
/// # Errors
///
/// [`BridgeError::SinkUnavailable`] if no sink is registered yet.
#[cfg(not(loom))]
pub fn demo_print() -> Result<(), BridgeError> {
    kbridge::emit(LogLevel::Info, DEMO_MESSAGE)
}

/// C entry point for [`demo_print`]. Errors are dropped, as with `pr_info`.
#[cfg(not(loom))]
#[unsafe(export_name = "demo_print")]
pub extern "C" fn demo_print_c() {
    let _ = kbridge::guard::contain(demo_print);
}

/// Module init for kernel builds: publishes the printk sink, then greets.
///
/// # Errors
///
/// Never fails once printk is registered; the result is passed through from
/// [`demo_print`].
#[cfg(all(feature = "printk", not(loom)))]
pub fn init() -> Result<(), BridgeError> {
    // SAFETY: `_printk` may be called from any context, never sleeps and
    // copies the line into the log buffer.
    unsafe { kbridge::sink::register_global(&kbridge::printk::PRINTK) };
    demo_print()
}
