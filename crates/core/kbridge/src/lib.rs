//! Kernel logging bridge.
//!
//! Carries log lines from safe Rust code into the kernel's C-ABI logging
//! sink (`printk` or an equivalent). Every path through the bridge is
//! allocation-free, lock-free and bounded, so it can be used from interrupt
//! context and during early boot:
//!
//! - [`LogBridge`] validates a message, copies it into a stack-local
//!   [`LineBuf`] and hands the terminated line to the sink exactly once.
//! - [`KernelLogSink`] describes the external sink: a raw `extern "C"`
//!   write function plus its maximum line length. Sinks are published through
//!   a lock-free [`SinkSlot`]; until one is registered, emits report
//!   [`BridgeError::SinkUnavailable`].
//! - [`kinfo!`] / [`kwarn!`] / [`kerr!`] format straight into the stack
//!   buffer and tag the line with the calling module.
//!
//! The crate is host-testable: with the default `std` feature the exported
//! C entry point additionally contains panics before they reach a C caller.

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod bridge;
pub mod error;
pub mod ffi;
pub mod guard;
pub mod level;
pub mod line;
mod loom_compat;
mod macros;
#[cfg(feature = "printk")]
pub mod printk;
pub mod record;
pub mod sink;

pub use bridge::LogBridge;
#[cfg(not(loom))]
pub use bridge::emit;
pub use error::BridgeError;
pub use level::LogLevel;
pub use line::LineBuf;
pub use record::LogRecord;
pub use sink::{KernelLogSink, RawSinkFn, SinkSlot};

/// Default capacity of a single log line in bytes, terminator included.
pub const LINE_MAX: usize = 1024;
