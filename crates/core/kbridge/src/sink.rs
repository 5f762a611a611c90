//! Kernel log sink descriptors and their registry.
//!
//! The sink is the kernel's C-ABI logging primitive. The bridge never owns
//! it: a [`KernelLogSink`] describes it, and a [`SinkSlot`] publishes a
//! `&'static` reference to that description with a single atomic pointer.
//! An empty slot means the sink is not available yet (early boot); emits
//! then fail with [`SinkUnavailable`](crate::BridgeError::SinkUnavailable).
//!
//! This module is the only place the raw sink function is called.

use core::ffi::{CStr, c_char, c_int};
use core::ptr;

use crate::LogLevel;
use crate::loom_compat::{AtomicPtr, Ordering};

/// The raw C-ABI write function of a kernel log sink.
///
/// Arguments are the kernel loglevel, a NUL-terminated line, and the
/// sink's maximum line length (terminator included). No return value: the
/// sink is fire-and-forget.
pub type RawSinkFn = unsafe extern "C" fn(level: c_int, line: *const c_char, max_len: usize);

/// Description of an external kernel log sink.
#[derive(Debug)]
pub struct KernelLogSink {
    name: &'static str,
    max_len: usize,
    write: RawSinkFn,
}

impl KernelLogSink {
    /// Describes a sink.
    ///
    /// `max_len` is the longest line the sink accepts, terminator included.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is zero (at compile time when used in a `static`).
    pub const fn new(name: &'static str, max_len: usize, write: RawSinkFn) -> Self {
        assert!(max_len > 0, "a sink must accept at least the terminator");
        Self {
            name,
            max_len,
            write,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Maximum line length in bytes, terminator included.
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Hands one terminated line to the sink.
    ///
    /// Callers keep `line` within [`max_len`](Self::max_len) bytes.
    pub(crate) fn write(&self, level: LogLevel, line: &CStr) {
        debug_assert!(line.to_bytes_with_nul().len() <= self.max_len);
        // SAFETY: a sink only becomes reachable through `SinkSlot::register`,
        // whose caller guarantees `write` accepts any NUL-terminated line of
        // at most `max_len` bytes from any context without unwinding. `line`
        // outlives the call and the sink does not retain it.
        unsafe { (self.write)(level.as_raw(), line.as_ptr(), self.max_len) };
    }
}

/// A lock-free slot publishing the current sink.
pub struct SinkSlot {
    sink: AtomicPtr<KernelLogSink>,
}

impl SinkSlot {
    /// Creates an empty slot.
    #[cfg(not(loom))]
    pub const fn new() -> Self {
        Self {
            sink: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Creates an empty slot.
    #[cfg(loom)]
    pub fn new() -> Self {
        Self {
            sink: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Publishes `sink`, replacing any previous one.
    ///
    /// May be called more than once (e.g., once for an early console, once
    /// for the real log buffer). Uses `Release` ordering so readers that see
    /// the new pointer also see the fully initialized descriptor.
    ///
    /// # Safety
    ///
    /// The sink's write function must be safe to call from any context,
    /// including interrupt handlers, with any NUL-terminated line of at most
    /// `max_len` bytes. It must not block, retain the line, or unwind.
    pub unsafe fn register(&self, sink: &'static KernelLogSink) {
        self.sink
            .store(ptr::from_ref(sink).cast_mut(), Ordering::Release);
    }

    /// Empties the slot, returning the sink that was published.
    pub fn unregister(&self) -> Option<&'static KernelLogSink> {
        let old = self.sink.swap(ptr::null_mut(), Ordering::AcqRel);
        // SAFETY: only `&'static KernelLogSink` references or null are stored.
        unsafe { old.cast_const().as_ref() }
    }

    /// Returns the published sink, if any.
    #[inline]
    pub fn current(&self) -> Option<&'static KernelLogSink> {
        let ptr = self.sink.load(Ordering::Acquire);
        // SAFETY: only `&'static KernelLogSink` references or null are stored.
        unsafe { ptr.cast_const().as_ref() }
    }

    /// Returns `true` if a sink is published.
    pub fn is_available(&self) -> bool {
        self.current().is_some()
    }
}

impl Default for SinkSlot {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Process-wide slot
// ---------------------------------------------------------------------------

#[cfg(not(loom))]
static GLOBAL: SinkSlot = SinkSlot::new();

/// Returns the process-wide sink slot.
#[cfg(not(loom))]
#[inline]
pub fn global() -> &'static SinkSlot {
    &GLOBAL
}

/// Publishes `sink` in the process-wide slot.
///
/// # Safety
///
/// Same contract as [`SinkSlot::register`].
#[cfg(not(loom))]
pub unsafe fn register_global(sink: &'static KernelLogSink) {
    // SAFETY: forwarded to the caller.
    unsafe { GLOBAL.register(sink) };
}

/// Empties the process-wide slot.
#[cfg(not(loom))]
pub fn unregister_global() -> Option<&'static KernelLogSink> {
    GLOBAL.unregister()
}
