//! Host test support for the kernel log bridge.
//!
//! - [`capture_write`] is a raw sink function that records the last line it
//!   received, per thread, without allocating. Because emits run
//!   synchronously on the caller's thread, each test thread only ever sees
//!   its own writes, even when all tests share the process-wide sink.
//! - [`CountingAlloc`] is a global allocator that counts allocations per
//!   thread, for asserting that a code path never touches the heap:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: kbridge_test::CountingAlloc = kbridge_test::CountingAlloc;
//!
//! let (_, allocs) = kbridge_test::count_allocations(|| kbridge::emit(LogLevel::Info, "hi"));
//! assert_eq!(allocs, 0);
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::{Cell, RefCell};
use std::ffi::{CStr, c_char, c_int};

use kbridge::{KernelLogSink, LINE_MAX, LogLevel};

// ---------------------------------------------------------------------------
// Capture sink
// ---------------------------------------------------------------------------

/// Longest line the capture sink keeps, terminator excluded.
pub const CAPTURE_MAX: usize = 2 * LINE_MAX;

struct Capture {
    writes: usize,
    level: c_int,
    max_len: usize,
    line: [u8; CAPTURE_MAX],
    len: usize,
}

impl Capture {
    const EMPTY: Self = Self {
        writes: 0,
        level: 0,
        max_len: 0,
        line: [0; CAPTURE_MAX],
        len: 0,
    };
}

thread_local! {
    static CAPTURE: RefCell<Capture> = const { RefCell::new(Capture::EMPTY) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

/// Raw sink function recording the line on the calling thread.
///
/// # Safety
///
/// `line` must be a valid NUL-terminated string.
pub unsafe extern "C" fn capture_write(level: c_int, line: *const c_char, max_len: usize) {
    // SAFETY: guaranteed by the caller.
    let bytes = unsafe { CStr::from_ptr(line) }.to_bytes();
    CAPTURE.with_borrow_mut(|capture| {
        let len = bytes.len().min(CAPTURE_MAX);
        capture.writes += 1;
        capture.level = level;
        capture.max_len = max_len;
        capture.line[..len].copy_from_slice(&bytes[..len]);
        capture.len = len;
    });
}

/// Capture sink accepting full-size lines.
pub static CAPTURE_SINK: KernelLogSink = KernelLogSink::new("capture", LINE_MAX, capture_write);

/// Publishes [`CAPTURE_SINK`] in the process-wide slot.
#[cfg(not(loom))]
pub fn install_global() {
    // SAFETY: `capture_write` only touches thread-local state, never blocks,
    // never retains the line and cannot unwind.
    unsafe { kbridge::sink::register_global(&CAPTURE_SINK) };
}

/// Clears this thread's capture.
pub fn reset() {
    CAPTURE.with_borrow_mut(|capture| {
        capture.writes = 0;
        capture.len = 0;
    });
}

/// Number of writes seen on this thread since the last [`reset`].
pub fn writes() -> usize {
    CAPTURE.with_borrow(|capture| capture.writes)
}

/// A line recorded by the capture sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Level the line was written at.
    pub level: Option<LogLevel>,
    /// Line content, terminator excluded.
    pub line: Vec<u8>,
    /// `max_len` the bridge passed to the sink.
    pub max_len: usize,
}

/// Returns the last line written on this thread, if any.
pub fn last() -> Option<Captured> {
    CAPTURE.with_borrow(|capture| {
        (capture.writes > 0).then(|| Captured {
            level: LogLevel::from_raw(capture.level),
            line: capture.line[..capture.len].to_vec(),
            max_len: capture.max_len,
        })
    })
}

/// Returns `true` if the last line on this thread is `expected` at `level`.
///
/// Does not allocate.
pub fn last_is(level: LogLevel, expected: &[u8]) -> bool {
    CAPTURE.with_borrow(|capture| {
        capture.writes > 0
            && capture.level == level.as_raw()
            && &capture.line[..capture.len] == expected
    })
}

// ---------------------------------------------------------------------------
// Allocation counting
// ---------------------------------------------------------------------------

/// Global allocator that forwards to [`System`] and counts allocations made
/// by each thread.
pub struct CountingAlloc;

fn count_one() {
    let _ = ALLOCATIONS.try_with(|n| n.set(n.get() + 1));
}

// SAFETY: every call is forwarded unchanged to the system allocator.
unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        count_one();
        // SAFETY: forwarded to the caller.
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        count_one();
        // SAFETY: forwarded to the caller.
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        count_one();
        // SAFETY: forwarded to the caller.
        unsafe { System.realloc(ptr, layout, new_size) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded to the caller.
        unsafe { System.dealloc(ptr, layout) }
    }
}

/// Allocations made by this thread so far. Only meaningful when
/// [`CountingAlloc`] is the global allocator.
pub fn allocations() -> usize {
    ALLOCATIONS.with(Cell::get)
}

/// Runs `f` and returns its result with the number of allocations it made.
pub fn count_allocations<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let before = allocations();
    let result = f();
    (result, allocations() - before)
}
