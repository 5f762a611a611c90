//! Unwind containment at the C boundary.
//!
//! Unwinding out of an `extern "C"` function into a C caller is undefined
//! behavior. Kernel builds run with `panic = abort` (set by the target
//! spec), so there is nothing to catch. Host builds enable the `std`
//! feature, which turns any panic below the boundary into `None`.

/// Runs `f`, returning `None` if it panicked.
#[cfg(feature = "std")]
pub fn contain<R>(f: impl FnOnce() -> R) -> Option<R> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).ok()
}

/// Runs `f`. Without `std` a panic aborts before it can unwind.
#[cfg(not(feature = "std"))]
pub fn contain<R>(f: impl FnOnce() -> R) -> Option<R> {
    Some(f())
}
