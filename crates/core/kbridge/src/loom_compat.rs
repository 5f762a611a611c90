//! Loom compatibility shim.
//!
//! When compiled with `cfg(loom)`, re-exports loom's atomics so the sink
//! slot can be model-checked under loom's scheduler. Otherwise, re-exports
//! the `core::sync::atomic` types.

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{AtomicPtr, Ordering};

#[cfg(not(loom))]
pub(crate) use core::sync::atomic::{AtomicPtr, Ordering};
