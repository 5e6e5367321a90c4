//! Cooperative cancellation for long scans.
//!
//! The engine checks the token between block reads. A Ctrl-C handler (or any
//! other thread) holding a clone can request the stop; the scan then returns
//! `DigestError::Cancelled` and drops its file handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that any scan observing this token stop at the next block boundary.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
