//! Limits applied while flattening thenable chains

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of nested thenables one unwrap will follow.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Process-wide depth limit (stored atomically so `apply` can run from any thread)
static MAX_DEPTH: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_DEPTH);

/// Bounds for one synchronous unwrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapLimits {
    /// Maximum number of thenable layers followed before giving up.
    pub max_depth: usize,
}

impl UnwrapLimits {
    /// Limits currently installed for the process.
    pub fn current() -> Self {
        Self {
            max_depth: MAX_DEPTH.load(Ordering::SeqCst),
        }
    }

    /// Install these limits process-wide.
    pub fn install(self) {
        MAX_DEPTH.store(self.max_depth.max(1), Ordering::SeqCst);
    }
}

impl Default for UnwrapLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
