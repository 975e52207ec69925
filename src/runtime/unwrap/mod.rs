//! Synchronous unwrapping of thenable-shaped values
//!
//! `unwrap_sync` forces a value to reveal its outcome within the current
//! call. Terminal values come back unchanged. A thenable is asked once
//! through its `then`; whatever it settles with is unwrapped again until a
//! terminal value or a failure is reached. A thenable that does not settle
//! before its `then` returns is reported as an [`UnwrapError`] instead of
//! being waited on.
//!
//! # Guards
//!
//! Every thenable visited during one unwrap is kept alive until the unwrap
//! finishes. Settling to one of them again is rejected with
//! [`UnwrapErrorKind::SelfResolution`], and chains longer than
//! [`UnwrapLimits::max_depth`] are rejected with
//! [`UnwrapErrorKind::DepthExceeded`].

pub mod limits;

pub use limits::{UnwrapLimits, DEFAULT_MAX_DEPTH};

use tracing::{debug, trace};

use crate::runtime::value::then::Slot;
use crate::runtime::value::{Outcome, Rejection, Resolution, ThenRef, UnwrapError, UnwrapErrorKind};

/// Unwrap `value` using the process-wide [`UnwrapLimits`].
pub fn unwrap_sync<T, E>(value: Resolution<T, E>) -> Result<T, Rejection<E>> {
    unwrap_sync_with(value, UnwrapLimits::current())
}

/// Unwrap `value` under explicit limits.
pub fn unwrap_sync_with<T, E>(
    value: Resolution<T, E>,
    limits: UnwrapLimits,
) -> Result<T, Rejection<E>> {
    let mut chain: Vec<ThenRef<T, E>> = Vec::new();
    let mut current = value;

    loop {
        let thenable = match current {
            Resolution::Value(value) => {
                trace!(depth = chain.len(), "unwrapped terminal value");
                return Ok(value);
            }
            Resolution::Thenable(thenable) => thenable,
        };

        if chain.iter().any(|seen| seen.ptr_eq(&thenable)) {
            return Err(raise(UnwrapErrorKind::SelfResolution, &thenable));
        }
        if chain.len() >= limits.max_depth {
            return Err(raise(
                UnwrapErrorKind::DepthExceeded {
                    limit: limits.max_depth,
                },
                &thenable,
            ));
        }

        trace!(depth = chain.len(), thenable = ?thenable, "asking thenable to settle");
        match settle_once(&thenable) {
            Some(Ok(next)) => {
                chain.push(thenable);
                current = next;
            }
            // Failure payloads are surfaced as-is, never unwrapped.
            Some(Err(reason)) => return Err(reason),
            None => return Err(raise(UnwrapErrorKind::NotSynchronous, &thenable)),
        }
    }
}

/// Call `then` exactly once and report what was settled during the call.
fn settle_once<T, E>(thenable: &ThenRef<T, E>) -> Option<Outcome<T, E>> {
    let slot = Slot::new();
    let (settle, fail) = slot.callbacks();
    thenable.as_then().then(settle, fail);
    slot.close()
}

fn raise<T, E>(
    kind: UnwrapErrorKind,
    thenable: &ThenRef<T, E>,
) -> Rejection<E> {
    let error = UnwrapError::new(kind, thenable.erase());
    debug!(error = %error, "synchronous unwrap failed");
    Rejection::Unwrap(error)
}
