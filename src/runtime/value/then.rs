//! The `then` capability and its settlement callbacks
//!
//! `Settle` and `Fail` share one settle-once slot. Only the first call to
//! either of them is recorded; once the slot is closed every later call is
//! dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::{Outcome, Rejection, Resolution};

/// A value with a callable `then` member.
///
/// Implementors report their outcome by calling `settle` or `fail`. The
/// synchronous runtime only observes calls made before `then` returns.
pub trait Then<T, E> {
    /// Register the settlement callbacks. `self` is the thenable being asked.
    fn then(
        &self,
        settle: Settle<T, E>,
        fail: Fail<T, E>,
    );
}

struct SlotState<T, E> {
    open: bool,
    outcome: Option<Outcome<T, E>>,
}

/// Settle-once cell written by `Settle`/`Fail` and read by the unwrapper.
pub(crate) struct Slot<T, E> {
    state: Rc<RefCell<SlotState<T, E>>>,
}

impl<T, E> Slot<T, E> {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SlotState {
                open: true,
                outcome: None,
            })),
        }
    }

    /// Callback pair writing into this slot.
    pub(crate) fn callbacks(&self) -> (Settle<T, E>, Fail<T, E>) {
        (
            Settle {
                state: Rc::clone(&self.state),
            },
            Fail {
                state: Rc::clone(&self.state),
            },
        )
    }

    /// Stop accepting settlements and take whatever was recorded.
    pub(crate) fn close(self) -> Option<Outcome<T, E>> {
        let mut state = self.state.borrow_mut();
        state.open = false;
        state.outcome.take()
    }
}

fn record<T, E>(
    state: &RefCell<SlotState<T, E>>,
    outcome: Outcome<T, E>,
) {
    let mut state = state.borrow_mut();
    if state.open && state.outcome.is_none() {
        state.outcome = Some(outcome);
    } else {
        trace!(open = state.open, "ignoring repeated settlement");
    }
}

/// Fulfilment callback handed to `Then::then`.
pub struct Settle<T, E> {
    state: Rc<RefCell<SlotState<T, E>>>,
}

impl<T, E> Settle<T, E> {
    /// Settle with a resolution, which is unwrapped further if thenable-shaped.
    pub fn resolve(
        &self,
        resolution: Resolution<T, E>,
    ) {
        record(&self.state, Ok(resolution));
    }

    /// Settle with a terminal value.
    pub fn fulfill(
        &self,
        value: T,
    ) {
        self.resolve(Resolution::Value(value));
    }
}

impl<T, E> Clone for Settle<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T, E> fmt::Debug for Settle<T, E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Settle")
            .field("open", &self.state.try_borrow().map(|state| state.open).ok())
            .finish()
    }
}

/// Rejection callback handed to `Then::then`.
pub struct Fail<T, E> {
    state: Rc<RefCell<SlotState<T, E>>>,
}

impl<T, E> Fail<T, E> {
    /// Settle with a failure. The reason is surfaced as-is.
    pub fn reject(
        &self,
        reason: Rejection<E>,
    ) {
        record(&self.state, Err(reason));
    }

    /// Settle with a raised computation failure.
    pub fn raise(
        &self,
        reason: E,
    ) {
        self.reject(Rejection::Raised(reason));
    }
}

impl<T, E> Clone for Fail<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T, E> fmt::Debug for Fail<T, E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Fail")
            .field("open", &self.state.try_borrow().map(|state| state.open).ok())
            .finish()
    }
}
