//! Synchronously settled deferred values
//!
//! A [`Thenable`] runs its computation while it is being constructed and is
//! already settled by the time the constructor returns. There is no pending
//! state to observe: the outcome is flattened through
//! [`unwrap_sync`](crate::runtime::unwrap::unwrap_sync), and anything that
//! would need real asynchronous scheduling turns into a rejection carrying an
//! [`UnwrapError`](crate::runtime::value::UnwrapError).
//!
//! # Example
//!
//! ```rust
//! use release_zalgo::runtime::thenable::Thenable;
//! use release_zalgo::runtime::value::{Outcome, Resolution};
//!
//! let inner: Thenable<i32, String> = Thenable::new(|| Ok(Resolution::Value(20)));
//! let outer = Thenable::new(|| Ok(inner.into_resolution()));
//! let doubled = outer.then(|value| -> Outcome<i32, String> { Ok(Resolution::Value(value * 2)) });
//!
//! assert_eq!(doubled.value(), Some(&40));
//! ```

use std::fmt;
use std::future::{ready, IntoFuture, Ready};
use std::rc::Rc;

use tracing::trace;

use crate::runtime::unwrap::unwrap_sync;
use crate::runtime::value::{Fail, Outcome, Rejection, Resolution, Settle, Then};

/// Observable state of a thenable. There is no pending variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThenableState {
    Fulfilled,
    Rejected,
}

/// Settled payload of a thenable.
#[derive(Debug, Clone)]
pub enum Settled<T, E> {
    /// Flattened value
    Fulfilled(T),
    /// Failure, kept exactly as raised
    Rejected(Rejection<E>),
}

impl<T, E> Settled<T, E> {
    fn state(&self) -> ThenableState {
        match self {
            Settled::Fulfilled(_) => ThenableState::Fulfilled,
            Settled::Rejected(_) => ThenableState::Rejected,
        }
    }
}

/// Callback run on the fulfilled value.
pub type OnFulfilled<'a, T, E> = Box<dyn FnOnce(&T) -> Outcome<T, E> + 'a>;

/// Callback run on the rejection reason.
pub type OnRejected<'a, T, E> = Box<dyn FnOnce(&Rejection<E>) -> Outcome<T, E> + 'a>;

/// Settle-once deferred value whose outcome is known at construction.
///
/// Cloning is cheap and yields the same thenable; use [`Thenable::ptr_eq`]
/// to compare identity.
pub struct Thenable<T, E> {
    settled: Rc<Settled<T, E>>,
}

impl<T, E> Thenable<T, E> {
    /// Run `computation` now and settle with its flattened outcome.
    ///
    /// An `Ok` resolution is unwrapped synchronously; a failure while
    /// unwrapping rejects the thenable. An `Err` is kept as the reason
    /// without being unwrapped.
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> Outcome<T, E>,
    {
        let settled = match computation() {
            Ok(resolution) => match unwrap_sync(resolution) {
                Ok(value) => Settled::Fulfilled(value),
                Err(reason) => Settled::Rejected(reason),
            },
            Err(reason) => Settled::Rejected(reason),
        };
        trace!(state = ?settled.state(), "thenable settled");

        Self {
            settled: Rc::new(settled),
        }
    }

    #[inline]
    pub fn state(&self) -> ThenableState {
        self.settled.state()
    }

    #[inline]
    pub fn is_fulfilled(&self) -> bool {
        self.state() == ThenableState::Fulfilled
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.state() == ThenableState::Rejected
    }

    /// The fulfilled value, if fulfilled.
    pub fn value(&self) -> Option<&T> {
        match self.settled.as_ref() {
            Settled::Fulfilled(value) => Some(value),
            Settled::Rejected(_) => None,
        }
    }

    /// The rejection reason, if rejected.
    pub fn reason(&self) -> Option<&Rejection<E>> {
        match self.settled.as_ref() {
            Settled::Fulfilled(_) => None,
            Settled::Rejected(reason) => Some(reason),
        }
    }

    /// Borrow the outcome as a `Result`.
    pub fn as_result(&self) -> Result<&T, &Rejection<E>> {
        match self.settled.as_ref() {
            Settled::Fulfilled(value) => Ok(value),
            Settled::Rejected(reason) => Err(reason),
        }
    }

    /// Whether both handles refer to the same thenable.
    #[inline]
    pub fn ptr_eq(
        this: &Self,
        other: &Self,
    ) -> bool {
        Rc::ptr_eq(&this.settled, &other.settled)
    }

    /// Chain on the settled outcome.
    ///
    /// The callback matching the current state runs immediately and its
    /// outcome becomes a new thenable. When no supplied callback matches,
    /// this thenable itself is returned and nothing is called.
    pub fn then_with(
        &self,
        on_fulfilled: Option<OnFulfilled<'_, T, E>>,
        on_rejected: Option<OnRejected<'_, T, E>>,
    ) -> Self {
        match (self.settled.as_ref(), on_fulfilled, on_rejected) {
            (Settled::Fulfilled(value), Some(on_fulfilled), _) => Thenable::new(|| on_fulfilled(value)),
            (Settled::Rejected(reason), _, Some(on_rejected)) => Thenable::new(|| on_rejected(reason)),
            _ => self.clone(),
        }
    }

    /// Chain on the fulfilled value.
    pub fn then<F>(
        &self,
        on_fulfilled: F,
    ) -> Self
    where
        F: FnOnce(&T) -> Outcome<T, E>,
    {
        self.then_with(Some(Box::new(on_fulfilled)), None)
    }

    /// Chain on the rejection reason. Same as `then_with(None, Some(..))`.
    pub fn catch<G>(
        &self,
        on_rejected: G,
    ) -> Self
    where
        G: FnOnce(&Rejection<E>) -> Outcome<T, E>,
    {
        self.then_with(None, Some(Box::new(on_rejected)))
    }
}

impl<T, E> Thenable<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    /// Use this thenable as the outcome of another computation.
    pub fn into_resolution(self) -> Resolution<T, E> {
        Resolution::thenable(Rc::new(self))
    }

    /// Owned copy of the outcome.
    pub fn to_result(&self) -> Result<T, Rejection<E>> {
        match self.settled.as_ref() {
            Settled::Fulfilled(value) => Ok(value.clone()),
            Settled::Rejected(reason) => Err(reason.clone()),
        }
    }
}

impl<T, E> Clone for Thenable<T, E> {
    fn clone(&self) -> Self {
        Self {
            settled: Rc::clone(&self.settled),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Thenable<T, E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_tuple("Thenable").field(self.settled.as_ref()).finish()
    }
}

impl<T, E> Then<T, E> for Thenable<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    fn then(
        &self,
        settle: Settle<T, E>,
        fail: Fail<T, E>,
    ) {
        match self.settled.as_ref() {
            Settled::Fulfilled(value) => settle.fulfill(value.clone()),
            Settled::Rejected(reason) => fail.reject(reason.clone()),
        }
    }
}

/// Awaiting a thenable yields its outcome immediately.
impl<T, E> IntoFuture for Thenable<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    type Output = Result<T, Rejection<E>>;
    type IntoFuture = Ready<Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        ready(self.to_result())
    }
}
