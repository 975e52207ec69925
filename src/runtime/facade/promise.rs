//! Host asynchronous primitive
//!
//! `Promise` is a boxed `Send` future resolving to `Result<T, E>`. It is what
//! the asynchronous facade hands out, and it is also the canonical value the
//! synchronous runtime refuses to treat as settled.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use tracing::trace;

use crate::runtime::value::{Fail, Settle, Then};

/// Asynchronous value settled by whichever executor polls it.
pub struct Promise<T, E> {
    future: BoxFuture<'static, Result<T, E>>,
}

impl<T, E> Promise<T, E> {
    /// Wrap a future.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }
}

impl<T, E> Promise<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Promise already fulfilled with `value`.
    pub fn resolved(value: T) -> Self {
        Self::new(future::ready(Ok(value)))
    }

    /// Promise already rejected with `reason`.
    pub fn rejected(reason: E) -> Self {
        Self::new(future::ready(Err(reason)))
    }
}

impl<T, E> Future for Promise<T, E> {
    type Output = Result<T, E>;

    fn poll(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Self::Output> {
        self.future.poll_unpin(cx)
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Promise").finish_non_exhaustive()
    }
}

/// A promise is thenable-shaped but only ever settles on a later turn, once
/// an executor drives it. Nothing runs inside `then`, so the callbacks are
/// released unused.
impl<T, E> Then<T, E> for Promise<T, E>
where
    T: 'static,
    E: 'static,
{
    fn then(
        &self,
        _settle: Settle<T, E>,
        _fail: Fail<T, E>,
    ) {
        trace!("promise continuation deferred to its executor");
    }
}
