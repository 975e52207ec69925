//! API objects accepted by the facades
//!
//! An API object exposes the same logical operation under two names:
//! `sync` for the synchronous facade and `asynchronous` for the asynchronous
//! one. Arguments are forwarded positionally as a single tuple.

use std::future::Future;

use super::promise::Promise;
use crate::runtime::value::Outcome;

/// Synchronous implementation of an operation.
pub trait SyncApi<Args> {
    type Value;
    type Error;

    fn sync(
        &self,
        args: Args,
    ) -> Outcome<Self::Value, Self::Error>;
}

/// Asynchronous implementation of an operation.
pub trait AsyncApi<Args> {
    type Value;
    type Error;

    fn asynchronous(
        &self,
        args: Args,
    ) -> Promise<Self::Value, Self::Error>;
}

/// Placeholder for the missing half of a one-sided [`Operation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

/// Closure-backed API object.
///
/// ```rust
/// use release_zalgo::runtime::facade::Operation;
/// use release_zalgo::runtime::value::{Outcome, Resolution};
///
/// let add = Operation::sync_only(|(a, b): (i32, i32)| -> Outcome<i32, String> {
///     Ok(Resolution::Value(a + b))
/// });
/// let thenable = release_zalgo::sync().run(&add, (40, 2));
/// assert_eq!(thenable.value(), Some(&42));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Operation<S, A> {
    sync: S,
    asynchronous: A,
}

impl<S, A> Operation<S, A> {
    /// Pair a synchronous and an asynchronous implementation.
    pub fn new(
        sync: S,
        asynchronous: A,
    ) -> Self {
        Self { sync, asynchronous }
    }
}

impl<S> Operation<S, Unsupported> {
    /// Operation usable with the synchronous facade only.
    pub fn sync_only(sync: S) -> Self {
        Self {
            sync,
            asynchronous: Unsupported,
        }
    }
}

impl<A> Operation<Unsupported, A> {
    /// Operation usable with the asynchronous facade only.
    pub fn async_only(asynchronous: A) -> Self {
        Self {
            sync: Unsupported,
            asynchronous,
        }
    }
}

impl<S, A, Args, T, E> SyncApi<Args> for Operation<S, A>
where
    S: Fn(Args) -> Outcome<T, E>,
{
    type Value = T;
    type Error = E;

    fn sync(
        &self,
        args: Args,
    ) -> Outcome<T, E> {
        (self.sync)(args)
    }
}

impl<S, A, Args, Fut, T, E> AsyncApi<Args> for Operation<S, A>
where
    A: Fn(Args) -> Fut,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    type Value = T;
    type Error = E;

    fn asynchronous(
        &self,
        args: Args,
    ) -> Promise<T, E> {
        Promise::new((self.asynchronous)(args))
    }
}
