//! Asynchronous facade over the host `Promise`

use futures_util::future::try_join_all;
use tracing::debug;

use super::operation::AsyncApi;
use super::promise::Promise;

/// Facade over asynchronous executors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncFacade;

impl AsyncFacade {
    /// Run the `asynchronous` implementation of `api` with `args`.
    pub fn run<A, Args>(
        &self,
        api: &A,
        args: Args,
    ) -> Promise<A::Value, A::Error>
    where
        A: AsyncApi<Args> + ?Sized,
    {
        debug!(mode = "async", "running operation");
        api.asynchronous(args)
    }

    /// Fan-in: fulfils with every value in input order, or rejects with the
    /// first rejection observed.
    pub fn all<T, E, I>(
        &self,
        inputs: I,
    ) -> Promise<Vec<T>, E>
    where
        I: IntoIterator<Item = Promise<T, E>>,
        T: Send + 'static,
        E: Send + 'static,
    {
        Promise::new(try_join_all(inputs))
    }

    pub fn returns<T, E>(
        &self,
        value: T,
    ) -> Promise<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        Promise::resolved(value)
    }

    pub fn throws<T, E>(
        &self,
        reason: E,
    ) -> Promise<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        Promise::rejected(reason)
    }
}
