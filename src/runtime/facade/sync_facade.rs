//! Synchronous facade: every operation returns an already-settled `Thenable`

use tracing::debug;

use super::operation::SyncApi;
use crate::runtime::thenable::Thenable;
use crate::runtime::unwrap::unwrap_sync;
use crate::runtime::value::{Rejection, Resolution};

/// Facade over synchronous executors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncFacade;

impl SyncFacade {
    /// Run the `sync` implementation of `api` with `args`.
    ///
    /// A promise returned by the implementation surfaces as a rejection
    /// carrying an `UnwrapError`.
    pub fn run<A, Args>(
        &self,
        api: &A,
        args: Args,
    ) -> Thenable<A::Value, A::Error>
    where
        A: SyncApi<Args> + ?Sized,
    {
        debug!(mode = "sync", "running operation");
        Thenable::new(|| api.sync(args))
    }

    /// Unwrap every input in order.
    ///
    /// The first failure rejects the result and stops the iteration; no
    /// partial results are exposed.
    pub fn all<T, E, I>(
        &self,
        inputs: I,
    ) -> Thenable<Vec<T>, E>
    where
        I: IntoIterator<Item = Resolution<T, E>>,
    {
        Thenable::new(|| {
            inputs
                .into_iter()
                .map(unwrap_sync)
                .collect::<Result<Vec<T>, Rejection<E>>>()
                .map(Resolution::Value)
        })
    }

    /// Thenable settled from `value`, flattened like any construction.
    pub fn returns<T, E>(
        &self,
        value: Resolution<T, E>,
    ) -> Thenable<T, E> {
        Thenable::new(|| Ok(value))
    }

    /// Thenable rejected with `reason`, which is never unwrapped.
    pub fn throws<T, E>(
        &self,
        reason: E,
    ) -> Thenable<T, E> {
        Thenable::new(|| Err(Rejection::Raised(reason)))
    }
}
