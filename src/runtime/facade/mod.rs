//! Dual-mode execution facades
//!
//! Both facades expose `run`, `all`, `returns` and `throws`. The synchronous
//! one hands out already-settled [`Thenable`](crate::runtime::thenable::Thenable)s,
//! the asynchronous one hands out [`Promise`]s. Both can be awaited, so a test
//! suite can drive either implementation of an API through the same code.

pub mod async_facade;
pub mod operation;
pub mod promise;
pub mod sync_facade;

pub use async_facade::AsyncFacade;
pub use operation::{AsyncApi, Operation, SyncApi, Unsupported};
pub use promise::Promise;
pub use sync_facade::SyncFacade;

/// Facade for synchronous executors.
#[inline]
pub fn sync() -> SyncFacade {
    SyncFacade
}

/// Facade for asynchronous executors.
#[inline]
pub fn asynchronous() -> AsyncFacade {
    AsyncFacade
}
