//! release-zalgo
//!
//! Run the same logical operation either synchronously or asynchronously and
//! get back a uniform, chainable handle in both cases.
//!
//! - [`sync()`] hands out [`Thenable`]s: deferred values that settle while
//!   they are being constructed. Anything that would need a real executor is
//!   detected and rejected with an [`UnwrapError`] instead of being waited on.
//! - [`asynchronous()`] hands out [`Promise`]s backed by ordinary futures.
//!
//! Both handles can be awaited, so one test suite can exercise the
//! synchronous and the asynchronous implementation of an API.
//!
//! # Example
//!
//! ```rust
//! use release_zalgo::{sync, Operation, Outcome, Resolution};
//!
//! let answer = Operation::sync_only(|(): ()| -> Outcome<i32, String> { Ok(Resolution::Value(42)) });
//! let thenable = sync().run(&answer, ());
//!
//! assert_eq!(thenable.value(), Some(&42));
//! ```

#![doc(html_root_url = "https://docs.rs/release-zalgo")]
#![warn(rust_2018_idioms)]

pub mod runtime;
pub mod util;

// Re-exports
pub use runtime::facade::{asynchronous, sync, AsyncApi, AsyncFacade, Operation, Promise, SyncApi, SyncFacade};
pub use runtime::thenable::{Thenable, ThenableState};
pub use runtime::unwrap::{unwrap_sync, unwrap_sync_with, UnwrapLimits};
pub use runtime::value::{Fail, Outcome, Rejection, Resolution, Settle, Then, UnwrapError, UnwrapErrorKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
