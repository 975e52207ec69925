//! Core value types for the synchronous runtime
//!
//! This module provides what computations produce (`Resolution`), how a
//! thenable-shaped value reports its outcome (`Then`, `Settle`, `Fail`) and
//! how failures are carried (`Rejection`, `UnwrapError`).

pub mod rejection;
pub mod resolution;
pub mod then;

pub use rejection::{Rejection, UnwrapError, UnwrapErrorKind};
pub use resolution::{ErasedThenable, Resolution, ThenRef};
pub use then::{Fail, Settle, Then};

/// Value-or-failure produced by running a computation.
pub type Outcome<T, E> = Result<Resolution<T, E>, Rejection<E>>;

#[cfg(test)]
mod tests;
