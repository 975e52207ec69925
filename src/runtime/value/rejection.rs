//! Failure types of the synchronous runtime

use thiserror::Error;

use super::resolution::ErasedThenable;

/// Why a thenable could not be unwrapped synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnwrapErrorKind {
    /// Neither callback fired before `then` returned.
    #[error("thenable did not settle synchronously")]
    NotSynchronous,
    /// The thenable settled to a thenable already in its own chain.
    #[error("thenable settled to itself")]
    SelfResolution,
    /// The chain of nested thenables grew past the configured limit.
    #[error("thenable chain exceeded {limit} levels")]
    DepthExceeded {
        /// Limit in force when unwrapping gave up
        limit: usize,
    },
}

/// Raised when a thenable-shaped value cannot be settled within the call
/// that unwraps it.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {}", .thenable.type_name())]
pub struct UnwrapError {
    kind: UnwrapErrorKind,
    thenable: ErasedThenable,
}

impl UnwrapError {
    /// Distinguished name callers can match on.
    pub const NAME: &'static str = "UnwrapError";

    pub(crate) fn new(
        kind: UnwrapErrorKind,
        thenable: ErasedThenable,
    ) -> Self {
        Self { kind, thenable }
    }

    /// Always [`UnwrapError::NAME`].
    #[inline]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    pub fn kind(&self) -> UnwrapErrorKind {
        self.kind
    }

    /// The value that failed to settle.
    #[inline]
    pub fn thenable(&self) -> &ErasedThenable {
        &self.thenable
    }

    /// Whether the value simply did not settle during `then`.
    #[inline]
    pub fn is_not_synchronous(&self) -> bool {
        self.kind == UnwrapErrorKind::NotSynchronous
    }
}

/// Reason carried by a rejected thenable.
///
/// Computation failures travel as `Raised` without any wrapping of their
/// payload; `Unwrap` is produced only by synchronous unwrapping.
#[derive(Debug, Clone, Error)]
pub enum Rejection<E> {
    /// Failure raised by a computation or callback
    #[error("{0}")]
    Raised(E),
    /// Value could not be settled synchronously
    #[error(transparent)]
    Unwrap(UnwrapError),
}

impl<E> Rejection<E> {
    /// Get the raised payload, if any.
    pub fn as_raised(&self) -> Option<&E> {
        match self {
            Rejection::Raised(reason) => Some(reason),
            Rejection::Unwrap(_) => None,
        }
    }

    /// Get the unwrap failure, if any.
    pub fn as_unwrap(&self) -> Option<&UnwrapError> {
        match self {
            Rejection::Raised(_) => None,
            Rejection::Unwrap(error) => Some(error),
        }
    }

    /// Take the raised payload, if any.
    pub fn into_raised(self) -> Option<E> {
        match self {
            Rejection::Raised(reason) => Some(reason),
            Rejection::Unwrap(_) => None,
        }
    }

    #[inline]
    pub fn is_unwrap(&self) -> bool {
        matches!(self, Rejection::Unwrap(_))
    }
}

impl<E> From<E> for Rejection<E> {
    fn from(reason: E) -> Self {
        Rejection::Raised(reason)
    }
}
