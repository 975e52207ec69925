//! Resolution values for the synchronous runtime
//!
//! A `Resolution` is whatever a computation hands back: either a terminal
//! value, or something that still has to be asked for its outcome through
//! its `then` capability.

use std::any::{self, Any};
use std::fmt;
use std::rc::Rc;

use super::then::Then;

/// Type-erased reference to a thenable-shaped value.
///
/// Kept by `UnwrapError` so callers can find out which value refused to
/// settle, without the error having to carry the value's generic parameters.
#[derive(Clone)]
pub struct ErasedThenable {
    handle: Rc<dyn Any>,
    type_name: &'static str,
}

impl ErasedThenable {
    /// Erase a concrete thenable handle.
    pub fn new<P: Any>(thenable: Rc<P>) -> Self {
        Self {
            handle: thenable,
            type_name: any::type_name::<P>(),
        }
    }

    /// Name of the concrete type behind the reference.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Address of the referenced allocation, used for identity checks.
    #[inline]
    pub fn address(&self) -> *const () {
        Rc::as_ptr(&self.handle) as *const ()
    }

    /// Whether this refers to the same allocation as `candidate`.
    pub fn is<P: ?Sized>(
        &self,
        candidate: &Rc<P>,
    ) -> bool {
        std::ptr::eq(self.address(), Rc::as_ptr(candidate) as *const ())
    }

    /// Recover the concrete handle if it has type `P`.
    pub fn downcast<P: Any>(&self) -> Option<Rc<P>> {
        Rc::clone(&self.handle).downcast::<P>().ok()
    }
}

impl fmt::Debug for ErasedThenable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}@{:p}", self.type_name, self.address())
    }
}

/// Shared handle to a value with a callable `then`.
pub struct ThenRef<T, E> {
    then: Rc<dyn Then<T, E>>,
    erased: ErasedThenable,
}

impl<T, E> ThenRef<T, E> {
    /// Wrap a concrete thenable.
    pub fn new<P>(thenable: Rc<P>) -> Self
    where
        P: Then<T, E> + 'static,
    {
        let erased = ErasedThenable::new(Rc::clone(&thenable));
        Self {
            then: thenable,
            erased,
        }
    }

    /// The `then` capability, with the thenable itself as receiver.
    #[inline]
    pub fn as_then(&self) -> &dyn Then<T, E> {
        self.then.as_ref()
    }

    /// Identity of the referenced value.
    #[inline]
    pub fn erase(&self) -> ErasedThenable {
        self.erased.clone()
    }

    /// Whether both handles point at the same value.
    #[inline]
    pub fn ptr_eq(
        &self,
        other: &Self,
    ) -> bool {
        std::ptr::eq(self.erased.address(), other.erased.address())
    }
}

impl<T, E> Clone for ThenRef<T, E> {
    fn clone(&self) -> Self {
        Self {
            then: Rc::clone(&self.then),
            erased: self.erased.clone(),
        }
    }
}

impl<T, E> fmt::Debug for ThenRef<T, E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_tuple("ThenRef").field(&self.erased).finish()
    }
}

/// Outcome of a computation before flattening.
///
/// `Value` is terminal. `Thenable` still has to be unwrapped, which may in
/// turn produce another `Resolution`.
pub enum Resolution<T, E> {
    /// Terminal value, returned as-is by unwrapping
    Value(T),
    /// Thenable-shaped value
    Thenable(ThenRef<T, E>),
}

impl<T, E> Resolution<T, E> {
    /// Wrap a concrete thenable.
    pub fn thenable<P>(thenable: Rc<P>) -> Self
    where
        P: Then<T, E> + 'static,
    {
        Resolution::Thenable(ThenRef::new(thenable))
    }

    /// Capability check: does this value expose a callable `then`?
    #[inline]
    pub fn has_callable_then(&self) -> bool {
        matches!(self, Resolution::Thenable(_))
    }

    /// Get the terminal value, if this is one.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Resolution::Value(value) => Some(value),
            Resolution::Thenable(_) => None,
        }
    }

    /// Get the thenable handle, if this is one.
    pub fn as_thenable(&self) -> Option<&ThenRef<T, E>> {
        match self {
            Resolution::Value(_) => None,
            Resolution::Thenable(thenable) => Some(thenable),
        }
    }
}

impl<T, E> From<T> for Resolution<T, E> {
    fn from(value: T) -> Self {
        Resolution::Value(value)
    }
}

impl<T: Clone, E> Clone for Resolution<T, E> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Value(value) => Resolution::Value(value.clone()),
            Resolution::Thenable(thenable) => Resolution::Thenable(thenable.clone()),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Resolution<T, E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Resolution::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Resolution::Thenable(thenable) => f.debug_tuple("Thenable").field(thenable).finish(),
        }
    }
}
