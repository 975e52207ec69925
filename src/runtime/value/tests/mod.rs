//! Value 模块单元测试
//!
//! 测试 Resolution、ErasedThenable、Rejection 与结算回调

use std::rc::Rc;

use crate::runtime::fixtures::{failure, symbol, Deferred, Failure, Scripted, Symbol};
use crate::runtime::unwrap::unwrap_sync;
use crate::runtime::value::then::Slot;
use crate::runtime::value::{ErasedThenable, Rejection, Resolution, ThenRef, UnwrapError, UnwrapErrorKind};

#[cfg(test)]
mod resolution_tests {
    use super::*;

    #[test]
    fn test_value_is_not_thenable() {
        let resolution: Resolution<i32, Failure> = 5.into();
        assert!(!resolution.has_callable_then());
        assert_eq!(resolution.as_value(), Some(&5));
        assert!(resolution.as_thenable().is_none());
    }

    #[test]
    fn test_thenable_has_callable_then() {
        let thenable = Scripted::<i32, Failure>::fulfilled(1);
        let resolution = Resolution::thenable(Rc::clone(&thenable));

        assert!(resolution.has_callable_then());
        assert!(resolution.as_value().is_none());
        assert!(resolution.as_thenable().unwrap().erase().is(&thenable));
    }

    #[test]
    fn test_clone_keeps_thenable_identity() {
        let resolution = Resolution::thenable(Scripted::<i32, Failure>::fulfilled(1));
        let copy = resolution.clone();

        let (a, b) = (resolution.as_thenable().unwrap(), copy.as_thenable().unwrap());
        assert!(a.ptr_eq(b));
    }

    #[test]
    fn test_distinct_thenables_differ() {
        let a = ThenRef::new(Scripted::<i32, Failure>::fulfilled(1));
        let b = ThenRef::new(Scripted::<i32, Failure>::fulfilled(1));
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn test_debug_names_variant() {
        let value: Resolution<i32, Failure> = Resolution::Value(3);
        assert_eq!(format!("{:?}", value), "Value(3)");

        let thenable = Resolution::thenable(Scripted::<i32, Failure>::fulfilled(3));
        let debug = format!("{:?}", thenable);
        assert!(debug.starts_with("Thenable(ThenRef("));
        assert!(debug.contains("Scripted"));
    }
}

#[cfg(test)]
mod erased_tests {
    use super::*;

    #[test]
    fn test_identity_and_downcast() {
        let pending = Deferred::<Symbol, Failure>::new();
        let erased = ErasedThenable::new(Rc::clone(&pending));

        assert!(erased.is(&pending));
        assert!(!erased.is(&Deferred::<Symbol, Failure>::new()));
        assert!(erased.downcast::<Deferred<Symbol, Failure>>().is_some());
        assert!(erased.downcast::<Scripted<Symbol, Failure>>().is_none());
        assert!(erased.type_name().contains("Deferred"));
    }

    #[test]
    fn test_address_matches_handle() {
        let pending = Deferred::<Symbol, Failure>::new();
        let erased = ErasedThenable::new(Rc::clone(&pending));
        assert_eq!(erased.address(), Rc::as_ptr(&pending) as *const ());
    }
}

#[cfg(test)]
mod rejection_tests {
    use super::*;

    fn unwrap_error() -> UnwrapError {
        match unwrap_sync(Resolution::thenable(Deferred::<Symbol, Failure>::new())) {
            Err(Rejection::Unwrap(error)) => error,
            other => panic!("expected UnwrapError, got {:?}", other),
        }
    }

    #[test]
    fn test_raised_accessors() {
        let reason = failure("raised");
        let rejection: Rejection<Failure> = reason.clone().into();

        assert!(!rejection.is_unwrap());
        assert!(rejection.as_unwrap().is_none());
        assert!(Rc::ptr_eq(rejection.as_raised().unwrap(), &reason));
        assert!(Rc::ptr_eq(&rejection.into_raised().unwrap(), &reason));
    }

    #[test]
    fn test_unwrap_accessors() {
        let rejection: Rejection<Failure> = Rejection::Unwrap(unwrap_error());

        assert!(rejection.is_unwrap());
        assert!(rejection.as_raised().is_none());
        assert_eq!(rejection.as_unwrap().map(UnwrapError::kind), Some(UnwrapErrorKind::NotSynchronous));
        assert!(rejection.into_raised().is_none());
    }

    #[test]
    fn test_display() {
        let raised: Rejection<String> = Rejection::Raised("disk on fire".to_string());
        assert_eq!(raised.to_string(), "disk on fire");

        let unwrap: Rejection<String> = Rejection::Unwrap(unwrap_error());
        let message = unwrap.to_string();
        assert!(message.starts_with("thenable did not settle synchronously: "));
        assert!(message.contains("Deferred"));
    }

    #[test]
    fn test_unwrap_error_name() {
        let error = unwrap_error();
        assert_eq!(error.name(), "UnwrapError");
        assert_eq!(UnwrapError::NAME, "UnwrapError");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            UnwrapErrorKind::DepthExceeded { limit: 3 }.to_string(),
            "thenable chain exceeded 3 levels"
        );
        assert_eq!(UnwrapErrorKind::SelfResolution.to_string(), "thenable settled to itself");
    }
}

#[cfg(test)]
mod slot_tests {
    use super::*;

    #[test]
    fn test_empty_slot_closes_to_nothing() {
        let slot = Slot::<Symbol, Failure>::new();
        let _callbacks = slot.callbacks();
        assert!(slot.close().is_none());
    }

    #[test]
    fn test_first_write_wins() {
        let slot = Slot::<Symbol, Failure>::new();
        let (settle, fail) = slot.callbacks();
        let expected = symbol("first");

        settle.fulfill(expected.clone());
        fail.raise(failure("second"));
        settle.clone().fulfill(symbol("third"));

        match slot.close() {
            Some(Ok(Resolution::Value(actual))) => assert!(Rc::ptr_eq(&actual, &expected)),
            other => panic!("expected first fulfilment, got {:?}", other),
        }
    }

    #[test]
    fn test_writes_after_close_are_dropped() {
        let slot = Slot::<Symbol, Failure>::new();
        let (settle, fail) = slot.callbacks();
        assert!(slot.close().is_none());

        settle.fulfill(symbol("late"));
        fail.raise(failure("late"));
        assert_eq!(format!("{:?}", settle), "Settle { open: Some(false) }");
        assert_eq!(format!("{:?}", fail), "Fail { open: Some(false) }");
    }
}
