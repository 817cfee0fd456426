//! Testing utilities for code built on placid containers
//!
//! Assertion macros for [`Optional`](crate::Optional) and
//! [`Outcome`](crate::Outcome), plus `proptest` strategies when the `proptest`
//! feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use placid::{assert_absent, assert_fail, assert_ok, assert_present, Optional, Outcome};
//!
//! assert_present!(Optional::of(1));
//! assert_absent!(Optional::<i32>::empty());
//!
//! assert_ok!(Outcome::<String, _>::ok(42));
//! assert_fail!(Outcome::<_, i32>::fail("error"));
//! ```

/// Assert that an optional holds a value.
///
/// # Example
///
/// ```rust
/// use placid::{assert_present, Optional};
///
/// assert_present!(Optional::of("here"));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($optional:expr) => {
        if $crate::Optional::is_absent(&$optional) {
            panic!("Expected a present value, got an absent Optional");
        }
    };
}

/// Assert that an optional is absent.
///
/// # Example
///
/// ```rust
/// use placid::{assert_absent, Optional};
///
/// assert_absent!(Optional::<u8>::empty());
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($optional:expr) => {
        if let ::std::option::Option::Some(v) = $crate::Optional::into_option($optional) {
            panic!("Expected an absent Optional, got present value: {:?}", v);
        }
    };
}

/// Assert that an outcome is ok.
///
/// # Example
///
/// ```rust
/// use placid::{assert_ok, Outcome};
///
/// assert_ok!(Outcome::<&str, _>::ok(1));
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) => {}
            $crate::Outcome::Fail(e) => {
                panic!("Expected Ok, got Fail: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome failed.
///
/// # Example
///
/// ```rust
/// use placid::{assert_fail, Outcome};
///
/// assert_fail!(Outcome::<_, i32>::fail("boom"));
/// ```
#[macro_export]
macro_rules! assert_fail {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Fail(_) => {}
            $crate::Outcome::Ok(v) => {
                panic!("Expected Fail, got Ok: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome failed with a specific error.
///
/// # Example
///
/// ```rust
/// use placid::{assert_fail_with, Outcome};
///
/// assert_fail_with!(Outcome::<_, i32>::fail("boom"), "boom");
/// ```
#[macro_export]
macro_rules! assert_fail_with {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Fail(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Outcome::Ok(v) => {
                panic!("Expected Fail with {:?}, got Ok: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{List, Optional, Outcome};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::weighted(0.75, any_with::<T>(args))
            .prop_map(Optional::of_nullable)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E, T> Arbitrary for Outcome<E, T>
where
    E: Arbitrary + 'static,
    T: Arbitrary + 'static,
{
    type Parameters = (E::Parameters, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, t_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::ok),
            any_with::<E>(e_params).prop_map(Outcome::fail),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for List<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(any_with::<T>(args), 0..32)
            .prop_map(List::from)
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Optional, Outcome};

    #[test]
    fn assert_present_macro() {
        assert_present!(Optional::of(42));
    }

    #[test]
    fn assert_absent_macro() {
        assert_absent!(Optional::<i32>::empty());
    }

    #[test]
    fn assert_ok_macro() {
        let outcome = Outcome::<String, _>::ok(42);
        assert_ok!(outcome);
    }

    #[test]
    fn assert_fail_macro() {
        let outcome = Outcome::<_, i32>::fail("error".to_string());
        assert_fail!(outcome);
    }

    #[test]
    fn assert_fail_with_macro() {
        assert_fail_with!(Outcome::<_, i32>::fail("error"), "error");
    }

    #[test]
    #[should_panic(expected = "Expected a present value")]
    fn assert_present_panics_on_absent() {
        assert_present!(Optional::<i32>::empty());
    }

    #[test]
    #[should_panic(expected = "Expected an absent Optional, got present value: 7")]
    fn assert_absent_panics_on_present() {
        assert_absent!(Optional::of(7));
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Fail")]
    fn assert_ok_panics_on_fail() {
        assert_ok!(Outcome::<_, i32>::fail("error"));
    }

    #[test]
    #[should_panic(expected = "Expected Fail, got Ok")]
    fn assert_fail_panics_on_ok() {
        assert_fail!(Outcome::<&str, _>::ok(1));
    }

    #[test]
    #[should_panic(expected = "Expected Fail with")]
    fn assert_fail_with_panics_on_ok() {
        assert_fail_with!(Outcome::<&str, _>::ok(1), "error");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{List, Optional, Outcome};
        use proptest::prelude::*;

        #[derive(Debug)]
        struct NotClone(u8);

        impl Arbitrary for NotClone {
            type Parameters = ();
            type Strategy = BoxedStrategy<Self>;

            fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
                any::<u8>().prop_map(NotClone).boxed()
            }
        }

        proptest! {
            #[test]
            fn optional_arbitrary_is_consistent(o in any::<Optional<i32>>()) {
                prop_assert_ne!(o.is_present(), o.is_absent());
            }

            #[test]
            fn optional_arbitrary_without_clone(o in any::<Optional<NotClone>>()) {
                prop_assert_eq!(o.is_present(), o.as_ref().into_option().is_some());
            }

            #[test]
            fn outcome_arbitrary_is_consistent(r in any::<Outcome<String, i32>>()) {
                match &r {
                    Outcome::Ok(_) => prop_assert!(r.is_ok()),
                    Outcome::Fail(_) => prop_assert!(r.is_fail()),
                }
            }

            #[test]
            fn list_arbitrary_is_bounded(list in any::<List<u8>>()) {
                prop_assert!(list.len() < 32);
            }
        }
    }
}
