//! Property-based checks of the functor and monad laws across containers

use placid::{List, Optional, Outcome, IO};
use proptest::prelude::*;

fn optional() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn outcome() -> impl Strategy<Value = Outcome<String, i32>> {
    any::<Result<i32, String>>().prop_map(Outcome::from)
}

fn half(n: i32) -> Optional<i32> {
    if n % 2 == 0 {
        Optional::of(n / 2)
    } else {
        Optional::empty()
    }
}

fn checked_neg(n: i32) -> Outcome<String, i32> {
    n.checked_neg()
        .ok_or_else(|| format!("{} has no negation", n))
        .into()
}

proptest! {
    #[test]
    fn prop_optional_identity(o in optional()) {
        prop_assert_eq!(o.map(|x| x), o);
    }

    #[test]
    fn prop_optional_left_identity(v in any::<i32>()) {
        prop_assert_eq!(Optional::of(v).chain(half), half(v));
    }

    #[test]
    fn prop_optional_associativity(o in optional()) {
        let left = o.chain(half).chain(half);
        let right = o.chain(|x| half(x).chain(half));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_identity(r in outcome()) {
        prop_assert_eq!(r.clone().map(|x| x), r);
    }

    #[test]
    fn prop_outcome_left_identity(v in any::<i32>()) {
        prop_assert_eq!(Outcome::ok(v).chain(checked_neg), checked_neg(v));
    }

    #[test]
    fn prop_outcome_associativity(r in outcome()) {
        let left = r.clone().chain(checked_neg).chain(checked_neg);
        let right = r.chain(|x| checked_neg(x).chain(checked_neg));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_exactly_one(r in outcome()) {
        prop_assert_ne!(r.value().is_present(), r.error().is_present());
        prop_assert_eq!(r.is_ok(), r.value().is_present());
    }

    #[test]
    fn prop_list_composition(values in prop::collection::vec(any::<i16>(), 0..32)) {
        let f = |x: i16| i32::from(x) + 1;
        let g = |x: i32| x * 3;
        let list = List::from(values);
        prop_assert_eq!(list.clone().map(f).map(g), list.map(move |x| g(f(x))));
    }

    #[test]
    fn prop_list_associativity(values in prop::collection::vec(any::<u8>(), 0..16)) {
        let f = |x: u8| List::of([x, x / 2]);
        let g = |x: u8| if x % 2 == 0 { List::of([x]) } else { List::empty() };
        let list = List::from(values);
        prop_assert_eq!(list.clone().chain(f).chain(g), list.chain(move |x| f(x).chain(g)));
    }

    #[test]
    fn prop_io_left_identity(v in any::<i32>()) {
        let f = |n: i32| IO::new(move || n.wrapping_mul(7));
        prop_assert_eq!(IO::of(v).chain(f).exec(), f(v).exec());
    }

    #[test]
    fn prop_cat_keeps_present_in_order(values in prop::collection::vec(any::<Option<u8>>(), 0..32)) {
        let expected: Vec<u8> = values.iter().flatten().copied().collect();
        let optionals: Vec<Optional<u8>> = values.into_iter().map(Optional::from).collect();
        prop_assert_eq!(Optional::cat(optionals), expected);
    }
}
