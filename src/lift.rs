//! Applying plain N-ary functions to values inside containers
//!
//! [`lift2`], [`lift3`] and [`lift4`] take an ordinary closure over plain
//! values and run it over container arguments of one kind: all
//! [`Optional`](crate::Optional)s, all [`Outcome`](crate::Outcome)s with the same
//! error type, all [`List`](crate::List)s or all [`IO`](crate::IO)s.
//!
//! The result follows the container's own sequencing:
//!
//! - `Optional`: present only when every argument is present
//! - `Outcome`: the first failure from the left wins
//! - `List`: the cartesian product, first argument varying slowest
//! - `IO`: a new deferred computation running the arguments in order
//!
//! Containers opt in through [`Mappable`] and [`Chainable`].
//!
//! # Examples
//!
//! ```rust
//! use placid::lift::lift2;
//! use placid::{List, Optional};
//!
//! let sum = lift2(|a: i32, b: i32| a + b, Optional::of(1), Optional::of(2));
//! assert_eq!(sum, Optional::of(3));
//!
//! let missing = lift2(|a: i32, b: i32| a + b, Optional::of(1), Optional::empty());
//! assert!(missing.is_absent());
//!
//! let pairs = lift2(|a: i32, b: char| (a, b), List::of([1, 2]), List::of(['x', 'y']));
//! assert_eq!(pairs, List::of([(1, 'x'), (1, 'y'), (2, 'x'), (2, 'y')]));
//! ```
//!
//! Values flowing through a lift must be `'static`, and the values of every
//! argument except the last must be `Clone`.

use crate::{List, Optional, Outcome, IO};

/// A container whose values can be transformed.
pub trait Mappable {
    /// The type of the contained values.
    type Inner;

    /// The same container holding `B` instead.
    type With<B>;

    /// Transform every contained value.
    fn fmap<B, F>(self, f: F) -> Self::With<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;
}

/// A container that can sequence a dependent step.
pub trait Chainable: Mappable {
    /// Feed each contained value to `f` and flatten the results.
    fn bind<B, F>(self, f: F) -> Self::With<B>
    where
        F: Fn(Self::Inner) -> Self::With<B> + 'static,
        B: 'static;
}

// ========== Container Implementations ==========

impl<T> Mappable for Optional<T> {
    type Inner = T;
    type With<B> = Optional<B>;

    #[inline]
    fn fmap<B, F>(self, f: F) -> Optional<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.map(f)
    }
}

impl<T> Chainable for Optional<T> {
    #[inline]
    fn bind<B, F>(self, f: F) -> Optional<B>
    where
        F: Fn(T) -> Optional<B> + 'static,
        B: 'static,
    {
        self.chain(f)
    }
}

impl<E, T> Mappable for Outcome<E, T> {
    type Inner = T;
    type With<B> = Outcome<E, B>;

    #[inline]
    fn fmap<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.map(f)
    }
}

impl<E, T> Chainable for Outcome<E, T> {
    #[inline]
    fn bind<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: Fn(T) -> Outcome<E, B> + 'static,
        B: 'static,
    {
        self.chain(f)
    }
}

impl<T> Mappable for List<T> {
    type Inner = T;
    type With<B> = List<B>;

    fn fmap<B, F>(self, f: F) -> List<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.map(f)
    }
}

impl<T> Chainable for List<T> {
    fn bind<B, F>(self, f: F) -> List<B>
    where
        F: Fn(T) -> List<B> + 'static,
        B: 'static,
    {
        self.chain(f)
    }
}

impl<T: 'static> Mappable for IO<T> {
    type Inner = T;
    type With<B> = IO<B>;

    fn fmap<B, F>(self, f: F) -> IO<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.map(f)
    }
}

impl<T: 'static> Chainable for IO<T> {
    fn bind<B, F>(self, f: F) -> IO<B>
    where
        F: Fn(T) -> IO<B> + 'static,
        B: 'static,
    {
        self.chain(f)
    }
}

// ========== Lifts ==========

/// Apply a two-argument function to two containers of the same kind.
///
/// # Example
///
/// ```rust
/// use placid::lift::lift2;
/// use placid::Outcome;
///
/// let first: Outcome<&str, i32> = Outcome::fail("first");
/// let second: Outcome<&str, i32> = Outcome::fail("second");
/// assert_eq!(lift2(|a: i32, b: i32| a * b, first, second), Outcome::fail("first"));
/// ```
pub fn lift2<A, B, C, Fa, Fb, F>(f: F, a: Fa, b: Fb) -> Fa::With<C>
where
    Fa: Chainable<Inner = A>,
    Fb: Mappable<Inner = B, With<C> = Fa::With<C>> + Clone + 'static,
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    C: 'static,
{
    a.bind::<C, _>(move |x: A| {
        let f = f.clone();
        b.clone().fmap(move |y: B| f(x.clone(), y))
    })
}

/// Apply a three-argument function to three containers of the same kind.
///
/// # Example
///
/// ```rust
/// use placid::lift::lift3;
/// use placid::Optional;
///
/// let full = lift3(
///     |first: &str, middle: &str, last: &str| format!("{} {} {}", first, middle, last),
///     Optional::of("Ada"),
///     Optional::of("King"),
///     Optional::of("Lovelace"),
/// );
/// assert_eq!(full, Optional::of("Ada King Lovelace".to_string()));
/// ```
pub fn lift3<A, B, C, D, Fa, Fb, Fc, F>(f: F, a: Fa, b: Fb, c: Fc) -> Fa::With<D>
where
    Fa: Chainable<Inner = A>,
    Fb: Chainable<Inner = B, With<D> = Fa::With<D>> + Clone + 'static,
    Fc: Mappable<Inner = C, With<D> = Fa::With<D>> + Clone + 'static,
    F: Fn(A, B, C) -> D + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    D: 'static,
{
    a.bind::<D, _>(move |x: A| {
        let f = f.clone();
        let c = c.clone();
        b.clone().bind::<D, _>(move |y: B| {
            let f = f.clone();
            let x = x.clone();
            c.clone().fmap(move |z: C| f(x.clone(), y.clone(), z))
        })
    })
}

/// Apply a four-argument function to four containers of the same kind.
///
/// # Example
///
/// ```rust
/// use placid::lift::lift4;
/// use placid::List;
///
/// let sums = lift4(
///     |a: i32, b: i32, c: i32, d: i32| a + b + c + d,
///     List::of([0, 1000]),
///     List::of([0, 100]),
///     List::of([10]),
///     List::of([1, 2]),
/// );
/// assert_eq!(sums.len(), 8);
/// assert_eq!(sums.first(), Some(&11));
/// assert_eq!(sums.last(), Some(&1112));
/// ```
pub fn lift4<A, B, C, D, R, Fa, Fb, Fc, Fd, F>(f: F, a: Fa, b: Fb, c: Fc, d: Fd) -> Fa::With<R>
where
    Fa: Chainable<Inner = A>,
    Fb: Chainable<Inner = B, With<R> = Fa::With<R>> + Clone + 'static,
    Fc: Chainable<Inner = C, With<R> = Fa::With<R>> + Clone + 'static,
    Fd: Mappable<Inner = D, With<R> = Fa::With<R>> + Clone + 'static,
    F: Fn(A, B, C, D) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    R: 'static,
{
    a.bind::<R, _>(move |w: A| {
        let f = f.clone();
        let c = c.clone();
        let d = d.clone();
        b.clone().bind::<R, _>(move |x: B| {
            let f = f.clone();
            let d = d.clone();
            let w = w.clone();
            c.clone().bind::<R, _>(move |y: C| {
                let f = f.clone();
                let w = w.clone();
                let x = x.clone();
                d.clone().fmap(move |z: D| f(w.clone(), x.clone(), y.clone(), z))
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_lift2_optional() {
        let add = |a: i32, b: i32| a + b;
        assert_eq!(lift2(add, Optional::of(1), Optional::of(2)), Optional::of(3));
        assert!(lift2(add, Optional::empty(), Optional::of(2)).is_absent());
        assert!(lift2(add, Optional::of(1), Optional::empty()).is_absent());
    }

    #[test]
    fn test_lift2_mixed_value_types() {
        let repeated = lift2(
            |s: &str, n: usize| s.repeat(n),
            Optional::of("ab"),
            Optional::of(3),
        );
        assert_eq!(repeated, Optional::of("ababab".to_string()));
    }

    #[test]
    fn test_lift2_outcome_leftmost_error() {
        let ok: Outcome<&str, i32> = Outcome::ok(2);
        let first: Outcome<&str, i32> = Outcome::fail("first");
        let second: Outcome<&str, i32> = Outcome::fail("second");
        let mul = |a: i32, b: i32| a * b;

        assert_eq!(lift2(mul, ok, ok), Outcome::ok(4));
        assert_eq!(lift2(mul, first, second), Outcome::fail("first"));
        assert_eq!(lift2(mul, ok, second), Outcome::fail("second"));
    }

    #[test]
    fn test_lift2_list_product_order() {
        let pairs = lift2(
            |a: i32, b: &str| format!("{}{}", a, b),
            List::of([1, 2, 3]),
            List::of(["a", "b"]),
        );
        assert_eq!(
            pairs.into_vec(),
            vec!["1a", "1b", "2a", "2b", "3a", "3b"]
        );
    }

    #[test]
    fn test_lift2_list_empty_argument() {
        let empty: List<i32> = List::empty();
        assert!(lift2(|a: i32, b: i32| a + b, List::of([1, 2]), empty).is_empty());
    }

    #[test]
    fn test_lift2_io_is_deferred_and_ordered() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let left_log = Rc::clone(&log);
        let right_log = Rc::clone(&log);
        let left = IO::new(move || {
            left_log.borrow_mut().push("left");
            20
        });
        let right = IO::new(move || {
            right_log.borrow_mut().push("right");
            22
        });

        let sum = lift2(|a: i32, b: i32| a + b, left, right);
        assert!(log.borrow().is_empty());
        assert_eq!(sum.exec(), 42);
        assert_eq!(*log.borrow(), vec!["left", "right"]);
    }

    #[test]
    fn test_lift3_optional_and_outcome() {
        let sum3 = |a: i32, b: i32, c: i32| a + b + c;
        assert_eq!(
            lift3(sum3, Optional::of(1), Optional::of(2), Optional::of(3)),
            Optional::of(6)
        );
        assert!(lift3(sum3, Optional::of(1), Optional::empty(), Optional::of(3)).is_absent());

        let result = lift3(
            sum3,
            Outcome::<&str, i32>::ok(1),
            Outcome::ok(2),
            Outcome::fail("third"),
        );
        assert_eq!(result, Outcome::fail("third"));
    }

    #[test]
    fn test_lift3_list() {
        let triples = lift3(
            |a: u8, b: u8, c: u8| (a, b, c),
            List::of([0, 1]),
            List::of([0, 1]),
            List::of([0, 1]),
        );
        assert_eq!(triples.len(), 8);
        assert_eq!(triples[1], (0, 0, 1));
        assert_eq!(triples[4], (1, 0, 0));
    }

    #[test]
    fn test_lift4() {
        let join = |a: i32, b: i32, c: i32, d: i32| a * 1000 + b * 100 + c * 10 + d;
        assert_eq!(
            lift4(join, Optional::of(1), Optional::of(2), Optional::of(3), Optional::of(4)),
            Optional::of(1234)
        );
        assert!(lift4(
            join,
            Optional::of(1),
            Optional::of(2),
            Optional::of(3),
            Optional::empty()
        )
        .is_absent());
        assert_eq!(
            lift4(join, IO::of(4), IO::of(3), IO::of(2), IO::of(1)).exec(),
            4321
        );
    }

    #[test]
    fn test_fmap_and_bind_delegate() {
        assert_eq!(Optional::of(2).fmap(|n| n + 1), Optional::of(3));
        assert_eq!(
            List::of([1, 2]).bind(|n| List::of([n, n])),
            List::of([1, 1, 2, 2])
        );
        assert_eq!(
            Outcome::<&str, i32>::ok(2).bind(|n| Outcome::ok(n * 2)),
            Outcome::ok(4)
        );
    }
}
