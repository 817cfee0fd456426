//! A value that may or may not be present.
//!
//! `Optional<T>` wraps `Option<T>` with the vocabulary this crate uses across all
//! of its containers: `map` and `chain` skip the transformer when the value is
//! absent, the `or_*` family extracts a value, and `cat`/`all`/`fetch_filter`
//! work over whole collections of optionals.
//!
//! # Absent inputs
//!
//! A nullable input is an `Option<T>`. Both `Optional::of_nullable(None)` and
//! `Optional::from(None)` collapse into the single absent state, the same one
//! `Optional::empty()` produces.
//!
//! # Examples
//!
//! ```rust
//! use placid::Optional;
//!
//! let name = Optional::of("leon");
//! let greeting = name.map(|n| format!("hello {}", n));
//! assert_eq!(greeting.or_else("nobody".to_string()), "hello leon");
//!
//! let missing: Optional<&str> = Optional::from(None);
//! assert!(missing.is_absent());
//! assert_eq!(missing.or_else("nobody"), "nobody");
//! ```

use crate::Outcome;

/// A value that is either present or absent.
///
/// Values are immutable: every combinator consumes `self` and returns a new
/// `Optional`. The default value is absent.
///
/// # Example
///
/// ```rust
/// use placid::Optional;
///
/// let five = Optional::of(5);
/// assert!(five.is_present());
/// assert_eq!(five.chain(|n| Optional::of(n * 2)).or_else(0), 10);
///
/// let nothing: Optional<i32> = Optional::empty();
/// assert_eq!(nothing.chain(|n| Optional::of(n * 2)).or_else(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Create a present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// assert!(Optional::of(42).is_present());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self {
        Optional(Some(value))
    }

    /// Create an absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// assert!(Optional::<i32>::empty().is_absent());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Optional(None)
    }

    /// Create from a nullable value; `None` becomes absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// assert!(Optional::of_nullable(Some(1)).is_present());
    /// assert_eq!(Optional::<i32>::of_nullable(None), Optional::empty());
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        Optional(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    // ========== Extractors ==========

    /// Return the value, or `default` when absent.
    ///
    /// `default` is evaluated by the caller before this call, whether or not it
    /// ends up being used. Use [`or_exec`](Self::or_exec) when the fallback is
    /// expensive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// assert_eq!(Optional::of(5).or_else(0), 5);
    /// assert_eq!(Optional::empty().or_else(0), 0);
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Return the value, or compute a fallback when absent.
    ///
    /// `f` only runs when the value is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// let mut calls = 0;
    /// assert_eq!(Optional::of(5).or_exec(|| { calls += 1; 0 }), 5);
    /// assert_eq!(calls, 0);
    ///
    /// assert_eq!(Optional::empty().or_exec(|| 7), 7);
    /// ```
    #[inline]
    pub fn or_exec<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(f)
    }

    /// Return the value as a nullable `Option<T>`.
    #[inline]
    pub fn or_null(self) -> Option<T> {
        self.0
    }

    /// Convert into `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Turn into an [`Outcome`]: ok with the value, or failed with `error`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::of(5).or_fail("missing"), Outcome::ok(5));
    /// assert_eq!(Optional::<i32>::empty().or_fail("missing"), Outcome::fail("missing"));
    /// ```
    #[inline]
    pub fn or_fail<E>(self, error: E) -> Outcome<E, T> {
        match self.0 {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Fail(error),
        }
    }

    /// Return the value, or `Err(error)` when absent.
    ///
    /// This is the exit from container-style short-circuiting into `?`
    /// propagation, for call sites that want to bail out early.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// fn port(raw: Optional<u16>) -> Result<u16, String> {
    ///     let port = raw.or_error("port is required".to_string())?;
    ///     Ok(port + 1)
    /// }
    ///
    /// assert_eq!(port(Optional::of(8079)), Ok(8080));
    /// assert_eq!(port(Optional::empty()), Err("port is required".to_string()));
    /// ```
    #[inline]
    pub fn or_error<E>(self, error: E) -> Result<T, E> {
        self.0.ok_or(error)
    }

    /// Extract the value, panicking if absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[inline]
    pub fn unwrap(self) -> T {
        match self.0 {
            Some(value) => value,
            None => panic!("called `Optional::unwrap()` on an absent value"),
        }
    }

    /// Convert `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Iterate over the value, if present.
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.0.iter()
    }

    // ========== Transformations ==========

    /// Transform the value if present.
    ///
    /// The transformer's return value is always the new content; `f` is never
    /// called on an absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// assert_eq!(Optional::of(5).map(|n| format!("five {}", n)).or_else(String::new()), "five 5");
    /// assert_eq!(Optional::<i32>::empty().map(|n| n + 1), Optional::empty());
    /// ```
    #[inline]
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        Optional(self.0.map(f))
    }

    /// Transform the value with a function that may produce nothing.
    ///
    /// A `None` from `f` makes the result absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// let parsed = Optional::of("12").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Optional::of(12));
    ///
    /// let parsed = Optional::of("twelve").map_nullable(|s| s.parse::<i32>().ok());
    /// assert!(parsed.is_absent());
    /// ```
    #[inline]
    pub fn map_nullable<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        Optional(self.0.and_then(f))
    }

    /// Alias of [`map`](Self::map) that reads better at call sites which only
    /// care about the present case.
    #[inline]
    pub fn if_present<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        self.map(f)
    }

    /// Run a side effect on the value, if present, and keep the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let kept = Optional::of(5).inspect(|n| seen.push(*n));
    /// assert_eq!(kept, Optional::of(5));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            f(value);
        }
        self
    }

    /// Chain a computation that itself returns an `Optional`.
    ///
    /// The result of `f` is returned as-is; `f` is never called on an absent
    /// value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Optional::of(n / 2) } else { Optional::empty() };
    ///
    /// assert_eq!(Optional::of(8).chain(half), Optional::of(4));
    /// assert_eq!(Optional::of(7).chain(half), Optional::empty());
    /// ```
    #[inline]
    pub fn chain<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self.0 {
            Some(value) => f(value),
            None => Optional::empty(),
        }
    }

    // ========== Collection Utilities ==========

    /// Collect the values of the present entries, keeping their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// let values = vec![Optional::of(1), Optional::empty(), Optional::of(3)];
    /// assert_eq!(Optional::cat(values), vec![1, 3]);
    /// ```
    pub fn cat<I>(values: I) -> Vec<T>
    where
        I: IntoIterator<Item = Optional<T>>,
    {
        values.into_iter().filter_map(Optional::into_option).collect()
    }

    /// Alias of [`cat`](Self::cat).
    pub fn filter<I>(values: I) -> Vec<T>
    where
        I: IntoIterator<Item = Optional<T>>,
    {
        Self::cat(values)
    }

    /// Combine a `Vec` of optionals: all present or nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// assert_eq!(Optional::all_vec(vec![Optional::of(1), Optional::of(2)]), Optional::of(vec![1, 2]));
    /// assert!(Optional::all_vec(vec![Optional::of(1), Optional::empty()]).is_absent());
    /// ```
    pub fn all_vec(values: Vec<Optional<T>>) -> Optional<Vec<T>> {
        Optional(values.into_iter().map(Optional::into_option).collect())
    }

    /// Fetch something for every item, keeping the items whose fetch succeeded.
    ///
    /// Each kept item is paired with its fetched data, in the original order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    /// use placid::optional::Fetched;
    ///
    /// let ids = vec![1, 2, 3];
    /// let names = Optional::fetch_filter(ids, |id| match id {
    ///     1 => Optional::of("alice"),
    ///     3 => Optional::of("carol"),
    ///     _ => Optional::empty(),
    /// });
    ///
    /// assert_eq!(
    ///     names,
    ///     vec![
    ///         Fetched { data: "alice", src: 1 },
    ///         Fetched { data: "carol", src: 3 },
    ///     ]
    /// );
    /// ```
    pub fn fetch_filter<S, I, F>(items: I, mut fetch: F) -> Vec<Fetched<S, T>>
    where
        I: IntoIterator<Item = S>,
        F: FnMut(&S) -> Optional<T>,
    {
        items
            .into_iter()
            .filter_map(|src| fetch(&src).0.map(|data| Fetched { data, src }))
            .collect()
    }
}

impl<T> Optional<T> {
    /// Combine a tuple of optionals: all present or nothing.
    ///
    /// Delegates to [`AllPresent`], implemented for tuples of up to 10 elements
    /// with independent value types.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// let both = Optional::<(i32, &str)>::all((Optional::of(1), Optional::of("a")));
    /// assert_eq!(both, Optional::of((1, "a")));
    ///
    /// let one = Optional::<(i32, &str)>::all((Optional::of(1), Optional::empty()));
    /// assert!(one.is_absent());
    ///
    /// let other: Optional<(bool, u8)> = Optional::all((Optional::empty(), Optional::of(2)));
    /// assert!(other.is_absent());
    /// ```
    pub fn all<V>(values: V) -> Self
    where
        V: AllPresent<Output = T>,
    {
        values.all_present()
    }
}

// Flatten for a nullable payload
impl<T> Optional<Option<T>> {
    /// Collapse a present-but-null payload into absence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Optional;
    ///
    /// assert_eq!(Optional::of(Some(1)).flatten(), Optional::of(1));
    /// assert!(Optional::of(None::<i32>).flatten().is_absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        Optional(self.0.flatten())
    }
}

/// An item kept by [`Optional::fetch_filter`], with the data fetched for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fetched<S, D> {
    /// The fetched data
    pub data: D,
    /// The source item the data was fetched for
    pub src: S,
}

/// Trait for combining a tuple of optionals into an optional tuple.
pub trait AllPresent {
    /// The tuple of values when every element is present
    type Output;

    /// Return all values, or absent if any element is absent.
    fn all_present(self) -> Optional<Self::Output>;
}

macro_rules! impl_all_present {
    ($($T:ident),+) => {
        impl<$($T),+> AllPresent for ($(Optional<$T>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn all_present(self) -> Optional<Self::Output> {
                let ($($T,)+) = self;
                match ($($T.0,)+) {
                    ($(Some($T),)+) => Optional::of(($($T,)+)),
                    _ => Optional::empty(),
                }
            }
        }
    };
}

impl_all_present!(T1);
impl_all_present!(T1, T2);
impl_all_present!(T1, T2, T3);
impl_all_present!(T1, T2, T3, T4);
impl_all_present!(T1, T2, T3, T4, T5);
impl_all_present!(T1, T2, T3, T4, T5, T6);
impl_all_present!(T1, T2, T3, T4, T5, T6, T7);
impl_all_present!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_all_present!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_all_present!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);

// ========== Trait Implementations ==========

impl<T> Default for Optional<T> {
    /// Returns an absent value.
    fn default() -> Self {
        Optional::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Optional::of(5).is_present());
        assert!(Optional::<i32>::empty().is_absent());
        assert!(Optional::<i32>::default().is_absent());
    }

    #[test]
    fn test_nullable_inputs_normalize_to_empty() {
        assert_eq!(Optional::<i32>::of_nullable(None), Optional::empty());
        assert_eq!(Optional::<i32>::from(None), Optional::empty());
        assert_eq!(Optional::from(Some(3)), Optional::of(3));
    }

    #[test]
    fn test_or_else() {
        assert_eq!(Optional::of(5).or_else(0), 5);
        assert_eq!(Optional::empty().or_else(0), 0);
    }

    #[test]
    fn test_or_exec_is_lazy() {
        let mut calls = 0;
        assert_eq!(
            Optional::of(5).or_exec(|| {
                calls += 1;
                0
            }),
            5
        );
        assert_eq!(calls, 0);

        assert_eq!(
            Optional::empty().or_exec(|| {
                calls += 1;
                9
            }),
            9
        );
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_or_null() {
        assert_eq!(Optional::of(5).or_null(), Some(5));
        assert_eq!(Optional::<i32>::empty().or_null(), None);
    }

    #[test]
    fn test_or_fail() {
        assert_eq!(Optional::of(5).or_fail("none"), Outcome::ok(5));
        assert_eq!(Optional::<i32>::empty().or_fail("none"), Outcome::fail("none"));
    }

    #[test]
    fn test_or_error() {
        assert_eq!(Optional::of(5).or_error("aaa"), Ok(5));
        assert_eq!(Optional::<i32>::empty().or_error("aaa"), Err("aaa"));
    }

    #[test]
    #[should_panic(expected = "called `Optional::unwrap()` on an absent value")]
    fn test_unwrap_panics_on_empty() {
        Optional::<i32>::empty().unwrap();
    }

    #[test]
    fn test_map_and_chain() {
        let o = Optional::of(5);
        assert_eq!(o.map(|n| format!("five {}", n)).or_null(), Some("five 5".to_string()));
        assert_eq!(
            o.chain(|n| Optional::of(format!("five {}", n))).or_null(),
            Some("five 5".to_string())
        );
    }

    #[test]
    fn test_map_skips_transformer_when_empty() {
        let mut called = false;
        let result = Optional::<i32>::empty().map(|n| {
            called = true;
            n + 1
        });
        assert!(result.is_absent());
        assert!(!called);
    }

    #[test]
    fn test_map_result_is_authoritative() {
        // A unit-returning transformer produces a present unit, not the old value.
        let unit = Optional::of(5).map(|_| ());
        assert_eq!(unit, Optional::of(()));
    }

    #[test]
    fn test_map_nullable() {
        assert_eq!(Optional::of(5).map_nullable(|_| None::<i32>), Optional::empty());
        assert_eq!(Optional::of(5).map_nullable(|n| Some(n * 2)), Optional::of(10));
    }

    #[test]
    fn test_if_present_is_map() {
        assert_eq!(Optional::of(2).if_present(|n| n * 3), Optional::of(2).map(|n| n * 3));
    }

    #[test]
    fn test_inspect_keeps_value() {
        let mut seen = None;
        let kept = Optional::of(5).inspect(|n| seen = Some(*n));
        assert_eq!(kept, Optional::of(5));
        assert_eq!(seen, Some(5));

        let mut called = false;
        let kept = Optional::<i32>::empty().inspect(|_| called = true);
        assert!(kept.is_absent());
        assert!(!called);
    }

    #[test]
    fn test_chain_skips_when_empty() {
        let mut called = false;
        let result = Optional::<i32>::empty().chain(|n| {
            called = true;
            Optional::of(n)
        });
        assert!(result.is_absent());
        assert!(!called);
    }

    #[test]
    fn test_cat_preserves_order() {
        let values = vec![Optional::of(3), Optional::empty(), Optional::of(1), Optional::of(3)];
        assert_eq!(Optional::cat(values.clone()), vec![3, 1, 3]);
        assert_eq!(Optional::filter(values), vec![3, 1, 3]);
    }

    #[test]
    fn test_all_vec() {
        assert_eq!(
            Optional::all_vec(vec![Optional::of(1), Optional::of(2)]),
            Optional::of(vec![1, 2])
        );
        assert_eq!(
            Optional::all_vec(vec![Optional::of(1), Optional::empty()]),
            Optional::empty()
        );
        assert_eq!(Optional::<i32>::all_vec(vec![]), Optional::of(vec![]));
    }

    #[test]
    fn test_all_tuples() {
        let result = Optional::<(i32, &str, bool)>::all((
            Optional::of(1),
            Optional::of("a"),
            Optional::of(true),
        ));
        assert_eq!(result, Optional::of((1, "a", true)));

        let result = (Optional::of(1), Optional::<&str>::empty(), Optional::of(true)).all_present();
        assert!(result.is_absent());

        let single = (Optional::of(7),).all_present();
        assert_eq!(single, Optional::of((7,)));
    }

    #[test]
    fn test_all_infers_element_types_from_result() {
        let result = Optional::<(i32, &str)>::all((Optional::of(1), Optional::empty()));
        assert!(result.is_absent());

        let result: Optional<(&str, u8)> = Optional::all((Optional::of("a"), Optional::of(2)));
        assert_eq!(result, Optional::of(("a", 2)));
    }

    #[test]
    fn test_all_ten_tuple() {
        let values = (
            Optional::of(1),
            Optional::of(2),
            Optional::of(3),
            Optional::of(4),
            Optional::of(5),
            Optional::of(6),
            Optional::of(7),
            Optional::of(8),
            Optional::of(9),
            Optional::of(10),
        );
        assert_eq!(values.all_present(), Optional::of((1, 2, 3, 4, 5, 6, 7, 8, 9, 10)));
    }

    #[test]
    fn test_fetch_filter() {
        let items = vec!["a", "bb", "", "dddd"];
        let fetched = Optional::fetch_filter(items, |s| {
            if s.is_empty() {
                Optional::empty()
            } else {
                Optional::of(s.len())
            }
        });
        assert_eq!(
            fetched,
            vec![
                Fetched { data: 1, src: "a" },
                Fetched { data: 2, src: "bb" },
                Fetched { data: 4, src: "dddd" },
            ]
        );
    }

    #[test]
    fn test_flatten_nullable_payload() {
        assert_eq!(Optional::of(Some(1)).flatten(), Optional::of(1));
        assert_eq!(Optional::of(None::<i32>).flatten(), Optional::empty());
        assert_eq!(Optional::<Option<i32>>::empty().flatten(), Optional::empty());
    }

    #[test]
    fn test_iteration() {
        let o = Optional::of(4);
        assert_eq!(o.iter().collect::<Vec<_>>(), vec![&4]);
        assert_eq!((&o).into_iter().count(), 1);
        assert_eq!(o.into_iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(Optional::<i32>::empty().into_iter().count(), 0);
    }

    #[test]
    fn test_as_ref() {
        let o = Optional::of("x".to_string());
        assert_eq!(o.as_ref().map(|s| s.len()), Optional::of(1));
        assert!(o.is_present());
    }

    #[test]
    fn test_functor_identity() {
        assert_eq!(Optional::of(42).map(|v| v), Optional::of(42));
    }

    #[test]
    fn test_functor_composition() {
        let f = |v: i32| v + 1;
        let g = |v: i32| v * 2;
        assert_eq!(Optional::of(10).map(f).map(g), Optional::of(10).map(|v| g(f(v))));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_present_or_else_returns_value(v: i32, d: i32) {
            prop_assert_eq!(Optional::of(v).or_else(d), v);
            prop_assert!(Optional::of(v).is_present());
        }

        #[test]
        fn prop_empty_or_else_returns_default(d: i32) {
            prop_assert_eq!(Optional::<i32>::empty().or_else(d), d);
            prop_assert!(!Optional::<i32>::empty().is_present());
        }

        #[test]
        fn prop_map_then_chain_composes(v: Option<i32>) {
            let f = |x: i32| x.wrapping_mul(3);
            let g = |x: i32| if x % 2 == 0 { Optional::of(x) } else { Optional::empty() };

            let o = Optional::from(v);
            prop_assert_eq!(o.map(f).chain(g), o.chain(|x| g(f(x))));
        }

        #[test]
        fn prop_left_identity(v: i32) {
            let f = |x: i32| Optional::of(x.wrapping_add(1));
            prop_assert_eq!(Optional::of(v).chain(f), f(v));
        }

        #[test]
        fn prop_right_identity(v: Option<i32>) {
            let o = Optional::from(v);
            prop_assert_eq!(o.chain(Optional::of), o);
        }

        #[test]
        fn prop_all_vec_matches_option_collect(values: Vec<Option<u8>>) {
            let expected: Option<Vec<u8>> = values.iter().copied().collect();
            let optionals: Vec<_> = values.into_iter().map(Optional::from).collect();
            prop_assert_eq!(Optional::all_vec(optionals).into_option(), expected);
        }

        #[test]
        fn prop_cat_keeps_present_in_order(values: Vec<Option<u8>>) {
            let expected: Vec<u8> = values.iter().flatten().copied().collect();
            let optionals: Vec<_> = values.into_iter().map(Optional::from).collect();
            prop_assert_eq!(Optional::cat(optionals), expected);
        }
    }
}
