//! The outcome of a computation: a value or an error, never both.
//!
//! `Outcome<E, T>` is the success/failure container of this crate. It is a
//! tagged union, so "exactly one of error and value" holds by construction.
//! The only way to ask for a failure without an error value is
//! [`Outcome::try_fail`], which refuses with a [`ContractViolation`].
//!
//! # Outcome vs `std::result::Result`
//!
//! The two carry the same information and convert into each other freely.
//! `Outcome` adds the container vocabulary shared with [`Optional`]:
//! `chain`, `if_fail`, `either`, and position-preserving [`Outcome::all`].
//!
//! # Examples
//!
//! ```rust
//! use placid::Outcome;
//!
//! let five: Outcome<String, i32> = Outcome::ok(5);
//! let text = five.map(|n| format!("five {}", n)).into_value().or_else("nothing".to_string());
//! assert_eq!(text, "five 5");
//!
//! let failed: Outcome<&str, i32> = Outcome::fail("boom");
//! assert_eq!(failed.either(|e| e.len() as i32, |v| v), 4);
//! ```

use crate::{ContractViolation, Optional};

/// A value of type `T`, or an error of type `E`.
///
/// # Example
///
/// ```rust
/// use placid::Outcome;
///
/// fn parse(raw: &str) -> Outcome<String, i32> {
///     raw.parse::<i32>().map_err(|_| format!("not a number: {}", raw)).into()
/// }
///
/// assert_eq!(parse("4").chain(|n| parse("6").map(move |m| n + m)), Outcome::ok(10));
/// assert!(parse("x").chain(|n| parse("6").map(move |m| n + m)).is_fail());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<E, T> {
    /// Successful outcome holding a value
    Ok(T),
    /// Failed outcome holding an error
    Fail(E),
}

impl<E, T> Outcome<E, T> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn fail(error: E) -> Self {
        Outcome::Fail(error)
    }

    /// Create a failed outcome from a nullable error.
    ///
    /// A failure must always carry its error, so `None` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::AbsentError`] when `error` is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::{ContractViolation, Outcome};
    ///
    /// let failed = Outcome::<&str, i32>::try_fail(Some("boom"));
    /// assert_eq!(failed, Ok(Outcome::fail("boom")));
    ///
    /// let invalid = Outcome::<&str, i32>::try_fail(None);
    /// assert_eq!(invalid, Err(ContractViolation::AbsentError));
    /// ```
    pub fn try_fail(error: Option<E>) -> Result<Self, ContractViolation> {
        match error {
            Some(error) => Ok(Outcome::Fail(error)),
            None => Err(ContractViolation::AbsentError.raise()),
        }
    }

    /// Create from a `std::result::Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Fail(error),
        }
    }

    /// Convert into a `std::result::Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Fail(error) => Err(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this outcome succeeded.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this outcome failed.
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    // ========== Extractors ==========

    /// The value, present only when ok.
    ///
    /// Being ok is decided by the absence of an error, so an ok outcome whose
    /// payload is itself nullable can still have no usable value; see
    /// [`Optional::flatten`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let nothing: Outcome<&str, Option<i32>> = Outcome::ok(None);
    /// assert!(nothing.is_ok());
    /// assert!(nothing.into_value().flatten().is_absent());
    /// ```
    #[inline]
    pub fn into_value(self) -> Optional<T> {
        match self {
            Outcome::Ok(value) => Optional::of(value),
            Outcome::Fail(_) => Optional::empty(),
        }
    }

    /// The error, present only when failed.
    #[inline]
    pub fn into_error(self) -> Optional<E> {
        match self {
            Outcome::Ok(_) => Optional::empty(),
            Outcome::Fail(error) => Optional::of(error),
        }
    }

    /// Borrow the value, present only when ok.
    #[inline]
    pub fn value(&self) -> Optional<&T> {
        match self {
            Outcome::Ok(value) => Optional::of(value),
            Outcome::Fail(_) => Optional::empty(),
        }
    }

    /// Borrow the error, present only when failed.
    #[inline]
    pub fn error(&self) -> Optional<&E> {
        match self {
            Outcome::Ok(_) => Optional::empty(),
            Outcome::Fail(error) => Optional::of(error),
        }
    }

    /// Convert to `Outcome<&E, &T>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Return the value, or `default` when failed.
    ///
    /// `default` is evaluated eagerly by the caller.
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => default,
        }
    }

    /// Return the value, or compute a fallback from the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let failed: Outcome<&str, usize> = Outcome::fail("four");
    /// assert_eq!(failed.or_exec(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn or_exec<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(error) => f(error),
        }
    }

    /// Return the value, or the contained error as `Err`.
    ///
    /// Use with `?` to leave container style at a call site that wants to
    /// return early on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// fn double(input: Outcome<String, i32>) -> Result<i32, String> {
    ///     Ok(input.or_error()? * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::ok(4)), Ok(8));
    /// assert_eq!(double(Outcome::fail("fail".to_string())), Err("fail".to_string()));
    /// ```
    #[inline]
    pub fn or_error(self) -> Result<T, E> {
        self.into_result()
    }

    /// Extract the value, panicking if failed.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => panic!("called `Outcome::unwrap()` on a `Fail` value"),
        }
    }

    // ========== Transformations ==========

    /// Transform the value if ok; a failure passes through untouched and `f`
    /// is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let ok: Outcome<&str, i32> = Outcome::ok(21);
    /// assert_eq!(ok.map(|n| n * 2), Outcome::ok(42));
    ///
    /// let failed: Outcome<&str, i32> = Outcome::fail("e");
    /// assert_eq!(failed.map(|n| n * 2), Outcome::fail("e"));
    /// ```
    #[inline]
    pub fn map<R, F>(self, f: F) -> Outcome<E, R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Alias of [`map`](Self::map).
    #[inline]
    pub fn if_ok<R, F>(self, f: F) -> Outcome<E, R>
    where
        F: FnOnce(T) -> R,
    {
        self.map(f)
    }

    /// Chain a computation that returns an `Outcome` with the same error type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let checked = |n: i32| if n > 0 { Outcome::ok(n) } else { Outcome::fail("not positive") };
    ///
    /// assert_eq!(Outcome::ok(5).chain(checked), Outcome::ok(5));
    /// assert_eq!(Outcome::ok(-5).chain(checked), Outcome::fail("not positive"));
    /// assert_eq!(Outcome::fail("earlier").chain(checked), Outcome::fail("earlier"));
    /// ```
    #[inline]
    pub fn chain<R, F>(self, f: F) -> Outcome<E, R>
    where
        F: FnOnce(T) -> Outcome<E, R>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Chain a computation with a wider error type.
    ///
    /// A failure of `self` is converted with `Into` before being propagated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let small: Outcome<u8, i32> = Outcome::fail(3);
    /// let widened: Outcome<u32, i32> = small.chain_into(|n| Outcome::ok(n + 1));
    /// assert_eq!(widened, Outcome::fail(3u32));
    /// ```
    #[inline]
    pub fn chain_into<E2, R, F>(self, f: F) -> Outcome<E2, R>
    where
        E: Into<E2>,
        F: FnOnce(T) -> Outcome<E2, R>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Fail(error) => Outcome::Fail(error.into()),
        }
    }

    /// Transform the error if failed; an ok outcome passes through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let failed: Outcome<&str, i32> = Outcome::fail("e");
    /// assert_eq!(failed.if_fail(|e| e.len()), Outcome::fail(1));
    /// ```
    #[inline]
    pub fn if_fail<E2, F>(self, f: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(error) => Outcome::Fail(f(error)),
        }
    }

    /// Transform the error with a function that may return nothing.
    ///
    /// Transforming an error is allowed, clearing it is not: a failure has to
    /// keep carrying an error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::AbsentReplacementError`] when `f` returns
    /// `None`. `f` is not called on an ok outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::{ContractViolation, Outcome};
    ///
    /// let failed: Outcome<&str, i32> = Outcome::fail("e");
    /// assert_eq!(failed.try_if_fail(|e| Some(e.len())), Ok(Outcome::fail(1)));
    ///
    /// let failed: Outcome<&str, i32> = Outcome::fail("e");
    /// assert_eq!(
    ///     failed.try_if_fail(|_| None::<usize>),
    ///     Err(ContractViolation::AbsentReplacementError)
    /// );
    /// ```
    pub fn try_if_fail<E2, F>(self, f: F) -> Result<Outcome<E2, T>, ContractViolation>
    where
        F: FnOnce(E) -> Option<E2>,
    {
        match self {
            Outcome::Ok(value) => Ok(Outcome::Ok(value)),
            Outcome::Fail(error) => match f(error) {
                Some(replacement) => Ok(Outcome::Fail(replacement)),
                None => Err(ContractViolation::AbsentReplacementError.raise()),
            },
        }
    }

    /// Fold both cases into one value; exactly one branch runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let ok: Outcome<&str, i32> = Outcome::ok(42);
    /// assert_eq!(ok.either(|e| e.to_string(), |v| v.to_string()), "42");
    /// ```
    #[inline]
    pub fn either<R, F, G>(self, on_error: F, on_value: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => on_value(value),
            Outcome::Fail(error) => on_error(error),
        }
    }

    // ========== Collection Utilities ==========

    /// Collect the values of the ok entries; failures are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::Outcome;
    ///
    /// let values = vec![Outcome::ok(1), Outcome::fail("e"), Outcome::ok(3)];
    /// assert_eq!(Outcome::cat(values), vec![1, 3]);
    /// ```
    pub fn cat<I>(values: I) -> Vec<T>
    where
        I: IntoIterator<Item = Outcome<E, T>>,
    {
        values
            .into_iter()
            .filter_map(|outcome| outcome.into_value().into_option())
            .collect()
    }

    /// Alias of [`cat`](Self::cat).
    pub fn filter<I>(values: I) -> Vec<T>
    where
        I: IntoIterator<Item = Outcome<E, T>>,
    {
        Self::cat(values)
    }

    /// Combine a `Vec` of outcomes.
    ///
    /// All ok: ok with every value, in order. Otherwise: failed with one slot
    /// per input, holding the error at failed positions and nothing at ok
    /// positions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::{Optional, Outcome};
    ///
    /// let all = Outcome::all_vec(vec![Outcome::<&str, i32>::ok(1), Outcome::ok(2)]);
    /// assert_eq!(all, Outcome::ok(vec![1, 2]));
    ///
    /// let all = Outcome::all_vec(vec![Outcome::ok(1), Outcome::fail("e1"), Outcome::ok(2)]);
    /// assert_eq!(
    ///     all,
    ///     Outcome::fail(vec![Optional::empty(), Optional::of("e1"), Optional::empty()])
    /// );
    /// ```
    pub fn all_vec(values: Vec<Outcome<E, T>>) -> Outcome<Vec<Optional<E>>, Vec<T>> {
        if values.iter().all(Outcome::is_ok) {
            Outcome::Ok(Self::cat(values))
        } else {
            Outcome::Fail(values.into_iter().map(Outcome::into_error).collect())
        }
    }
}

impl<E, T> Outcome<Vec<Optional<E>>, T> {
    /// Combine a tuple of outcomes sharing one error type.
    ///
    /// Delegates to [`AllOk`], implemented for tuples of up to 10 elements.
    /// The failure payload keeps one slot per tuple position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::{Optional, Outcome};
    ///
    /// let result: Outcome<Vec<Optional<&str>>, (i32, &str)> =
    ///     Outcome::all((Outcome::ok(1), Outcome::ok("a")));
    /// assert_eq!(result, Outcome::ok((1, "a")));
    ///
    /// let result: Outcome<Vec<Optional<&str>>, (i32, &str)> =
    ///     Outcome::all((Outcome::fail("bad number"), Outcome::ok("a")));
    /// assert_eq!(result, Outcome::fail(vec![Optional::of("bad number"), Optional::empty()]));
    /// ```
    pub fn all<V>(values: V) -> Self
    where
        V: AllOk<E, Output = T>,
    {
        values.all_ok()
    }
}

/// Trait for combining a tuple of outcomes with one error type.
pub trait AllOk<E> {
    /// The tuple of values when every element is ok
    type Output;

    /// Return all values, or every position's error when any element failed.
    fn all_ok(self) -> Outcome<Vec<Optional<E>>, Self::Output>;
}

macro_rules! impl_all_ok {
    ($($T:ident),+) => {
        impl<E, $($T),+> AllOk<E> for ($(Outcome<E, $T>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn all_ok(self) -> Outcome<Vec<Optional<E>>, Self::Output> {
                match self {
                    ($(Outcome::Ok($T),)+) => Outcome::Ok(($($T,)+)),
                    ($($T,)+) => Outcome::Fail(vec![$($T.into_error()),+]),
                }
            }
        }
    };
}

impl_all_ok!(T1);
impl_all_ok!(T1, T2);
impl_all_ok!(T1, T2, T3);
impl_all_ok!(T1, T2, T3, T4);
impl_all_ok!(T1, T2, T3, T4, T5);
impl_all_ok!(T1, T2, T3, T4, T5, T6);
impl_all_ok!(T1, T2, T3, T4, T5, T6, T7);
impl_all_ok!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_all_ok!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_all_ok!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);

// Flatten for nested Outcome
impl<E, T> Outcome<E, Outcome<E, T>> {
    /// Flatten a nested outcome.
    #[inline]
    pub fn flatten(self) -> Outcome<E, T> {
        self.chain(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        outcome.into_result()
    }
}

impl<E, T> IntoIterator for Outcome<E, T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}
