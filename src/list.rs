//! Ordered, immutable sequences with `map`/`filter`/`chain`
//!
//! `List<T>` wraps a `Vec<T>` and gives it the same container vocabulary as
//! [`Optional`](crate::Optional) and [`Outcome`](crate::Outcome). Every
//! operation consumes the list and returns a new one; order is always
//! preserved and duplicates are kept.
//!
//! # Examples
//!
//! ```
//! use placid::{list, List};
//!
//! let words = list!["a b", "c"];
//! let split: List<&str> = words.chain(|s| s.split(' '));
//! assert_eq!(split, list!["a", "b", "c"]);
//!
//! let evens = List::make(1..=6).filter(|n| n % 2 == 0).map(|n| n * 10);
//! assert_eq!(evens.into_vec(), vec![20, 40, 60]);
//! ```

use std::ops::Deref;

/// An ordered sequence of values.
///
/// Read access goes through `Deref<Target = [T]>`, so slice methods such as
/// `len`, `first` and `iter` are available directly.
///
/// # Example
///
/// ```
/// use placid::List;
///
/// let list = List::of([3, 1, 2]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.first(), Some(&3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct List<T>(Vec<T>);

/// Build a [`List`] from its elements, like `vec!`.
///
/// # Example
///
/// ```
/// use placid::list;
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.len(), 3);
/// assert!(list![(); 0].is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::empty()
    };
    ($elem:expr; $n:expr) => {
        $crate::List::from(vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::List::from(vec![$($x),+])
    };
}

impl<T> List<T> {
    /// Create a list from a fixed number of elements.
    #[inline]
    pub fn of<const N: usize>(values: [T; N]) -> Self {
        List(Vec::from(values))
    }

    /// Create an empty list.
    #[inline]
    pub fn empty() -> Self {
        List(Vec::new())
    }

    /// Create a list from any iterable.
    ///
    /// # Example
    ///
    /// ```
    /// use placid::List;
    ///
    /// let list = List::make("abc".chars());
    /// assert_eq!(list, List::of(['a', 'b', 'c']));
    /// ```
    pub fn make<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }

    /// Transform every element, keeping order.
    pub fn map<R, F>(self, f: F) -> List<R>
    where
        F: FnMut(T) -> R,
    {
        List(self.0.into_iter().map(f).collect())
    }

    /// Keep the elements matching `predicate`, in their original order.
    ///
    /// # Example
    ///
    /// ```
    /// use placid::List;
    ///
    /// let list = List::of([5, 1, 4, 1]).filter(|n| *n < 5);
    /// assert_eq!(list, List::of([1, 4, 1]));
    /// ```
    pub fn filter<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        List(self.0.into_iter().filter(|x| predicate(x)).collect())
    }

    /// Map every element to a sequence and concatenate the results, one level
    /// deep.
    ///
    /// `f` may return a `List`, a `Vec`, an array, an `Optional` or any other
    /// `IntoIterator`.
    ///
    /// # Example
    ///
    /// ```
    /// use placid::List;
    ///
    /// let list = List::of([1, 2]).chain(|n| [n, n * 10]);
    /// assert_eq!(list, List::of([1, 10, 2, 20]));
    /// ```
    pub fn chain<R, I, F>(self, f: F) -> List<R>
    where
        F: FnMut(T) -> I,
        I: IntoIterator<Item = R>,
    {
        List(self.0.into_iter().flat_map(f).collect())
    }

    /// Convert into the underlying `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        List(values)
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.0
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
