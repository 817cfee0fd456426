//! Deferred, re-runnable computations
//!
//! An [`IO<T>`] describes a computation that produces a `T`. Building and
//! composing an `IO` runs nothing; only [`IO::exec`] does, and it may be called
//! any number of times.
//!
//! # Examples
//!
//! ```
//! use placid::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = runs.clone();
//! let io = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     counter.get()
//! })
//! .map(|n| n * 100);
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(io.exec(), 100);
//! assert_eq!(io.exec(), 200);
//! ```
//!
//! # Lazy and eager chaining
//!
//! [`IO::chain`] is a lazy bind: it builds a new `IO` and runs nothing.
//! [`IO::chain_exec`] runs this computation and the one `f` returns right away
//! and hands back the final value.

use std::fmt;
use std::rc::Rc;

/// A deferred computation producing a `T`.
///
/// Cloning an `IO` shares the underlying computation.
pub struct IO<T> {
    run: Rc<dyn Fn() -> T>,
}

impl<T: 'static> IO<T> {
    /// Wrap a computation. `f` does not run until [`exec`](Self::exec).
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        IO { run: Rc::new(f) }
    }

    /// A computation that always yields a clone of `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use placid::IO;
    ///
    /// let io = IO::of(vec![1, 2]);
    /// assert_eq!(io.exec(), vec![1, 2]);
    /// assert_eq!(io.exec(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        IO::new(move || value.clone())
    }

    /// Run the computation and return its value.
    #[inline]
    pub fn exec(&self) -> T {
        (self.run)()
    }

    /// Transform the eventual value. Nothing runs until `exec`.
    ///
    /// # Example
    ///
    /// ```
    /// use placid::IO;
    ///
    /// let io = IO::new(|| 4).map(|n| n + 1).map(|n| n.to_string());
    /// assert_eq!(io.exec(), "5");
    /// ```
    pub fn map<R, F>(self, f: F) -> IO<R>
    where
        F: Fn(T) -> R + 'static,
        R: 'static,
    {
        let run = self.run;
        IO::new(move || f(run()))
    }

    /// Sequence a computation that depends on this one's value.
    ///
    /// The result is a new `IO`; neither this computation nor the one `f`
    /// returns runs until it is executed.
    ///
    /// # Example
    ///
    /// ```
    /// use placid::IO;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let ran = Rc::new(Cell::new(false));
    /// let flag = ran.clone();
    /// let io = IO::new(move || {
    ///     flag.set(true);
    ///     2
    /// })
    /// .chain(|n| IO::new(move || n * 21));
    ///
    /// assert!(!ran.get());
    /// assert_eq!(io.exec(), 42);
    /// assert!(ran.get());
    /// ```
    pub fn chain<R, F>(self, f: F) -> IO<R>
    where
        F: Fn(T) -> IO<R> + 'static,
        R: 'static,
    {
        let run = self.run;
        IO::new(move || f(run()).exec())
    }

    /// Run this computation, feed its value to `f`, run the returned `IO` and
    /// return its value, all immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use placid::IO;
    ///
    /// let value = IO::of(2).chain_exec(|n| IO::of(n * 21));
    /// assert_eq!(value, 42);
    /// ```
    pub fn chain_exec<R, F>(&self, f: F) -> R
    where
        F: FnOnce(T) -> IO<R>,
        R: 'static,
    {
        f(self.exec()).exec()
    }
}

impl<T> Clone for IO<T> {
    fn clone(&self) -> Self {
        IO {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for IO<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IO")
            .field("run", &"<deferred>")
            .finish()
    }
}
