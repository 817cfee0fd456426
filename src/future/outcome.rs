//! A future resolving to an [`Outcome`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt};

use super::FutureOptional;
use crate::Outcome;

/// A future that resolves to an [`Outcome<E, T>`].
///
/// Failures short-circuit: after a step resolves to a failure, later `map` and
/// `chain` steps are skipped and the error is carried to the end.
///
/// # Example
///
/// ```rust
/// use placid::future::FutureOutcome;
/// use placid::Outcome;
///
/// async fn load(id: u32) -> Outcome<String, u32> {
///     if id == 0 { Outcome::fail("no such id".to_string()) } else { Outcome::ok(id * 2) }
/// }
///
/// # tokio_test::block_on(async {
/// let total = FutureOutcome::new(load(4))
///     .chain(|n| Box::pin(load(n)))
///     .map(|n| n + 1)
///     .or_else(0)
///     .await;
/// assert_eq!(total, 17);
/// # });
/// ```
pub struct FutureOutcome<E, T> {
    inner: BoxFuture<'static, Outcome<E, T>>,
}

impl<E, T> FutureOutcome<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    /// Wrap a future resolving to an `Outcome`.
    pub fn new<F>(fut: F) -> Self
    where
        F: Future<Output = Outcome<E, T>> + Send + 'static,
    {
        FutureOutcome { inner: fut.boxed() }
    }

    /// Build from an `Outcome`, a boxed future, or another `FutureOutcome`.
    pub fn make<S>(source: S) -> Self
    where
        S: IntoFutureOutcome<E, T>,
    {
        source.into_future_outcome()
    }

    /// Transform the value once it resolves, if ok.
    pub fn map<R, F>(self, f: F) -> FutureOutcome<E, R>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: Send + 'static,
    {
        FutureOutcome::new(self.inner.map(move |resolved| resolved.map(f)))
    }

    /// Continue with a step that yields an `Outcome`, synchronously or not.
    ///
    /// `f` may return an `Outcome<E, R>`, a `FutureOutcome<E, R>` or a boxed
    /// future of `Outcome<E, R>`. `f` is not called on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::future::FutureOutcome;
    /// use placid::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let checked = FutureOutcome::make(Outcome::<&str, i32>::ok(-3))
    ///     .chain(|n| if n < 0 { Outcome::fail("negative") } else { Outcome::ok(n) })
    ///     .chain(|n| Box::pin(async move { Outcome::<&str, i32>::ok(n * 2) }))
    ///     .await;
    /// assert_eq!(checked, Outcome::fail("negative"));
    /// # });
    /// ```
    pub fn chain<R, S, F>(self, f: F) -> FutureOutcome<E, R>
    where
        F: FnOnce(T) -> S + Send + 'static,
        S: IntoFutureOutcome<E, R>,
        R: Send + 'static,
    {
        FutureOutcome::new(async move {
            match self.inner.await {
                Outcome::Ok(value) => {
                    let next = f(value).into_future_outcome();
                    next.await
                }
                Outcome::Fail(error) => Outcome::Fail(error),
            }
        })
    }

    /// Transform the error once it resolves, if failed.
    pub fn if_fail<E2, F>(self, f: F) -> FutureOutcome<E2, T>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        FutureOutcome::new(self.inner.map(move |resolved| resolved.if_fail(f)))
    }

    /// Resolve and fold both cases into one value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::future::FutureOutcome;
    /// use placid::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let text = FutureOutcome::make(Outcome::<&str, i32>::fail("down"))
    ///     .either(|e| format!("error: {}", e), |v| format!("value: {}", v))
    ///     .await;
    /// assert_eq!(text, "error: down");
    /// # });
    /// ```
    pub async fn either<R, F, G>(self, on_error: F, on_value: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        self.await.either(on_error, on_value)
    }

    /// Resolve to the value, or `default` on failure.
    pub async fn or_else(self, default: T) -> T {
        self.await.or_else(default)
    }

    /// Resolve to the value, or compute one from the error.
    pub async fn or_exec<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.or_exec(f)
    }

    /// Keep only the value, dropping any error.
    pub fn into_value(self) -> FutureOptional<T> {
        FutureOptional::new(self.inner.map(Outcome::into_value))
    }

    /// Enter `span` whenever the underlying future is polled.
    #[cfg(feature = "tracing")]
    pub fn instrument(self, span: tracing::Span) -> Self {
        use tracing::Instrument as _;
        FutureOutcome::new(self.inner.instrument(span))
    }
}

impl<E, T> Future for FutureOutcome<E, T> {
    type Output = Outcome<E, T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl<E, T> fmt::Debug for FutureOutcome<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureOutcome").finish_non_exhaustive()
    }
}

/// Sources that can be turned into a [`FutureOutcome`].
pub trait IntoFutureOutcome<E, T> {
    /// Convert into a `FutureOutcome`.
    fn into_future_outcome(self) -> FutureOutcome<E, T>;
}

impl<E, T> IntoFutureOutcome<E, T> for Outcome<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    fn into_future_outcome(self) -> FutureOutcome<E, T> {
        FutureOutcome::new(future::ready(self))
    }
}

impl<E, T> IntoFutureOutcome<E, T> for FutureOutcome<E, T> {
    fn into_future_outcome(self) -> FutureOutcome<E, T> {
        self
    }
}

impl<E, T, F> IntoFutureOutcome<E, T> for Pin<Box<F>>
where
    E: Send + 'static,
    T: Send + 'static,
    F: Future<Output = Outcome<E, T>> + Send + ?Sized + 'static,
{
    fn into_future_outcome(self) -> FutureOutcome<E, T> {
        FutureOutcome::new(self)
    }
}
