//! A future resolving to an [`Optional`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt};

use super::FutureOutcome;
use crate::Optional;

/// A future that resolves to an [`Optional<T>`].
///
/// # Example
///
/// ```rust
/// use placid::future::FutureOptional;
/// use placid::Optional;
///
/// # tokio_test::block_on(async {
/// let name = FutureOptional::new(async { Optional::of("ada") })
///     .chain(|name| Optional::of(name.len()))
///     .await;
/// assert_eq!(name, Optional::of(3));
/// # });
/// ```
pub struct FutureOptional<T> {
    inner: BoxFuture<'static, Optional<T>>,
}

impl<T: Send + 'static> FutureOptional<T> {
    /// Wrap a future resolving to an `Optional`.
    pub fn new<F>(fut: F) -> Self
    where
        F: Future<Output = Optional<T>> + Send + 'static,
    {
        FutureOptional { inner: fut.boxed() }
    }

    /// Build from an `Optional`, a boxed future, or another `FutureOptional`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::future::FutureOptional;
    /// use placid::Optional;
    ///
    /// # tokio_test::block_on(async {
    /// assert_eq!(FutureOptional::make(Optional::of(1)).await, Optional::of(1));
    /// assert!(FutureOptional::make(Optional::<i32>::empty()).await.is_absent());
    /// # });
    /// ```
    pub fn make<S>(source: S) -> Self
    where
        S: IntoFutureOptional<T>,
    {
        source.into_future_optional()
    }

    /// Transform the value once it resolves, if present.
    pub fn map<R, F>(self, f: F) -> FutureOptional<R>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: Send + 'static,
    {
        FutureOptional::new(self.inner.map(move |resolved| resolved.map(f)))
    }

    /// Continue with a step that yields an `Optional`, synchronously or not.
    ///
    /// `f` may return an `Optional<R>`, a `FutureOptional<R>` or a boxed future
    /// of `Optional<R>`; all of them are flattened into the result. `f` is not
    /// called when the value resolves absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::future::FutureOptional;
    /// use placid::Optional;
    ///
    /// # tokio_test::block_on(async {
    /// let found = FutureOptional::make(Optional::of(2))
    ///     .chain(|id| Box::pin(async move { Optional::of(id * 10) }))
    ///     .chain(|n| if n > 5 { Optional::of(n) } else { Optional::empty() })
    ///     .await;
    /// assert_eq!(found, Optional::of(20));
    /// # });
    /// ```
    pub fn chain<R, S, F>(self, f: F) -> FutureOptional<R>
    where
        F: FnOnce(T) -> S + Send + 'static,
        S: IntoFutureOptional<R>,
        R: Send + 'static,
    {
        FutureOptional::new(async move {
            match self.inner.await.into_option() {
                Some(value) => {
                    let next = f(value).into_future_optional();
                    next.await
                }
                None => Optional::empty(),
            }
        })
    }

    /// Resolve to the value, or `default` when absent.
    pub async fn or_else(self, default: T) -> T {
        self.await.or_else(default)
    }

    /// Resolve to the value, or run `f` when absent.
    pub async fn or_exec<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.or_exec(f)
    }

    /// Convert to a `FutureOutcome`, failing with `error` when absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use placid::future::FutureOptional;
    /// use placid::{Optional, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = FutureOptional::make(Optional::<i32>::empty()).or_fail("missing").await;
    /// assert_eq!(outcome, Outcome::fail("missing"));
    /// # });
    /// ```
    pub fn or_fail<E>(self, error: E) -> FutureOutcome<E, T>
    where
        E: Send + 'static,
    {
        FutureOutcome::new(self.inner.map(move |resolved| resolved.or_fail(error)))
    }

    /// Enter `span` whenever the underlying future is polled.
    #[cfg(feature = "tracing")]
    pub fn instrument(self, span: tracing::Span) -> Self {
        use tracing::Instrument as _;
        FutureOptional::new(self.inner.instrument(span))
    }
}

impl<T> Future for FutureOptional<T> {
    type Output = Optional<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for FutureOptional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureOptional").finish_non_exhaustive()
    }
}

/// Sources that can be turned into a [`FutureOptional`].
pub trait IntoFutureOptional<T> {
    /// Convert into a `FutureOptional`.
    fn into_future_optional(self) -> FutureOptional<T>;
}

impl<T: Send + 'static> IntoFutureOptional<T> for Optional<T> {
    fn into_future_optional(self) -> FutureOptional<T> {
        FutureOptional::new(future::ready(self))
    }
}

impl<T> IntoFutureOptional<T> for FutureOptional<T> {
    fn into_future_optional(self) -> FutureOptional<T> {
        self
    }
}

impl<T, F> IntoFutureOptional<T> for Pin<Box<F>>
where
    T: Send + 'static,
    F: Future<Output = Optional<T>> + Send + ?Sized + 'static,
{
    fn into_future_optional(self) -> FutureOptional<T> {
        FutureOptional::new(self)
    }
}
