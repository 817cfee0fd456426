//! Asynchronous counterparts of [`Optional`](crate::Optional) and
//! [`Outcome`](crate::Outcome)
//!
//! [`FutureOptional<T>`] and [`FutureOutcome<E, T>`] are futures that resolve to
//! a container. They carry the same `map`/`chain` vocabulary, so a pipeline can
//! mix synchronous and asynchronous steps and is awaited once at the end.
//!
//! Both wrappers box their inner future (`Send + 'static`) and implement
//! [`Future`](std::future::Future) directly. Composition happens on a single
//! task: nothing here spawns, cancels or times out.
//!
//! # Example
//!
//! ```rust
//! use placid::future::FutureOptional;
//! use placid::Optional;
//!
//! # tokio_test::block_on(async {
//! let doubled = FutureOptional::make(Box::pin(async { Optional::of(3) }))
//!     .map(|x| x * 2)
//!     .or_else(0)
//!     .await;
//! assert_eq!(doubled, 6);
//! # });
//! ```

mod optional;
mod outcome;

pub use futures::future::BoxFuture;
pub use optional::{FutureOptional, IntoFutureOptional};
pub use outcome::{FutureOutcome, IntoFutureOutcome};
