//! # Placid
//!
//! Small, immutable containers for values that might be missing, might have
//! failed, come in sequences, are deferred, or arrive later.
//!
//! - [`Optional<T>`]: a value or nothing
//! - [`Outcome<E, T>`]: a value or an error
//! - [`List<T>`]: an ordered sequence
//! - [`IO<T>`]: a deferred, re-runnable computation
//! - [`FutureOptional<T>`] and [`FutureOutcome<E, T>`]: futures resolving to the above
//!
//! All of them speak the same vocabulary: `map` transforms the value inside,
//! `chain` sequences a step that returns another container of the same kind,
//! and [`lift2`], [`lift3`] and [`lift4`] apply plain functions across several
//! containers at once.
//!
//! ## Quick Example
//!
//! ```rust
//! use placid::{lift2, Optional, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<String, u16> {
//!     raw.parse::<u16>().map_err(|_| format!("bad port: {}", raw)).into()
//! }
//!
//! let host = Optional::of("localhost".to_string());
//! let port = parse_port("8080").into_value();
//!
//! let addr = lift2(|h: String, p: u16| format!("{}:{}", h, p), host, port);
//! assert_eq!(addr.or_else("unset".to_string()), "localhost:8080");
//!
//! let broken = parse_port("eighty").or_exec(|error| {
//!     assert_eq!(error, "bad port: eighty");
//!     80
//! });
//! assert_eq!(broken, 80);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `Optional`, `Outcome` and `List`
//! - `tracing`: warnings on contract violations and `instrument` on the future wrappers
//! - `proptest`: `Arbitrary` implementations for property tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod future;
pub mod io;
pub mod lift;
pub mod list;
pub mod optional;
pub mod outcome;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use error::ContractViolation;
pub use future::{FutureOptional, FutureOutcome};
pub use io::IO;
pub use lift::{lift2, lift3, lift4, Chainable, Mappable};
pub use list::List;
pub use optional::Optional;
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ContractViolation;
    pub use crate::future::{FutureOptional, FutureOutcome, IntoFutureOptional, IntoFutureOutcome};
    pub use crate::io::IO;
    pub use crate::lift::{lift2, lift3, lift4, Chainable, Mappable};
    pub use crate::list;
    pub use crate::list::List;
    pub use crate::optional::{AllPresent, Optional};
    pub use crate::outcome::{AllOk, Outcome};
}
