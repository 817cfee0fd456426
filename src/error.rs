//! Contract violations raised by the checked constructors
//!
//! Absence and failure are ordinary states of [`Optional`](crate::Optional) and
//! [`Outcome`](crate::Outcome), never errors. The only errors this crate produces
//! are programmer errors: asking for a failed `Outcome` without an error value,
//! or an error transform that tries to clear the error.
//!
//! # Examples
//!
//! ```
//! use placid::{ContractViolation, Outcome};
//!
//! let err = Outcome::<&str, i32>::try_fail(None).unwrap_err();
//! assert_eq!(err, ContractViolation::AbsentError);
//! assert_eq!(
//!     err.to_string(),
//!     "error value in Outcome::fail(error) could not be absent"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A broken usage contract, reported at the call site that broke it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// A failed `Outcome` was requested with no error value.
    AbsentError,
    /// An error transform returned no replacement error.
    AbsentReplacementError,
}

impl ContractViolation {
    /// Log the violation (with the `tracing` feature) and hand it back.
    pub(crate) fn raise(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(violation = ?self, "{}", self);
        self
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::AbsentError => {
                write!(f, "error value in Outcome::fail(error) could not be absent")
            }
            ContractViolation::AbsentReplacementError => write!(
                f,
                "function argument in Outcome::if_fail() could not return an absent error"
            ),
        }
    }
}

impl StdError for ContractViolation {}
