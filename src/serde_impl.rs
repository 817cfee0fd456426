//! Serde support for containers (feature-gated)
//!
//! - [`Optional<T>`] encodes as its value, or `null` when absent.
//! - [`Outcome<E, T>`] encodes as a pair: `[error, null]` when failed and
//!   `[null, value]` when ok. Decoding reads the same shape; a non-null first
//!   slot decides the failure case and the second slot is then ignored.
//!
//! The pair format assumes the error never encodes as `null`. With a nullable
//! error type such as `Option<_>`, `Outcome::fail(None)` writes `[null, null]`,
//! which reads back as an ok outcome (or as an error when `T` is not nullable).
//! Use a non-nullable error type when outcomes must survive a round trip.
//!
//! # Example
//!
//! ```rust
//! use placid::{Optional, Outcome};
//!
//! let failed: Outcome<String, i32> = Outcome::fail("nope".to_string());
//! assert_eq!(serde_json::to_string(&failed).unwrap(), r#"["nope",null]"#);
//!
//! let ok: Outcome<String, i32> = serde_json::from_str("[null,3]").unwrap();
//! assert_eq!(ok, Outcome::ok(3));
//!
//! let absent: Optional<i32> = serde_json::from_str("null").unwrap();
//! assert!(absent.is_absent());
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{List, Optional, Outcome};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_ref().into_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

impl<E: Serialize, T: Serialize> Serialize for Outcome<E, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        match self {
            Outcome::Ok(value) => {
                pair.serialize_element(&None::<&E>)?;
                pair.serialize_element(&Some(value))?;
            }
            Outcome::Fail(error) => {
                pair.serialize_element(&Some(error))?;
                pair.serialize_element(&None::<&T>)?;
            }
        }
        pair.end()
    }
}

struct OutcomeVisitor<E, T>(PhantomData<fn() -> (E, T)>);

impl<'de, E, T> Visitor<'de> for OutcomeVisitor<E, T>
where
    E: Deserialize<'de>,
    T: Deserialize<'de>,
{
    type Value = Outcome<E, T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an [error, value] pair")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let error: Option<E> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        match error {
            Some(error) => {
                seq.next_element::<IgnoredAny>()?;
                Ok(Outcome::Fail(error))
            }
            None => {
                let value: T = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Outcome::Ok(value))
            }
        }
    }
}

impl<'de, E, T> Deserialize<'de> for Outcome<E, T>
where
    E: Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(2, OutcomeVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (**self).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(List::from)
    }
}
