//! serde hooks for [`Nullable`].
//!
//! Encoding writes `null` or the value's own encoding. An unspecified value
//! has no encoding: the containing struct has to skip the field, usually with
//! `#[serde(default, skip_serializing_if = "Nullable::is_unspecified")]`.
//!
//! Decoding only runs for keys that are present, so it never produces
//! [`Nullable::Unspecified`]; `#[serde(default)]` covers the absent case.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Error as _, Serialize, Serializer};

use crate::nullable::Nullable;

const UNSPECIFIED_MESSAGE: &str = "unspecified value must be skipped, not serialized";

/// Field predicate for `#[serde(skip_serializing_if = "...")]`.
pub fn is_unspecified<T>(value: &Nullable<T>) -> bool {
    value.is_unspecified()
}

impl<T> Serialize for Nullable<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Present(value) => serializer.serialize_some(value),
            Nullable::Null => serializer.serialize_none(),
            Nullable::Unspecified => Err(S::Error::custom(UNSPECIFIED_MESSAGE)),
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(NullableVisitor(PhantomData))
    }
}

struct NullableVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for NullableVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Nullable<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or a value")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        tracing::trace!("decoded explicit null");
        Ok(Nullable::Null)
    }

    // Formats without a native option type report null as unit.
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        tracing::trace!("decoded present value");
        Ok(Nullable::Present(value))
    }
}
