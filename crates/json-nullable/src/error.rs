//! Errors returned when reading a [`Nullable`](crate::Nullable) that holds no value.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullableError {
    /// The field was present and explicitly `null`.
    #[error("value is null")]
    Null,
    /// The field was absent.
    #[error("value is not specified")]
    Unspecified,
}
