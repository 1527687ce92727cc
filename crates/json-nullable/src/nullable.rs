//! The [`Nullable`] tri-state type.

use std::mem;

use crate::error::NullableError;

/// A JSON field that can be absent, explicitly `null`, or hold a value.
///
/// `Option<T>` folds "absent" and "`null`" into the same `None`. `Nullable`
/// keeps them apart, which is what partial-update payloads need: an absent
/// field means "leave as is", a `null` field means "clear it".
///
/// The default state is [`Nullable::Unspecified`].
///
/// # Example
///
/// ```
/// use json_nullable::{Nullable, NullableError};
///
/// let mut age: Nullable<u32> = Nullable::default();
/// assert!(!age.is_specified());
/// assert_eq!(age.get(), Err(NullableError::Unspecified));
///
/// age.set_null();
/// assert!(age.is_null());
/// assert_eq!(age.get(), Err(NullableError::Null));
///
/// age.set(42);
/// assert_eq!(age.get(), Ok(&42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    /// The field was not present and must be omitted on output.
    #[default]
    Unspecified,
    /// The field was present and set to `null`.
    Null,
    /// The field was present with a concrete value.
    Present(T),
}

impl<T> Nullable<T> {
    /// Creates an unspecified value.
    pub const fn new() -> Self {
        Nullable::Unspecified
    }

    /// Creates an explicit `null`.
    pub const fn null() -> Self {
        Nullable::Null
    }

    pub const fn present(value: T) -> Self {
        Nullable::Present(value)
    }

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// - [`NullableError::Null`] if the value is an explicit `null`
    /// - [`NullableError::Unspecified`] if the value was never specified
    pub fn get(&self) -> Result<&T, NullableError> {
        match self {
            Nullable::Present(value) => Ok(value),
            Nullable::Null => Err(NullableError::Null),
            Nullable::Unspecified => Err(NullableError::Unspecified),
        }
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self) -> Result<&mut T, NullableError> {
        match self {
            Nullable::Present(value) => Ok(value),
            Nullable::Null => Err(NullableError::Null),
            Nullable::Unspecified => Err(NullableError::Unspecified),
        }
    }

    /// Consumes the wrapper and returns the contained value.
    pub fn into_inner(self) -> Result<T, NullableError> {
        match self {
            Nullable::Present(value) => Ok(value),
            Nullable::Null => Err(NullableError::Null),
            Nullable::Unspecified => Err(NullableError::Unspecified),
        }
    }

    /// Stores `value`, replacing whatever state was held before.
    pub fn set(&mut self, value: T) {
        *self = Nullable::Present(value);
    }

    /// Stores `value` and returns the previous state.
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Nullable::Present(value))
    }

    /// Returns `true` if the value is an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// Switches to `null`, dropping any held value.
    pub fn set_null(&mut self) {
        *self = Nullable::Null;
    }

    /// Returns `true` if the value is either `null` or present.
    ///
    /// Serializers must check this before emitting the field at all.
    pub fn is_specified(&self) -> bool {
        !self.is_unspecified()
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Nullable::Unspecified)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    /// Switches to unspecified, dropping any held value.
    pub fn set_unspecified(&mut self) {
        *self = Nullable::Unspecified;
    }

    /// Takes the current state out, leaving [`Nullable::Unspecified`].
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Present(value) => Nullable::Present(value),
            Nullable::Null => Nullable::Null,
            Nullable::Unspecified => Nullable::Unspecified,
        }
    }

    pub fn as_mut(&mut self) -> Nullable<&mut T> {
        match self {
            Nullable::Present(value) => Nullable::Present(value),
            Nullable::Null => Nullable::Null,
            Nullable::Unspecified => Nullable::Unspecified,
        }
    }

    /// Maps a present value with `f`; `null` and unspecified pass through.
    ///
    /// ```
    /// use json_nullable::Nullable;
    ///
    /// assert_eq!(Nullable::present(2).map(|n| n * 10), Nullable::present(20));
    /// assert_eq!(Nullable::<i32>::Null.map(|n| n * 10), Nullable::Null);
    /// ```
    pub fn map<U, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Nullable::Present(value) => Nullable::Present(f(value)),
            Nullable::Null => Nullable::Null,
            Nullable::Unspecified => Nullable::Unspecified,
        }
    }

    /// Applies `patch` on top of `self` with merge-patch semantics.
    ///
    /// An unspecified patch leaves `self` untouched. A `null` or present
    /// patch replaces it.
    pub fn merge(&mut self, patch: Nullable<T>) {
        if patch.is_specified() {
            *self = patch;
        }
    }

    /// Converts into the equivalent nested option.
    ///
    /// `None` is unspecified, `Some(None)` is `null`, `Some(Some(v))` is present.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Nullable::Present(value) => Some(Some(value)),
            Nullable::Null => Some(None),
            Nullable::Unspecified => None,
        }
    }
}

impl<T> From<Option<Option<T>>> for Nullable<T> {
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            Some(Some(value)) => Nullable::Present(value),
            Some(None) => Nullable::Null,
            None => Nullable::Unspecified,
        }
    }
}

impl<T> From<Nullable<T>> for Option<Option<T>> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unspecified() {
        let value: Nullable<i32> = Nullable::default();
        assert!(!value.is_specified());
        assert!(!value.is_null());
        assert!(!value.is_present());
        assert_eq!(value, Nullable::new());
    }

    #[test]
    fn test_set() {
        let mut value = Nullable::new();
        value.set("a".to_string());
        assert!(value.is_specified());
        assert!(!value.is_null());
        assert_eq!(value.get(), Ok(&"a".to_string()));
    }

    #[test]
    fn test_set_null() {
        let mut value = Nullable::present(7);
        value.set_null();
        assert!(value.is_specified());
        assert!(value.is_null());
        assert_eq!(value.get(), Err(NullableError::Null));
    }

    #[test]
    fn test_set_unspecified() {
        let mut value = Nullable::present(7);
        value.set_unspecified();
        assert!(!value.is_specified());
        assert!(!value.is_null());
        assert_eq!(value.get(), Err(NullableError::Unspecified));
    }

    #[test]
    fn test_set_after_null_clears_null() {
        let mut value = Nullable::null();
        value.set(5);
        assert!(!value.is_null());
        assert_eq!(value.get(), Ok(&5));
    }

    #[test]
    fn test_get_mut_and_into_inner() {
        let mut value = Nullable::present(vec![1]);
        value.get_mut().unwrap().push(2);
        assert_eq!(value.into_inner(), Ok(vec![1, 2]));

        let mut null: Nullable<Vec<i32>> = Nullable::Null;
        assert_eq!(null.get_mut(), Err(NullableError::Null));
        assert_eq!(null.into_inner(), Err(NullableError::Null));
        assert_eq!(Nullable::<u8>::Unspecified.into_inner(), Err(NullableError::Unspecified));
    }

    #[test]
    fn test_take_and_replace() {
        let mut value = Nullable::null();
        assert_eq!(value.replace(3), Nullable::Null);
        assert_eq!(value.take(), Nullable::present(3));
        assert!(value.is_unspecified());
    }

    #[test]
    fn test_as_ref_as_mut() {
        let mut value = Nullable::present(String::from("x"));
        assert_eq!(value.as_ref(), Nullable::Present(&String::from("x")));
        if let Nullable::Present(s) = value.as_mut() {
            s.push('y');
        }
        assert_eq!(value.get().map(String::as_str), Ok("xy"));
    }

    #[test]
    fn test_merge() {
        let mut target = Nullable::present(1);
        target.merge(Nullable::Unspecified);
        assert_eq!(target, Nullable::present(1));
        target.merge(Nullable::Null);
        assert_eq!(target, Nullable::Null);
        target.merge(Nullable::present(2));
        assert_eq!(target, Nullable::present(2));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Nullable::<i32>::from(None), Nullable::Unspecified);
        assert_eq!(Nullable::<i32>::from(Some(None)), Nullable::Null);
        assert_eq!(Nullable::from(Some(Some(4))), Nullable::present(4));

        let back: Option<Option<i32>> = Nullable::present(4).into();
        assert_eq!(back, Some(Some(4)));
        assert_eq!(Nullable::<i32>::Null.into_option(), Some(None));
        assert_eq!(Nullable::<i32>::Unspecified.into_option(), None);
    }
}
