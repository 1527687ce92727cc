//! Reading and writing [`Nullable`] fields of a JSON object.
//!
//! These helpers do the job a derived struct serializer does, for code that
//! works on `serde_json::Map` directly: presence detection on read, omission
//! on write.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::nullable::Nullable;

/// Read `key` from `obj`.
///
/// An absent key gives [`Nullable::Unspecified`], a `null` gives
/// [`Nullable::Null`], anything else is decoded as `T`.
///
/// # Errors
///
/// Returns the `T` decode error unchanged.
///
/// # Example
///
/// ```
/// use json_nullable::{read_field, Nullable};
/// use serde_json::json;
///
/// let obj = json!({"name": "Ada", "email": null});
/// let obj = obj.as_object().unwrap();
///
/// assert_eq!(read_field::<String>(obj, "name").unwrap(), Nullable::present("Ada".to_string()));
/// assert_eq!(read_field::<String>(obj, "email").unwrap(), Nullable::Null);
/// assert_eq!(read_field::<String>(obj, "phone").unwrap(), Nullable::Unspecified);
/// ```
pub fn read_field<T>(obj: &Map<String, Value>, key: &str) -> Result<Nullable<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    match obj.get(key) {
        None => Ok(Nullable::Unspecified),
        Some(Value::Null) => Ok(Nullable::Null),
        Some(value) => T::deserialize(value).map(Nullable::Present),
    }
}

/// Write `value` into `obj` under `key`.
///
/// An unspecified value removes `key` so that it does not show up in the
/// output.
///
/// # Errors
///
/// Returns the `T` encode error unchanged; `obj` is left as it was.
pub fn write_field<T>(
    obj: &mut Map<String, Value>,
    key: &str,
    value: &Nullable<T>,
) -> Result<(), serde_json::Error>
where
    T: Serialize,
{
    let encoded = match value {
        Nullable::Unspecified => {
            tracing::trace!(key, "omitting unspecified field");
            obj.remove(key);
            return Ok(());
        }
        Nullable::Null => Value::Null,
        Nullable::Present(value) => serde_json::to_value(value)?,
    };
    obj.insert(key.to_string(), encoded);
    Ok(())
}

/// Apply the patch field `key` of `patch` onto `target`.
///
/// Absent in `patch`: `target` is unchanged. `null`: `target` becomes `null`.
/// A value: `target` takes the decoded value.
pub fn apply_field<T>(
    target: &mut Nullable<T>,
    patch: &Map<String, Value>,
    key: &str,
) -> Result<(), serde_json::Error>
where
    T: DeserializeOwned,
{
    target.merge(read_field(patch, key)?);
    Ok(())
}
