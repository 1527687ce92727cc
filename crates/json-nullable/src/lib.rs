//! Tri-state JSON fields.
//!
//! A JSON field can be missing, explicitly `null`, or hold a value.
//! [`Nullable<T>`] keeps those three cases apart where `Option<T>` would merge
//! the first two, which is what partial-update (merge patch) payloads need.
//!
//! # Example
//!
//! ```
//! use json_nullable::Nullable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct UserPatch {
//!     #[serde(default, skip_serializing_if = "Nullable::is_unspecified")]
//!     name: Nullable<String>,
//!     #[serde(default, skip_serializing_if = "Nullable::is_unspecified")]
//!     age: Nullable<u32>,
//! }
//!
//! let patch: UserPatch = serde_json::from_str(r#"{"age": null}"#).unwrap();
//! assert!(!patch.name.is_specified());
//! assert!(patch.age.is_null());
//!
//! let mut patch = UserPatch::default();
//! patch.name.set("Ada".to_string());
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"name":"Ada"}"#);
//! ```
//!
//! Both `default` and `skip_serializing_if` are needed on every field:
//! without `default` serde decodes a missing field as `null`, and without
//! `skip_serializing_if` serializing an unspecified field fails.

pub mod codec;
pub mod error;
pub mod nullable;
pub mod object;

pub use codec::is_unspecified;
pub use error::NullableError;
pub use nullable::Nullable;
pub use object::{apply_field, read_field, write_field};
