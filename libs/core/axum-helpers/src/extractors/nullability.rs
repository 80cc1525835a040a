//! Field-level `deserialize_with` helpers for optional JSON members.
//!
//! Pair each with `#[serde(default)]` so an absent member still decodes to
//! `None`; serde only calls these when the member is present.
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct UpdateProfile {
//!     // absent: None, "x": Some("x"), null: rejected
//!     #[serde(default, deserialize_with = "axum_helpers::extractors::non_null")]
//!     title: Option<String>,
//!     // absent: None, null: Some(None), "x": Some(Some("x"))
//!     #[serde(default, deserialize_with = "axum_helpers::extractors::nullable")]
//!     nickname: Option<Option<String>>,
//! }
//! ```

use serde::{Deserialize, Deserializer};

/// Optional member that must carry a value when present; `null` is an error.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Optional member where an explicit `null` means "clear".
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
