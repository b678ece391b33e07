//! Serde helpers for PATCH-style update DTOs.
//!
//! A nullable column in an update DTO is an `Option<Option<T>>`:
//! - field absent from the body: `None` (leave untouched)
//! - field sent as `null`: `Some(None)` (clear the column)
//! - field sent with a value: `Some(Some(v))`
//!
//! A required column is an `Option<T>` read through [`required`], so an
//! explicit `null` is a deserialization error rather than a silent no-op.
//!
//! Use together with `#[serde(default)]` so absent fields deserialize to `None`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (including an explicit `null`) as `Some(..)`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize a present field as `Some(..)`, rejecting `null`.
pub fn required<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Overwrite `target` when `value` was supplied.
pub fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// The text a nullable patch field would write, if any.
pub fn patched_str(value: &Option<Option<String>>) -> Option<&str> {
    value.as_ref().and_then(|v| v.as_deref())
}
