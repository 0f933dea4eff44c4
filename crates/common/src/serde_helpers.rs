//! Serde helpers shared across domain request types

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicit null".
///
/// With a plain `Option<Option<T>>`, serde collapses `null` into the outer
/// `None`. Annotating the field with
/// `#[serde(default, deserialize_with = "double_option")]` yields:
/// - field absent        → `None` (leave unchanged)
/// - field set to `null` → `Some(None)` (clear the value)
/// - field set to a value → `Some(Some(value))`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
