//! Serde helpers for update payloads

use serde::{Deserialize, Deserializer};

/// Distinguish "field absent" from "field explicitly null".
///
/// With `#[serde(default, deserialize_with = "serde_helpers::double_option")]`
/// an absent field stays `None`, an explicit `null` becomes `Some(None)`
/// (clear the reference), and a value becomes `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
