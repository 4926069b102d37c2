//! Custom serde helpers for read API wire formats.

/// Deserializes `null` as the type's default.
///
/// The read API sends `null` instead of `[]` for empty lists on some assets
/// (e.g. `grouping` on assets that were never added to a collection).
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
