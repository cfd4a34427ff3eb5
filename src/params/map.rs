//! Multi-valued parameter map.

use indexmap::IndexMap;

/// Ordered mapping from field name to the values submitted under it.
///
/// HTTP form fields are multi-valued: `tag=a&tag=b` yields one key with two
/// values. Insertion order is preserved through JSON serialization.
pub type ParamMap = IndexMap<String, Vec<String>>;

/// Append a value under `key`, creating the entry if absent.
pub fn append(map: &mut ParamMap, key: impl Into<String>, value: impl Into<String>) {
    map.entry(key.into()).or_default().push(value.into());
}
