//! Masking pass over captured parameters.

use crate::params::exclusion::ExclusionList;
use crate::params::map::ParamMap;

/// Sentinel written in place of an excluded field's values.
pub const FILTERED: &str = "[FILTERED]";

/// Copy `fields`, replacing the value sequence of every excluded key with
/// the single element `[FILTERED]`.
///
/// The output contains exactly the same keys as the input; non-excluded
/// value sequences are carried over unchanged. Pure function of its inputs,
/// so re-running it over its own output is a no-op.
pub fn mask_secrets(fields: &ParamMap, exclusions: &ExclusionList) -> ParamMap {
    fields
        .iter()
        .map(|(key, values)| {
            if exclusions.is_excluded(key) {
                (key.clone(), vec![FILTERED.to_string()])
            } else {
                (key.clone(), values.clone())
            }
        })
        .collect()
}
