//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::params::exclusion::ExclusionList;

/// Middleware configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ParamLoggerConfig {
    /// Field names masked in logged form data.
    pub exclusions: ExclusionList,

    /// Also mask the `params` log field (query + path parameters).
    ///
    /// Off by default: only body fields have historically been masked, and
    /// the `params` field is logged in cleartext. Turn this on if query
    /// strings may carry secrets.
    pub redact_params: bool,

    /// Upper bound on the number of body bytes buffered for form capture.
    ///
    /// Requests with a larger or undeclared Content-Length pass through
    /// without a `form` log field.
    pub max_capture_bytes: usize,
}

impl Default for ParamLoggerConfig {
    fn default() -> Self {
        Self {
            exclusions: ExclusionList::default(),
            redact_params: false,
            max_capture_bytes: 256 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParamLoggerConfig::default();
        assert!(config.exclusions.is_excluded("Password"));
        assert!(!config.redact_params);
        assert_eq!(config.max_capture_bytes, 256 * 1024);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: ParamLoggerConfig =
            toml::from_str("exclusions = [\"Password\", \"Ssn\"]").unwrap();

        assert!(config.exclusions.is_excluded("ssn"));
        assert!(!config.exclusions.is_excluded("CVC"));
        // Unspecified fields fall back to defaults.
        assert!(!config.redact_params);
    }

    #[test]
    fn test_roundtrip_through_serde() {
        let config = ParamLoggerConfig::default();
        let encoded = toml::to_string(&config).unwrap();
        let decoded: ParamLoggerConfig = toml::from_str(&encoded).unwrap();

        assert_eq!(decoded.exclusions.names(), config.exclusions.names());
        assert_eq!(decoded.max_capture_bytes, config.max_capture_bytes);
    }
}
