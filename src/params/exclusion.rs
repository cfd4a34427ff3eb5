//! Exclusion list of sensitive field names.

use serde::{Deserialize, Serialize};

/// Field names whose values must never appear in logs.
///
/// Matching is ASCII case-insensitive: `password`, `PASSWORD`, and
/// `PaSsWoRd` all hit the stock `Password` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionList {
    names: Vec<String>,
}

impl Default for ExclusionList {
    /// Stock list covering the usual credential and payment fields.
    fn default() -> Self {
        Self::new(["Password", "PasswordConfirmation", "CreditCard", "CVC"])
    }
}

impl ExclusionList {
    /// Build a list from the given names, replacing the stock set.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// List with no entries; nothing gets masked.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Add names on top of the current set.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    /// True when `field` matches an entry case-insensitively.
    /// Stops at the first match.
    pub fn is_excluded(&self, field: &str) -> bool {
        self.names.iter().any(|name| name.eq_ignore_ascii_case(field))
    }

    /// The configured names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_contents() {
        let list = ExclusionList::default();
        assert_eq!(
            list.names(),
            ["Password", "PasswordConfirmation", "CreditCard", "CVC"]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let list = ExclusionList::default();
        assert!(list.is_excluded("password"));
        assert!(list.is_excluded("PASSWORD"));
        assert!(list.is_excluded("PaSsWoRd"));
        assert!(list.is_excluded("cvc"));
        assert!(!list.is_excluded("email"));
    }

    #[test]
    fn test_extend_adds_names() {
        let mut list = ExclusionList::default();
        list.extend(["ApiToken"]);
        assert!(list.is_excluded("apitoken"));
        assert!(list.is_excluded("APITOKEN"));
        assert!(list.is_excluded("Password"));
    }

    #[test]
    fn test_empty_list_excludes_nothing() {
        let list = ExclusionList::empty();
        assert!(!list.is_excluded("password"));
    }
}
