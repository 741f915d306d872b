//! Scope aliasing.

use std::collections::{BTreeMap, HashMap};

/// Maps raw, author-chosen scopes to canonical scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeAliasTable {
    aliases: HashMap<String, String>,
}

impl ScopeAliasTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias.
    #[must_use]
    pub fn with_alias(mut self, raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(raw.into(), canonical.into());
        self
    }

    /// Returns the canonical scope for `raw`.
    ///
    /// An empty scope is never looked up, and an empty alias leaves the raw
    /// scope in place.
    pub fn normalize<'a>(&'a self, raw: &'a str) -> &'a str {
        if raw.is_empty() {
            return raw;
        }

        self.aliases
            .get(raw)
            .filter(|canonical| !canonical.is_empty())
            .map_or(raw, String::as_str)
    }

    /// Returns the number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if there are no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ScopeAliasTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(raw, canonical)| (raw.into(), canonical.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for ScopeAliasTable {
    fn from(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }
}

impl From<BTreeMap<String, String>> for ScopeAliasTable {
    fn from(aliases: BTreeMap<String, String>) -> Self {
        aliases.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_applies() {
        let table = ScopeAliasTable::new().with_alias("ui", "interface");
        assert_eq!(table.normalize("ui"), "interface");
    }

    #[test]
    fn test_unknown_scope_is_unchanged() {
        let table = ScopeAliasTable::new().with_alias("ui", "interface");
        assert_eq!(table.normalize("api"), "api");
    }

    #[test]
    fn test_empty_scope_stays_empty() {
        let table = ScopeAliasTable::new().with_alias("", "core");
        assert_eq!(table.normalize(""), "");
    }

    #[test]
    fn test_empty_alias_keeps_raw() {
        let table = ScopeAliasTable::new().with_alias("ui", "");
        assert_eq!(table.normalize("ui"), "ui");
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = ScopeAliasTable::new().with_alias("ui", "interface");
        assert_eq!(table.normalize("UI"), "UI");
    }

    #[test]
    fn test_from_btree_map() {
        let map = BTreeMap::from([("deps".to_string(), "dependencies".to_string())]);
        let table = ScopeAliasTable::from(map);
        assert_eq!(table.len(), 1);
        assert_eq!(table.normalize("deps"), "dependencies");
    }
}
