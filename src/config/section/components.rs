//! `[components]` section: component override map.
//!
//! Maps a builder component name to the source file that replaces it:
//!
//! ```toml
//! [components]
//! Sidebar = "./src/components/Sidebar.astro"
//! ```
//!
//! Paths are opaque strings here. Whether the file exists is the site
//! builder's concern; its build step fails on a missing override.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

/// Component name → override file path.
///
/// BTreeMap keeps diagnostics and serialized output in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentOverrides(BTreeMap<String, String>);

impl ComponentOverrides {
    /// Validate the override map: every path must be non-empty.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (name, path) in &self.0 {
            if path.is_empty() {
                diag.error_with_hint(
                    DiagnosticKind::MissingField,
                    FieldPath::keyed("components", name),
                    "override path is empty",
                    "point it at the replacement source file",
                );
            }
        }
    }

    /// Look up the override path for a component name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate overrides in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ComponentOverrides {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_lookup() {
        let overrides: ComponentOverrides = [(
            "Sidebar".to_string(),
            "./src/components/Sidebar.astro".to_string(),
        )]
        .into_iter()
        .collect();

        assert_eq!(
            overrides.get("Sidebar"),
            Some("./src/components/Sidebar.astro")
        );
        assert_eq!(overrides.get("Header"), None);
    }

    #[test]
    fn test_empty_path_rejected() {
        let overrides: ComponentOverrides = [("Sidebar".to_string(), String::new())]
            .into_iter()
            .collect();

        let mut diag = ConfigDiagnostics::new();
        overrides.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::MissingField));
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "components.Sidebar")
        );
    }

    #[test]
    fn test_nonexistent_file_is_not_checked() {
        // File existence is delegated to the site builder
        let overrides: ComponentOverrides =
            [("Sidebar".to_string(), "./no/such/file.astro".to_string())]
                .into_iter()
                .collect();

        let mut diag = ConfigDiagnostics::new();
        overrides.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
