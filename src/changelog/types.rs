//! Common types for changelog catalogs

use serde::{Deserialize, Serialize};

/// A single note inside a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub title: String,
    pub description: String,
}

/// One version's changelog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Dot-separated numeric version (e.g., "1.0.9", "2.1")
    pub version: String,
    /// Headline for the release
    pub title: String,
    /// Notes in display order
    #[serde(default)]
    pub changes: Vec<Change>,
}

impl Release {
    pub fn new(version: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            title: title.into(),
            changes: Vec::new(),
        }
    }

    pub fn with_change(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.changes.push(Change {
            title: title.into(),
            description: description.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn release_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Release>(json!({
            "version": "1.2.0",
            "title": "Spring cleanup",
            "changes": [
                { "title": "Faster sync", "description": "Sync runs in the background" },
                { "title": "Dark mode", "description": "Follows the system setting" }
            ]
        }))
        .unwrap();

        assert_eq!(
            result,
            Release::new("1.2.0", "Spring cleanup")
                .with_change("Faster sync", "Sync runs in the background")
                .with_change("Dark mode", "Follows the system setting")
        );
    }

    #[test]
    fn release_without_changes_defaults_to_empty_list() {
        let result = serde_json::from_value::<Release>(json!({
            "version": "1.0",
            "title": "First release"
        }))
        .unwrap();

        assert!(result.changes.is_empty());
    }

    #[test]
    fn release_missing_version_is_rejected() {
        let result = serde_json::from_value::<Release>(json!({ "title": "No version" }));

        assert!(result.is_err());
    }
}
