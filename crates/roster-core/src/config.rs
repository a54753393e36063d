//! Page configuration.

use serde::{Deserialize, Serialize};

/// Default location of the roster document, relative to the page.
pub const DEFAULT_DATA_PATH: &str = "data/students.json";

/// Identifier of the element that receives the rendered sections.
pub const DEFAULT_CONTAINER_ID: &str = "output";

/// Text written into the container when the document cannot be loaded.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Failed to load data (see console).";

/// Configuration for one student directory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Relative path (or absolute URL) of the roster document.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Id of the output container element.
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Message shown in the container when loading fails.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

fn default_title() -> String {
    "Student Directory".to_string()
}

impl PageConfig {
    /// Override the data path.
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            container_id: default_container_id(),
            fallback_message: default_fallback_message(),
            title: default_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.data_path, "data/students.json");
        assert_eq!(config.container_id, "output");
        assert_eq!(config.fallback_message, "Failed to load data (see console).");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PageConfig = toml::from_str(r#"data_path = "fixtures/roster.json""#).unwrap();
        assert_eq!(config.data_path, "fixtures/roster.json");
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
        assert_eq!(config.title, "Student Directory");
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }
}
