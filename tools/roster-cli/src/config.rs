//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use roster_core::PageConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file (`roster.toml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Page settings.
    #[serde(default)]
    pub page: PageConfig,

    /// Where the roster document is read from.
    #[serde(default)]
    pub source: SourceConfig,
}

/// Roster document location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory relative paths are read from. Defaults to the working directory.
    #[serde(default)]
    pub root: Option<String>,

    /// Fetch over HTTP from this base URL instead of reading files.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl CliConfig {
    /// Load config from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Starter `roster.toml`.
pub fn generate_default_config() -> String {
    r#"# Student directory configuration

[page]
title = "Student Directory"
data_path = "data/students.json"
container_id = "output"
fallback_message = "Failed to load data (see console)."

[source]
# root = "."
# base_url = "http://127.0.0.1:3000"
"#
    .to_string()
}

/// Sample roster written by `roster init`.
pub const SAMPLE_ROSTER: &str = r#"{
  "students": [
    { "id": 1, "name": "Ana", "age": 23, "course": "AI" },
    { "id": 2, "name": "Ben", "age": 20, "course": "Intro to Data Analytics" },
    { "id": 3, "name": "Carla", "age": 22, "course": "Cybersecurity Fundamentals" }
  ],
  "courses": [
    { "title": "AI", "description": "Intro to AI" },
    { "title": "Intro to Data Analytics", "description": "Cleaning, charting and summarising data" },
    { "title": "Cybersecurity Fundamentals", "description": "Threats, defenses and secure habits" }
  ],
  "instructors": [
    { "id": 1, "name": "Bo", "subject": "Artificial Intelligence" }
  ]
}
"#;

#[cfg(test)]
mod tests {
    use roster_page::data::Document;

    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig =
            toml::from_str("[source]\nbase_url = \"https://school.example\"\n").unwrap();
        assert_eq!(config.page, PageConfig::default());
        assert_eq!(config.source.base_url.as_deref(), Some("https://school.example"));
        assert_eq!(config.source.root, None);
    }

    #[test]
    fn test_load_json_config() {
        let path = std::env::temp_dir().join(format!("roster-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"page": {"title": "Term 2"}}"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.page.title, "Term 2");
        assert_eq!(config.page.data_path, "data/students.json");
    }

    #[test]
    fn test_sample_roster_is_a_document() {
        let doc: Document = serde_json::from_str(SAMPLE_ROSTER).unwrap();
        assert_eq!(doc.students.len(), 3);
    }
}
