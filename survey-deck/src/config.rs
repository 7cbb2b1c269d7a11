//! Configuration file support for survey-deck.
//!
//! Loads optional `survey-deck.toml` from the working directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "survey-deck.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SurveyDeckConfig {
    /// Default output path when `--output` is not given
    pub output: Option<PathBuf>,
    pub page: PageConfig,
}

/// Page-level overrides
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page title, overriding the deck title
    pub title: Option<String>,
    /// `lang` attribute, overriding the deck language
    pub lang: Option<String>,
    /// CSS appended after the bundled stylesheet
    pub extra_css: Option<String>,
}

impl SurveyDeckConfig {
    /// Load config from `survey-deck.toml` in the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(CONFIG_FILE_NAME))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SurveyDeckConfig::default();
        assert!(config.output.is_none());
        assert!(config.page.title.is_none());
        assert!(config.page.lang.is_none());
        assert!(config.page.extra_css.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SurveyDeckConfig::load(temp.path());
        assert_eq!(config, SurveyDeckConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"
output = "public/index.html"

[page]
title = "Surveys"
lang = "es-MX"
extra_css = ".slide-card { max-width: 960px; }"
"#,
        )
        .expect("write config");

        let config = SurveyDeckConfig::load(temp.path());
        assert_eq!(config.output, Some(PathBuf::from("public/index.html")));
        assert_eq!(config.page.title.as_deref(), Some("Surveys"));
        assert_eq!(config.page.lang.as_deref(), Some("es-MX"));
        assert!(config.page.extra_css.is_some());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[page]\nlang = \"en\"\n").expect("write config");

        let config = SurveyDeckConfig::load_from_path(&path);
        assert!(config.output.is_none());
        assert_eq!(config.page.lang.as_deref(), Some("en"));
        assert!(config.page.title.is_none());
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "page = [unclosed").expect("write");

        let config = SurveyDeckConfig::load(temp.path());
        assert_eq!(config, SurveyDeckConfig::default());
    }
}
