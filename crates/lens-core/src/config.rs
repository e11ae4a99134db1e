use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::language::DEFAULT_TARGET_LANGUAGE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the analysis service; `/analyze` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_target_language")]
    pub default_target_language: String,

    #[serde(default)]
    pub show_transliteration: bool,

    #[serde(default = "default_true")]
    pub target_language_selectable: bool,

    /// Delay before the automatic first cycle. Zero disables it.
    #[serde(default = "default_auto_analyze_delay_ms")]
    pub auto_analyze_delay_ms: u64,

    #[serde(default = "default_example_sentences")]
    pub example_sentences: Vec<String>,
}

/// Which optional parts of the UI are active.
///
/// One renderer serves both flavours of the client: the one that shows
/// transliterations, and the one that lets the user pick a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub show_transliteration: bool,
    pub target_language_selectable: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            show_transliteration: false,
            target_language_selectable: true,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5010".to_string()
}
fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}
fn default_true() -> bool {
    true
}
fn default_auto_analyze_delay_ms() -> u64 {
    1000
}
fn default_example_sentences() -> Vec<String> {
    vec![
        "私は本を読みました。".to_string(),
        "彼女は学校に行きます。".to_string(),
        "これは美味しい食べ物です。".to_string(),
    ]
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_target_language: default_target_language(),
            show_transliteration: false,
            target_language_selectable: default_true(),
            auto_analyze_delay_ms: default_auto_analyze_delay_ms(),
            example_sentences: default_example_sentences(),
        }
    }
}

impl LensConfig {
    /// Load config from ~/.config/sentence-lens/config.toml, creating defaults if missing.
    pub fn load() -> crate::error::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                crate::error::LensError::Config(format!("Failed to read config: {e}"))
            })?;
            Self::parse(&contents)
        } else {
            let config = LensConfig::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Parse a config document. Missing keys take their defaults.
    pub fn parse(contents: &str) -> crate::error::Result<Self> {
        toml::from_str(contents).map_err(|e| {
            crate::error::LensError::Config(format!("Failed to parse config: {e}"))
        })
    }

    /// Save config to disk.
    pub fn save(&self) -> crate::error::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| {
            crate::error::LensError::Config(format!("Failed to serialize config: {e}"))
        })?;
        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Get the config file path.
    pub fn config_path() -> crate::error::Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            crate::error::LensError::Config("Could not determine config directory".into())
        })?;
        Ok(config_dir.join("sentence-lens").join("config.toml"))
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            show_transliteration: self.analysis.show_transliteration,
            target_language_selectable: self.analysis.target_language_selectable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = LensConfig::parse("").unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5010");
        assert_eq!(config.analysis.default_target_language, "en");
        assert_eq!(config.analysis.auto_analyze_delay_ms, 1000);
        assert_eq!(config.analysis.example_sentences.len(), 3);
        assert_eq!(config.capabilities(), Capabilities::default());
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config = LensConfig::parse(
            r#"
            [server]
            base_url = "http://analysis.local:8080"

            [analysis]
            show_transliteration = true
            target_language_selectable = false
            "#,
        )
        .unwrap();

        assert_eq!(config.server.base_url, "http://analysis.local:8080");
        assert_eq!(config.analysis.default_target_language, "en");
        assert_eq!(
            config.capabilities(),
            Capabilities {
                show_transliteration: true,
                target_language_selectable: false,
            }
        );
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = LensConfig::parse("[server\nbase_url = 3").unwrap_err();
        assert!(matches!(err, crate::error::LensError::Config(_)));
    }

    #[test]
    fn defaults_survive_a_serialize_parse_cycle() {
        let text = toml::to_string_pretty(&LensConfig::default()).unwrap();
        let parsed = LensConfig::parse(&text).unwrap();
        assert_eq!(
            parsed.analysis.example_sentences,
            LensConfig::default().analysis.example_sentences
        );
    }
}
