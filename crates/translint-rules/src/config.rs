//! Analyzer configuration
//!
//! The host supplies a small, read-only configuration object: the set of
//! acceptable text domains (empty disables domain checking) and the
//! translators-comment toggle. Also loadable from YAML for hosts that keep
//! their sniff settings in a file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn default_check_translator_comments() -> bool {
    true
}

/// Configuration consumed from the host; immutable once analysis begins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Accepted text domains; an empty set disables domain checking.
    #[serde(default)]
    pub text_domains: Vec<String>,

    /// Whether placeholder-bearing strings require a translators comment.
    #[serde(default = "default_check_translator_comments")]
    pub check_translator_comments: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            text_domains: Vec::new(),
            check_translator_comments: true,
        }
    }
}

impl I18nConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration accepting the given text domains.
    pub fn with_text_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text_domains: domains.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a comma-separated domain list the way the host hands it over:
    /// segments are trimmed, empty segments dropped.
    pub fn parse_text_domains(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect()
    }

    /// Domain checking is active only once domains are configured.
    pub fn domain_checking_enabled(&self) -> bool {
        !self.text_domains.is_empty()
    }

    /// Load a configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
