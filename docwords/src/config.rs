//! Exclusion rule configuration from a TOML file

use crate::rules::{ExclusionRules, RulesError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Exclusion rules as written in a configuration file
///
/// Every key is optional; an empty file yields the default rule set, which
/// only strips in-text citations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Strip in-text citations such as `(Smith, 2014)`
    pub default_citations: bool,

    /// Additional regular expressions whose matches are stripped, in order
    pub ignore_patterns: Vec<String>,

    /// Style identifiers whose paragraphs are not counted
    pub ignore_styles: Vec<String>,

    /// Outline title after which counting starts
    pub start_after: Option<String>,

    /// Outline title at which counting stops
    pub stop_before: Option<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            default_citations: true,
            ignore_patterns: Vec::new(),
            ignore_styles: Vec::new(),
            start_after: None,
            stop_before: None,
        }
    }
}

impl RulesConfig {
    /// Load configuration from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the rules file
    ///
    /// # Returns
    /// * `Ok(RulesConfig)` - Successfully loaded configuration
    /// * `Err(ConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(ConfigError::IoError)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::ParseError)
    }

    /// Build the rule set described by this configuration
    ///
    /// The citation pattern, when enabled, runs before the configured
    /// patterns.
    pub fn into_rules(self) -> Result<ExclusionRules, ConfigError> {
        let mut rules = if self.default_citations {
            ExclusionRules::with_default_citations()
        } else {
            ExclusionRules::new()
        };

        for pattern in &self.ignore_patterns {
            rules = rules.ignore_pattern(pattern).map_err(ConfigError::RulesError)?;
        }
        for style in self.ignore_styles {
            rules = rules.ignore_style(style);
        }
        if let Some(title) = &self.start_after {
            rules = rules.start_after(title);
        }
        if let Some(title) = &self.stop_before {
            rules = rules.stop_before(title);
        }

        Ok(rules)
    }
}

/// Errors that can occur when loading a rules file
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
    /// IO error when reading the file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// A configured rule is invalid
    RulesError(RulesError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            ConfigError::RulesError(e) => write!(f, "Invalid rule: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
            ConfigError::RulesError(e) => Some(e),
        }
    }
}
