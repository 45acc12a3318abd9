//! Configuration types for fsd-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::layers::{LayerTable, DEFAULT_LAYERS, DEFAULT_PUBLIC_API_EXEMPT};
use crate::paths::DEFAULT_SOURCE_ROOT;

/// Rule option holding glob patterns; validated when the config is loaded.
pub const TEST_FILES_PATTERNS_KEY: &str = "test_files_patterns";

/// Top-level configuration, usually read from `fsd-lint.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Layer table configuration.
    #[serde(default)]
    pub layers: LayersConfig,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks structural consistency.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analyzer.source_root.is_empty() || self.analyzer.source_root.contains(['/', '\\'])
        {
            return Err(ConfigError::Validation(format!(
                "analyzer.source_root must be a single folder name, got '{}'",
                self.analyzer.source_root
            )));
        }

        if self.layers.names.is_empty() {
            return Err(ConfigError::Validation(
                "layers.names must not be empty".to_string(),
            ));
        }

        for exempt in &self.layers.public_api_exempt {
            if !self.layers.names.contains(exempt) {
                return Err(ConfigError::Validation(format!(
                    "layers.public_api_exempt: unknown layer '{exempt}'"
                )));
            }
        }

        for (name, rule) in &self.rules {
            if rule.enabled == Some(false) {
                tracing::debug!("Rule {name} disabled by config");
            }
            for pattern in rule.get_str_array(TEST_FILES_PATTERNS_KEY) {
                glob::Pattern::new(&pattern).map_err(|e| {
                    ConfigError::Validation(format!(
                        "rules.{name}.{TEST_FILES_PATTERNS_KEY}: invalid glob '{pattern}': {e}"
                    ))
                })?;
            }
        }

        tracing::debug!(
            source_root = %self.analyzer.source_root,
            alias = ?self.analyzer.alias,
            layers = self.layers.names.len(),
            rules = self.rules.len(),
            "Config validated"
        );
        Ok(())
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration block for a rule.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Alias for a rule: its own `alias` option, else `analyzer.alias`.
    #[must_use]
    pub fn rule_alias(&self, rule_name: &str) -> Option<String> {
        self.rules
            .get(rule_name)
            .and_then(|c| c.get_option::<String>("alias"))
            .or_else(|| self.analyzer.alias.clone())
            .filter(|a| !a.is_empty())
    }

    /// Builds the layer table described by `[layers]`.
    #[must_use]
    pub fn layer_table(&self) -> LayerTable {
        LayerTable::new(
            self.layers.names.iter().cloned(),
            self.layers.public_api_exempt.iter().cloned(),
        )
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Folder name that marks the start of the layered sources.
    #[serde(default = "default_source_root")]
    pub source_root: String,

    /// Bundler path alias stripped from import specifiers (e.g. `@`).
    #[serde(default)]
    pub alias: Option<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            source_root: default_source_root(),
            alias: None,
            respect_gitignore: true,
        }
    }
}

/// `[layers]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayersConfig {
    /// Recognized layer names.
    #[serde(default = "default_layer_names")]
    pub names: Vec<String>,

    /// Layers without a slice boundary, exempt from public API checks.
    #[serde(default = "default_public_api_exempt")]
    pub public_api_exempt: Vec<String>,
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            names: default_layer_names(),
            public_api_exempt: default_public_api_exempt(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_source_root() -> String {
    DEFAULT_SOURCE_ROOT.to_string()
}

fn default_layer_names() -> Vec<String> {
    DEFAULT_LAYERS.iter().map(ToString::to_string).collect()
}

fn default_public_api_exempt() -> Vec<String> {
    DEFAULT_PUBLIC_API_EXEMPT
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("Invalid config: {0}")]
    Validation(String),
}
