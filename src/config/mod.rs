use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::{TextError, TextResult};
use crate::strings::{
    Strings, DEFAULT_EXCERPT_CHARACTERS, DEFAULT_EXCERPT_WORDS, DEFAULT_LIST_SEPARATOR,
    DEFAULT_MORE,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub excerpt: ExcerptConfig,
    pub list: ListConfig,
    pub hex: HexConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcerptConfig {
    pub word_limit: usize,
    pub character_limit: usize,
    pub more: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub final_separator: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexConfig {
    pub uppercase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub include_targets: bool,
    pub ansi: bool,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            word_limit: DEFAULT_EXCERPT_WORDS,
            character_limit: DEFAULT_EXCERPT_CHARACTERS,
            more: DEFAULT_MORE.to_string(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            final_separator: DEFAULT_LIST_SEPARATOR.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            include_targets: false,
            ansi: true,
        }
    }
}

impl ExcerptConfig {
    /// Word excerpt using the configured limit and marker
    pub fn words(&self, content: &str) -> String {
        Strings::excerpt(content, self.word_limit, &self.more)
    }

    /// Character excerpt using the configured limit and marker
    pub fn characters(&self, content: &str) -> String {
        Strings::excerpt_characters(content, self.character_limit, &self.more)
    }
}

impl ListConfig {
    /// Inline list using the configured final separator
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        Strings::inline_list_with(items, &self.final_separator)
    }
}

impl TextConfig {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> TextResult<Self> {
        let config_path = get_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TextResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TextError::invalid_config(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;

        info!("Configuration loaded from: {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> TextResult<Self> {
        let config: TextConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TextResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> TextResult<()> {
        if self.list.final_separator.trim().is_empty() {
            return Err(TextError::config("list final_separator must not be blank"));
        }

        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(TextError::config(format!(
                "logging level '{}' is not a valid filter",
                self.logging.level
            )));
        }

        debug!("Configuration validation passed");
        Ok(())
    }
}

/// Get the configuration file path
pub fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "string-utilities", "strutil")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("strutil.toml"))
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut TextConfig) -> TextResult<()> {
        Self::apply_from(config, |key| std::env::var(key).ok())?;
        info!("Applied environment variable overrides");
        Ok(())
    }

    /// Apply overrides read through `lookup`, then re-validate.
    /// Unparseable numeric and boolean values are ignored.
    pub fn apply_from<F>(config: &mut TextConfig, lookup: F) -> TextResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Excerpt overrides
        if let Some(words) = lookup("STRUTIL_EXCERPT_WORDS").and_then(|v| v.parse().ok()) {
            config.excerpt.word_limit = words;
        }

        if let Some(chars) = lookup("STRUTIL_EXCERPT_CHARACTERS").and_then(|v| v.parse().ok()) {
            config.excerpt.character_limit = chars;
        }

        if let Some(more) = lookup("STRUTIL_EXCERPT_MORE") {
            config.excerpt.more = more;
        }

        // List overrides
        if let Some(separator) = lookup("STRUTIL_LIST_SEPARATOR") {
            config.list.final_separator = separator;
        }

        // Hex overrides
        if let Some(uppercase) = lookup("STRUTIL_HEX_UPPERCASE") {
            config.hex.uppercase = uppercase.to_lowercase() == "true";
        }

        // Logging overrides
        if let Some(level) = lookup("STRUTIL_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.validate()
    }
}
