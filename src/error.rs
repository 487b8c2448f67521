use thiserror::Error;

/// Error types for the string utilities
#[derive(Error, Debug)]
pub enum TextError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file: {path}")]
    InvalidConfig { path: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    // System errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create an invalid configuration file error
    pub fn invalid_config(path: impl Into<String>) -> Self {
        Self::InvalidConfig { path: path.into() }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } | Self::InvalidConfig { .. } => "configuration",
            Self::Parse(_) | Self::Serialize(_) => "serialization",
            Self::Io(_) => "system",
        }
    }
}

/// Result type alias for the string utilities
pub type TextResult<T> = std::result::Result<T, TextError>;
