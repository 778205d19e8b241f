//! Configuration management for jwt-session.
//!
//! [`StrategyConfig`] is what a [`TokenSessionStrategy`] is constructed from.
//! The binary additionally layers it, with the following priority (highest
//! to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values
//!
//! [`TokenSessionStrategy`]: crate::session::TokenSessionStrategy

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::logging::DEFAULT_FILTER;

/// Algorithm used when none is configured.
pub const DEFAULT_ALGORITHM: &str = "HS256";

/// Settings supplied when constructing a strategy.
///
/// Both fields are optional here so that partial configuration can be
/// merged; [`StrategyConfig::resolve`] applies defaults and validates.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Signing and verification secret. Required.
    pub secret: Option<String>,
    /// Signing algorithm identifier (default: "HS256").
    pub algorithm: Option<String>,
}

impl StrategyConfig {
    /// Create a config with the given secret and the default algorithm.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            algorithm: None,
        }
    }

    /// Override the signing algorithm.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Merge over defaults and validate.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let secret = match self.secret.as_deref() {
            Some(secret) if !secret.is_empty() => secret.to_string(),
            _ => return Err(ConfigError::MissingSecret),
        };

        let algorithm = self
            .algorithm
            .clone()
            .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());
        if algorithm.is_empty() {
            return Err(ConfigError::EmptyAlgorithm);
        }

        Ok(Settings { secret, algorithm })
    }
}

impl fmt::Debug for StrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Validated, immutable strategy settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub(crate) secret: String,
    pub(crate) algorithm: String,
}

impl Settings {
    /// Configured signing algorithm.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Application configuration for the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strategy settings.
    pub strategy: StrategyConfig,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace) or a full filter directive
    /// (default: "jwt_session=info").
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("JWT_SESSION_SECRET") {
            if !secret.is_empty() {
                self.strategy.secret = Some(secret);
            }
        }

        if let Some(algorithm) = lookup("JWT_SESSION_ALGORITHM") {
            if !algorithm.is_empty() {
                self.strategy.algorithm = Some(algorithm);
            }
        }

        if let Some(level) = lookup("JWT_SESSION_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Some(level) = lookup("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ref secret) = args.secret {
            self.strategy.secret = Some(secret.clone());
        }

        if let Some(ref algorithm) = args.algorithm {
            self.strategy.algorithm = Some(algorithm.clone());
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match args.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env();
        config.apply_args(args);

        Ok(config)
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// No secret, or an empty one, was configured.
    MissingSecret,
    /// The algorithm identifier is empty.
    EmptyAlgorithm,
    /// The codec cannot sign with the configured algorithm.
    UnsupportedAlgorithm(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::MissingSecret => write!(f, "session strategy requires a secret key"),
            Self::EmptyAlgorithm => write!(f, "algorithm must not be empty"),
            Self::UnsupportedAlgorithm(alg) => write!(f, "unsupported algorithm: {}", alg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}
