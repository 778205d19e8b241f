//! Error types for jwt-session.

use thiserror::Error;

use crate::codec::CodecError;
use crate::config::ConfigError;

/// Main error type for jwt-session operations.
#[derive(Error, Debug)]
pub enum JwtSessionError {
    /// The strategy cannot be built from the supplied configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// `write` was called without a key to store the value under.
    #[error("write requires a non-empty key")]
    MissingKey,

    /// The codec failed to produce a token.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command-line usage error.
    #[error("{0}")]
    Args(String),
}

/// Convenience Result type for jwt-session operations.
pub type Result<T> = std::result::Result<T, JwtSessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err: JwtSessionError = ConfigError::MissingSecret.into();
        assert!(matches!(err, JwtSessionError::Configuration(_)));
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn test_missing_key_display() {
        let err = JwtSessionError::MissingKey;
        assert!(err.to_string().contains("key"));
    }

    #[test]
    fn test_codec_error_conversion() {
        let err: JwtSessionError = CodecError::Encode("boom".into()).into();
        assert!(matches!(err, JwtSessionError::Codec(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: JwtSessionError = json_err.into();
        assert!(matches!(err, JwtSessionError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }
}
