//! Token codecs.
//!
//! A [`Codec`] turns a [`Payload`] into an opaque signed string and back.
//! The session strategy never signs anything itself; it is handed a codec
//! at construction time, which keeps the signing backend swappable.
//!
//! [`JwtCodec`] is the default implementation and produces standard
//! HMAC-signed JSON Web Tokens.

mod jwt;

use thiserror::Error;

pub use jwt::{JwtCodec, SUPPORTED_ALGORITHMS};

/// Decoded key-value contents of a token.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Errors produced while signing or verifying a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The token is not structurally valid.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The signature does not match the payload and secret.
    #[error("token signature mismatch")]
    InvalidSignature,

    /// The token was signed with an algorithm outside the accepted list.
    #[error("token algorithm not accepted: {0}")]
    AlgorithmNotAccepted(String),

    /// The codec cannot sign or verify with this algorithm.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The payload could not be encoded.
    #[error("failed to encode token: {0}")]
    Encode(String),
}

/// Signing and verification capability used by the session strategy.
pub trait Codec: Send + Sync {
    /// Sign `payload` with `secret` using `algorithm`.
    fn sign(&self, payload: &Payload, secret: &str, algorithm: &str) -> Result<String, CodecError>;

    /// Verify `token` against `secret` and recover its payload.
    ///
    /// Fails if the token was signed with an algorithm that is not in
    /// `accepted`.
    fn verify(&self, token: &str, secret: &str, accepted: &[&str]) -> Result<Payload, CodecError>;

    /// Whether this codec can sign with `algorithm`.
    fn supports(&self, _algorithm: &str) -> bool {
        true
    }
}

impl<C: Codec + ?Sized> Codec for std::sync::Arc<C> {
    fn sign(&self, payload: &Payload, secret: &str, algorithm: &str) -> Result<String, CodecError> {
        (**self).sign(payload, secret, algorithm)
    }

    fn verify(&self, token: &str, secret: &str, accepted: &[&str]) -> Result<Payload, CodecError> {
        (**self).verify(token, secret, accepted)
    }

    fn supports(&self, algorithm: &str) -> bool {
        (**self).supports(algorithm)
    }
}
