//! HMAC-signed JSON Web Token codec.

use std::str::FromStr;

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use super::{Codec, CodecError, Payload};

/// Algorithm names [`JwtCodec`] can sign and verify with.
pub const SUPPORTED_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// JSON Web Token codec using a shared secret.
///
/// Only the signature and algorithm are verified. Registered claims such as
/// `exp`, `nbf` or `aud` are ordinary payload keys to this codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtCodec;

impl JwtCodec {
    /// Create a codec.
    pub fn new() -> Self {
        Self
    }

    fn parse_algorithm(name: &str) -> Result<Algorithm, CodecError> {
        match name {
            "HS256" | "HS384" | "HS512" => Algorithm::from_str(name)
                .map_err(|_| CodecError::UnsupportedAlgorithm(name.to_string())),
            _ => Err(CodecError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    fn validation(algorithms: Vec<Algorithm>) -> Validation {
        let mut validation = Validation::new(algorithms[0]);
        validation.algorithms = algorithms;
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation
    }

    fn map_decode_error(token: &str, err: JwtError) -> CodecError {
        match err.kind() {
            ErrorKind::InvalidSignature => CodecError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => {
                let alg = decode_header(token)
                    .map(|h| format!("{:?}", h.alg))
                    .unwrap_or_else(|_| "unknown".to_string());
                CodecError::AlgorithmNotAccepted(alg)
            }
            _ => CodecError::Malformed(err.to_string()),
        }
    }
}

impl Codec for JwtCodec {
    fn sign(&self, payload: &Payload, secret: &str, algorithm: &str) -> Result<String, CodecError> {
        let alg = Self::parse_algorithm(algorithm)?;

        encode(
            &Header::new(alg),
            payload,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn verify(&self, token: &str, secret: &str, accepted: &[&str]) -> Result<Payload, CodecError> {
        let algorithms: Vec<Algorithm> = accepted
            .iter()
            .filter_map(|name| Self::parse_algorithm(name).ok())
            .collect();

        if algorithms.is_empty() {
            return Err(CodecError::UnsupportedAlgorithm(accepted.join(",")));
        }

        decode::<Payload>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Self::validation(algorithms),
        )
        .map(|data| data.claims)
        .map_err(|e| Self::map_decode_error(token, e))
    }

    fn supports(&self, algorithm: &str) -> bool {
        SUPPORTED_ALGORITHMS.contains(&algorithm)
    }
}
