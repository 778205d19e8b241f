//! Token-backed session storage strategy.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::{ReadOptions, WriteOptions};
use crate::codec::{Codec, CodecError, JwtCodec, Payload};
use crate::config::{ConfigError, Settings, StrategyConfig};
use crate::error::JwtSessionError;
use crate::Result;

/// Session storage strategy that keeps the whole session inside a signed token.
///
/// The strategy holds no session state. Every `write` returns a fresh token
/// carrying the merged payload, and the host is responsible for handing that
/// token back on the next `read` or `write`. Tokens that fail to decode are
/// treated exactly like an absent token.
#[derive(Debug, Clone)]
pub struct TokenSessionStrategy<C = JwtCodec> {
    settings: Settings,
    codec: C,
}

impl TokenSessionStrategy<JwtCodec> {
    /// Create a strategy backed by [`JwtCodec`].
    ///
    /// Fails with [`JwtSessionError::Configuration`] if the secret is missing
    /// or empty, or the algorithm is not an HMAC algorithm.
    pub fn new(config: StrategyConfig) -> Result<Self> {
        Self::with_codec(config, JwtCodec::new())
    }
}

impl<C: Codec> TokenSessionStrategy<C> {
    /// Create a strategy backed by the given codec.
    pub fn with_codec(config: StrategyConfig, codec: C) -> Result<Self> {
        let settings = config.resolve()?;

        if !codec.supports(&settings.algorithm) {
            return Err(ConfigError::UnsupportedAlgorithm(settings.algorithm).into());
        }

        info!(algorithm = %settings.algorithm, "token session strategy configured");
        Ok(Self { settings, codec })
    }

    /// Configured signing algorithm.
    pub fn algorithm(&self) -> &str {
        self.settings.algorithm()
    }

    /// The codec tokens are signed and verified with.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Read from a token.
    ///
    /// With `options.key` set, returns the value stored under that key, or
    /// `None` if it is absent. Otherwise returns the whole payload as a JSON
    /// object, which is empty for an absent or undecodable token.
    pub fn read(&self, token: Option<&str>, options: &ReadOptions) -> Option<Value> {
        let mut payload = self.read_payload(token);

        match options.key.as_deref() {
            Some(key) if !key.is_empty() => payload.remove(key),
            _ => Some(Value::Object(payload)),
        }
    }

    /// Decode the full payload of a token, or an empty payload.
    pub fn read_payload(&self, token: Option<&str>) -> Payload {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Payload::new();
        };

        match self.decode(token) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(error = %err, "discarding undecodable session token");
                Payload::new()
            }
        }
    }

    /// Read a single key from a token.
    pub fn read_key(&self, token: Option<&str>, key: &str) -> Option<Value> {
        self.read(token, &ReadOptions::key(key))
    }

    /// Store `data` under `options.key` and return the updated token.
    ///
    /// Every other key of `options.token` is carried over unchanged. Writing
    /// `null` removes the key. Returns `Ok(None)` when the merged payload is
    /// empty, in which case no token is encoded.
    pub fn write(&self, data: Value, options: &WriteOptions) -> Result<Option<String>> {
        let key = options.required_key().ok_or(JwtSessionError::MissingKey)?;
        let mut payload = self.read_payload(options.token.as_deref());

        if data.is_null() {
            payload.remove(key);
        } else {
            payload.insert(key.to_string(), data);
        }

        if payload.is_empty() {
            debug!(key, "session payload empty, no token issued");
            return Ok(None);
        }

        let token = self.encode(&payload)?;
        debug!(key, keys = payload.len(), "session token issued");
        Ok(Some(token))
    }

    /// Serialize `data` and [`write`](Self::write) it.
    pub fn write_value<T: Serialize>(
        &self,
        data: &T,
        options: &WriteOptions,
    ) -> Result<Option<String>> {
        self.write(serde_json::to_value(data)?, options)
    }

    fn encode(&self, payload: &Payload) -> std::result::Result<String, CodecError> {
        self.codec
            .sign(payload, &self.settings.secret, &self.settings.algorithm)
    }

    fn decode(&self, token: &str) -> std::result::Result<Payload, CodecError> {
        self.codec.verify(
            token,
            &self.settings.secret,
            &[self.settings.algorithm.as_str()],
        )
    }
}
