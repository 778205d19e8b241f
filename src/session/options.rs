//! Options for session reads and writes.

use serde::{Deserialize, Serialize};

/// Options for [`TokenSessionStrategy::read`].
///
/// [`TokenSessionStrategy::read`]: super::TokenSessionStrategy::read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Only return the value stored under this key.
    pub key: Option<String>,
}

impl ReadOptions {
    /// Read the whole payload.
    pub fn all() -> Self {
        Self::default()
    }

    /// Read a single key.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }
}

/// Options for [`TokenSessionStrategy::write`].
///
/// [`TokenSessionStrategy::write`]: super::TokenSessionStrategy::write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Key to store the value under. Required.
    pub key: Option<String>,
    /// Previously issued token whose payload is carried forward.
    pub token: Option<String>,
}

impl WriteOptions {
    /// Write under `key`, starting from an empty payload.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            token: None,
        }
    }

    /// Carry forward the payload of an existing token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Like [`with_token`](Self::with_token), accepting an absent token.
    pub fn with_token_opt(mut self, token: Option<impl Into<String>>) -> Self {
        self.token = token.map(Into::into);
        self
    }

    /// The key, if present and non-empty.
    pub(crate) fn required_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_options() {
        assert!(ReadOptions::all().key.is_none());
        assert_eq!(ReadOptions::key("user").key.as_deref(), Some("user"));
    }

    #[test]
    fn test_write_options_builder() {
        let options = WriteOptions::new("cart").with_token("abc.def.ghi");
        assert_eq!(options.key.as_deref(), Some("cart"));
        assert_eq!(options.token.as_deref(), Some("abc.def.ghi"));

        let options = WriteOptions::new("cart").with_token_opt(None::<String>);
        assert!(options.token.is_none());
    }

    #[test]
    fn test_required_key() {
        assert_eq!(WriteOptions::new("a").required_key(), Some("a"));
        assert_eq!(WriteOptions::new("").required_key(), None);
        assert_eq!(WriteOptions::default().required_key(), None);
    }

    #[test]
    fn test_deserialize_host_options() {
        let options: WriteOptions =
            serde_json::from_str(r#"{"key": "user", "token": null}"#).unwrap();
        assert_eq!(options, WriteOptions::new("user"));

        let options: ReadOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ReadOptions::all());
    }
}
