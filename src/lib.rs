//! # jwt-session
//!
//! Stateless session storage backed by signed JSON Web Tokens.
//!
//! Instead of keeping session state on the server, the whole key-value
//! payload of a session lives inside one signed token. The host session
//! layer hands the previous token to [`TokenSessionStrategy::read`] or
//! [`TokenSessionStrategy::write`] and carries the token returned by
//! `write` forward (typically in a cookie).
//!
//! ## Features
//!
//! - **Signed payloads**: HMAC JSON Web Tokens (HS256, HS384, HS512)
//! - **Merge on write**: writing one key keeps every other key
//! - **Tamper tolerant**: invalid tokens read as an empty session
//! - **Pluggable codec**: inject any [`Codec`] implementation
//!
//! ## Quick Start
//!
//! ```
//! use jwt_session::{ReadOptions, StrategyConfig, TokenSessionStrategy, WriteOptions};
//! use serde_json::json;
//!
//! fn main() -> jwt_session::Result<()> {
//!     let strategy = TokenSessionStrategy::new(StrategyConfig::new("my-secret"))?;
//!
//!     let token = strategy.write(json!("alice"), &WriteOptions::new("user"))?;
//!     let options = WriteOptions::new("cart").with_token_opt(token);
//!     let token = strategy.write(json!([1, 2]), &options)?;
//!
//!     let user = strategy.read(token.as_deref(), &ReadOptions::key("user"));
//!     assert_eq!(user, Some(json!("alice")));
//!
//!     // Tampered or missing tokens read as an empty session
//!     assert_eq!(strategy.read(Some("garbage"), &ReadOptions::key("user")), None);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use codec::{Codec, CodecError, JwtCodec, Payload};
pub use config::{Config, ConfigError, StrategyConfig, DEFAULT_ALGORITHM};
pub use error::{JwtSessionError, Result};
pub use session::{ReadOptions, TokenSessionStrategy, WriteOptions};
