//! Session storage module.
//!
//! This module provides the token-backed session strategy a host session
//! layer calls into, along with the options accepted by its `read` and
//! `write` operations.

mod options;
mod strategy;

pub use options::{ReadOptions, WriteOptions};
pub use strategy::TokenSessionStrategy;
