//! Shared utilities, configuration, and error handling for Callboard
//!
//! This crate provides common functionality used across the Callboard application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors and serde helpers

pub mod config;
pub mod error;
pub mod extractors;
pub mod serde_helpers;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
