//! # Codec Configuration
//!
//! Size limits applied when encoding and decoding, so deployments can tune
//! them without rebuilding. Loaded from TOML with environment overrides:
//!
//! ```toml
//! max_message_size = 65536
//! allow_trailing_bytes = false
//! ```
//!
//! `NETMSG_MAX_MESSAGE_SIZE` overrides `max_message_size` when set.

use anyhow::{bail, Context, Result};
use netmsg_types::MAX_MESSAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`CodecConfig::max_message_size`]
pub const MAX_MESSAGE_SIZE_ENV: &str = "NETMSG_MAX_MESSAGE_SIZE";

/// Default limit on a single message (header + body)
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 1024 * 1024; // 1MB

/// Codec limits and decode policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest message, header included, accepted by encode and decode
    pub max_message_size: usize,

    /// Decode the leading message and ignore anything after it instead of
    /// rejecting the buffer
    pub allow_trailing_bytes: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            allow_trailing_bytes: false,
        }
    }
}

impl CodecConfig {
    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("Failed to parse codec config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read codec config {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid codec config {}", path.display()))
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(MAX_MESSAGE_SIZE_ENV) {
            self.max_message_size = value
                .trim()
                .parse()
                .with_context(|| format!("{} must be a byte count, got {:?}", MAX_MESSAGE_SIZE_ENV, value))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject limits the wire format cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.max_message_size == 0 {
            bail!("max_message_size must be greater than zero");
        }
        if self.max_message_size > MAX_MESSAGE_SIZE {
            bail!(
                "max_message_size {} exceeds the u32 size field limit {}",
                self.max_message_size,
                MAX_MESSAGE_SIZE
            );
        }
        Ok(())
    }
}
