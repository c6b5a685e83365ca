//! Configuration for the `sitelen` tools that extends the base `Config` from
//! core.
//!
//! This configuration includes:
//! - All input-field options from `sitelen_core::Config` (flattened via serde)
//! - An optional glyph table file that replaces the built-in table
//!
//! # Example
//!
//! ```rust
//! use libsitelen::SitelenConfig;
//!
//! let config = SitelenConfig::from_toml_str("chord_window_ms = 250").unwrap();
//! assert_eq!(config.base().chord_window_ms, 250);
//! assert!(config.glyph_table.is_none());
//! ```
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sitelen_core::{Config, ConfigError, GlyphRegistry, RegistryError};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SitelenConfig {
    /// Base configuration fields (chord window, space, spans, ...)
    #[serde(flatten)]
    pub base: Config,

    /// TOML or JSON glyph table to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph_table: Option<PathBuf>,
}

impl SitelenConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Convert this config into the base config for `InputController`
    pub fn into_base(self) -> Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut Config {
        &mut self.base
    }

    /// The registry this config selects: the configured table file, or the
    /// shared built-in table when none is set.
    pub fn load_registry(&self) -> Result<Arc<GlyphRegistry>, RegistryError> {
        match &self.glyph_table {
            Some(path) => Ok(Arc::new(GlyphRegistry::load_table(path)?)),
            None => {
                debug!("using built-in glyph table");
                Ok(crate::default_registry())
            }
        }
    }
}
