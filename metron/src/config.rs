//! Registry configuration file support.
//!
//! This module builds a [`UnitRegistry`] from a TOML configuration:
//!
//! ```toml
//! [registry]
//! include_standard = true
//!
//! [aliases]
//! metre = "m"
//! litre = "l"
//! ```
//!
//! Both sections are optional. Without `[registry]` the standard catalog is included; aliases are
//! extra case-insensitive names for units the registry already knows.

use metron_core::units::register_standard;
use metron_core::UnitRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid registry configuration: {0}")]
    Registry(#[from] metron_core::Error),
}

/// Registry configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub registry: RegistrySettings,
    /// Alias → unit symbol.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Registry content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    #[serde(default = "default_include_standard")]
    pub include_standard: bool,
}

fn default_include_standard() -> bool {
    true
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            include_standard: default_include_standard(),
        }
    }
}

impl FromStr for RegistryConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

impl RegistryConfig {
    /// Load registry configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RegistryConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        content.parse()
    }

    /// Build the unit registry this configuration describes.
    ///
    /// ```rust
    /// use metron::config::RegistryConfig;
    /// use metron::volume::LITER;
    ///
    /// let config: RegistryConfig = "[aliases]\nlitre = \"l\"".parse().unwrap();
    /// let registry = config.build_registry().unwrap();
    /// assert_eq!(registry.resolve("Litre").unwrap(), LITER);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Registry`] if an alias points to an unknown symbol.
    pub fn build_registry(&self) -> Result<UnitRegistry, ConfigError> {
        let mut builder = UnitRegistry::builder();
        if self.registry.include_standard {
            builder = register_standard(builder);
        }
        for (alias, symbol) in &self.aliases {
            builder = builder.alias(alias.as_str(), symbol.as_str());
        }

        let registry = builder.build()?;
        log::info!(
            "Built unit registry from configuration: {} units, {} aliases",
            registry.len(),
            self.aliases.len()
        );
        Ok(registry)
    }
}
