//! Toolkit configuration (chemkit.toml)
//!
//! ```toml
//! namespace = "chemlibmekanized"
//!
//! [catalog]
//! dir = "data/chemlib"
//!
//! [colors]
//! builtin_overrides = true
//!
//! [colors.overrides]
//! neodymium = "c8d2dc"
//!
//! [providers.gas]
//! hydrogen = "mekanism:hydrogen"
//!
//! [providers.slurry]
//! gold = { dirty = "mekanism:dirty_gold", clean = "mekanism:clean_gold" }
//! ```
//!
//! Every section is optional. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use chemcore::color::{ColorCodec, parse_color};
use chemcore::ident::DEFAULT_NAMESPACE;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::providers::ProviderTable;

/// Config file name inside the user config directory.
pub const CONFIG_FILE: &str = "chemkit.toml";

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_true() -> bool {
    true
}

/// The full configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemKitConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub colors: ColorSettings,
    /// External chemical ids per storage form. Defaults to Mekanism's.
    #[serde(default = "ProviderTable::builtin")]
    pub providers: ProviderTable,
}

/// Where the `ChemLib` data files live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Color override settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Keep the built-in overrides (promethium).
    #[serde(default = "default_true")]
    pub builtin_overrides: bool,
    /// Substance name to RGB hex.
    #[serde(default)]
    pub overrides: IndexMap<String, String>,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            builtin_overrides: true,
            overrides: IndexMap::new(),
        }
    }
}

impl Default for ChemKitConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            catalog: CatalogSettings::default(),
            colors: ColorSettings::default(),
            providers: ProviderTable::builtin(),
        }
    }
}

impl ChemKitConfig {
    /// Default config file location, `<config dir>/chemkit/chemkit.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chemkit").join(CONFIG_FILE))
    }

    /// Parse a config document.
    ///
    /// # Errors
    /// Returns a TOML error if the document is malformed, or
    /// [`Error::Config`] if the namespace is not a valid resource namespace.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values TOML cannot constrain.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the namespace is empty or uses characters
    /// outside `[a-z0-9_.-]`.
    pub fn validate(&self) -> Result<()> {
        let valid = |c: char| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-')
        };
        if self.namespace.is_empty() || !self.namespace.chars().all(valid) {
            return Err(Error::Config(format!(
                "invalid namespace {:?}: use lowercase letters, digits, '_', '.' or '-'",
                self.namespace
            )));
        }
        Ok(())
    }

    /// Load config from a file. A missing file gives the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from the default location.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Write config to disk, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Color codec with the configured overrides applied.
    ///
    /// Overrides whose hex value does not parse are logged and ignored.
    #[must_use]
    pub fn color_codec(&self) -> ColorCodec {
        let mut codec = if self.colors.builtin_overrides {
            ColorCodec::new()
        } else {
            ColorCodec::without_overrides()
        };

        for (name, hex) in &self.colors.overrides {
            match parse_color(hex) {
                (argb, true) => codec.set_override(name.clone(), argb),
                (_, false) => {
                    tracing::warn!("Ignoring color override for {}: invalid hex {:?}", name, hex);
                }
            }
        }
        codec
    }
}
