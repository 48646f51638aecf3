//! ChemKit - ChemLib to Mekanism toolkit
//!
//! Loads the `ChemLib` catalog, builds the [`chemcore`] mapping tables under
//! the user's configuration and derives everything downstream generators
//! need from them: recipe catalogs, provider-resolved chemical ids and a
//! JSON export.
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Re-export chemcore
pub use chemcore;

pub mod config;
pub mod error;
pub mod export;
pub mod providers;
pub mod recipes;

#[cfg(feature = "cli")]
pub mod cli;

use chemcore::catalog::Catalog;
use chemcore::registry::{RegistryMappingTable, SharedRegistry};

pub use config::ChemKitConfig;
use config::CONFIG_FILE;
pub use error::{Error, Result};
use export::ExportDocument;
use providers::ProviderMap;
use recipes::RecipeBook;

/// Main toolkit interface
pub struct Toolkit {
    config: ChemKitConfig,
    catalog_dir: Option<PathBuf>,
    registry: SharedRegistry,
}

impl Toolkit {
    /// Load the catalog named by the config and build the tables.
    ///
    /// # Errors
    /// Returns [`Error::CatalogNotConfigured`] if the config has no catalog
    /// directory, or any catalog or build error.
    pub fn new(config: ChemKitConfig) -> Result<Self> {
        let Some(dir) = config.catalog.dir.clone() else {
            let path = ChemKitConfig::default_path().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            return Err(Error::CatalogNotConfigured(path));
        };
        let catalog = Catalog::from_dir(&dir)?;
        let mut toolkit = Self::from_catalog(config, &catalog)?;
        toolkit.catalog_dir = Some(dir);
        Ok(toolkit)
    }

    /// Build the tables from an already loaded catalog.
    ///
    /// # Errors
    /// Returns any table build error.
    pub fn from_catalog(config: ChemKitConfig, catalog: &Catalog) -> Result<Self> {
        let registry = SharedRegistry::build(catalog.descriptors(), &config.color_codec())?;
        Ok(Self {
            config,
            catalog_dir: None,
            registry,
        })
    }

    /// Re-read the catalog directory and swap in fresh tables.
    ///
    /// On failure the current tables stay in place.
    ///
    /// # Errors
    /// Returns [`Error::CatalogNotConfigured`] if the toolkit was built from
    /// an in-memory catalog, or any catalog or build error.
    pub fn reload(&self) -> Result<Arc<RegistryMappingTable>> {
        let dir = self
            .catalog_dir
            .as_deref()
            .ok_or_else(|| Error::CatalogNotConfigured(PathBuf::from(CONFIG_FILE)))?;
        let catalog = Catalog::from_dir(dir)?;
        self.rebuild(&catalog)
    }

    /// Swap in tables built from a new catalog.
    ///
    /// # Errors
    /// Returns any table build error; the current tables stay in place.
    pub fn rebuild(&self, catalog: &Catalog) -> Result<Arc<RegistryMappingTable>> {
        Ok(self
            .registry
            .rebuild(catalog.descriptors(), &self.config.color_codec())?)
    }

    /// Snapshot of the current tables.
    ///
    /// # Errors
    /// Returns an error if the registry lock is poisoned.
    pub fn table(&self) -> Result<Arc<RegistryMappingTable>> {
        Ok(self.registry.snapshot()?)
    }

    #[must_use]
    pub fn config(&self) -> &ChemKitConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog_dir(&self) -> Option<&Path> {
        self.catalog_dir.as_deref()
    }

    #[must_use]
    pub fn providers(&self) -> ProviderMap {
        ProviderMap::new(self.config.namespace.clone(), &self.config.providers)
    }

    /// Recipe catalogs for the current tables.
    ///
    /// # Errors
    /// Returns an error if the tables or the bundled recipes cannot be read.
    pub fn recipes(&self) -> Result<RecipeBook> {
        let table = self.table()?;
        RecipeBook::bundled(&table)
    }

    /// Export document for the current tables.
    ///
    /// # Errors
    /// Returns an error if the registry lock is poisoned.
    pub fn export(&self) -> Result<ExportDocument> {
        let table = self.table()?;
        Ok(ExportDocument::new(&table, &self.providers()))
    }

    /// Write the export document to a file.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<()> {
        self.export()?.write(path.as_ref())
    }
}
