//! JSON export of the mapping tables
//!
//! The export is an ordered document with one array per table, meant for
//! data-pack and translation generators that do not link against the crate.

use std::fs;
use std::path::Path;

use chemcore::color::format_argb;
use chemcore::descriptor::Category;
use chemcore::registry::{
    ChemicalReference, RegistryMappingTable, RegistryStats, SlurryStage, StorageForm,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::providers::ProviderMap;

/// One exported chemical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub name: String,
    pub identifier: String,
    /// Namespaced id recipes should reference. Gases and infusions may
    /// belong to another mod.
    pub id: String,
    /// `#AARRGGBB`
    pub color: String,
    pub hazardous: bool,
    /// Slurry stage ids; may belong to another mod.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean: Option<String>,
}

impl ExportEntry {
    fn new(reference: &ChemicalReference, providers: &ProviderMap) -> Self {
        Self {
            name: reference.name.clone(),
            identifier: reference.identifier.clone(),
            id: providers.chemical_id(reference),
            color: format_argb(reference.color_argb),
            hazardous: reference.hazardous,
            dirty: providers.slurry_stage_id(reference, SlurryStage::Dirty),
            clean: providers.slurry_stage_id(reference, SlurryStage::Clean),
        }
    }
}

/// The whole export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub namespace: String,
    pub generator: String,
    pub stats: RegistryStats,
    /// Keyed `element_gas`, `element_slurry`, ... in table order.
    pub tables: IndexMap<String, Vec<ExportEntry>>,
}

impl ExportDocument {
    #[must_use]
    pub fn new(table: &RegistryMappingTable, providers: &ProviderMap) -> Self {
        let mut tables = IndexMap::new();
        for category in Category::ALL {
            for form in StorageForm::ALL {
                let entries = table
                    .iter(category, form)
                    .map(|reference| ExportEntry::new(reference, providers))
                    .collect();
                tables.insert(format!("{category}_{form}"), entries);
            }
        }

        Self {
            namespace: providers.namespace().to_string(),
            generator: format!("chemkit {}", env!("CARGO_PKG_VERSION")),
            stats: table.stats().clone(),
            tables,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns a JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to a file, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        tracing::info!(
            "Exported {} chemicals to {}",
            self.stats.total(),
            path.display()
        );
        Ok(())
    }
}
