//! Shared handle for hot-reloading the mapping tables

use std::sync::{Arc, RwLock};

use crate::color::ColorCodec;
use crate::descriptor::ChemicalDescriptor;
use crate::error::{Error, Result};

use super::table::RegistryMappingTable;

/// A mapping table that can be replaced while readers hold snapshots.
///
/// Readers take an `Arc` snapshot and keep using it for as long as they
/// like. A rebuild constructs the new table without holding the lock and
/// only swaps it in if the build succeeded.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<Arc<RegistryMappingTable>>,
}

impl SharedRegistry {
    #[must_use]
    pub fn new(table: RegistryMappingTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Build the initial table from a catalog.
    ///
    /// # Errors
    /// Returns any error from [`RegistryMappingTable::build_with`].
    pub fn build(descriptors: &[ChemicalDescriptor], codec: &ColorCodec) -> Result<Self> {
        RegistryMappingTable::build_with(descriptors, codec).map(Self::new)
    }

    /// The table currently published.
    ///
    /// # Errors
    /// Returns [`Error::LockPoisoned`] if a writer panicked while swapping.
    pub fn snapshot(&self) -> Result<Arc<RegistryMappingTable>> {
        self.current
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| Error::LockPoisoned)
    }

    /// Rebuild from a new catalog and publish the result.
    ///
    /// On error the previously published table stays live.
    ///
    /// # Errors
    /// Returns the build error, or [`Error::LockPoisoned`].
    pub fn rebuild(
        &self,
        descriptors: &[ChemicalDescriptor],
        codec: &ColorCodec,
    ) -> Result<Arc<RegistryMappingTable>> {
        let table = match RegistryMappingTable::build_with(descriptors, codec) {
            Ok(table) => Arc::new(table),
            Err(e) => {
                tracing::warn!("Registry rebuild failed, keeping previous tables: {}", e);
                return Err(e);
            }
        };

        let mut guard = self.current.write().map_err(|_| Error::LockPoisoned)?;
        *guard = Arc::clone(&table);
        drop(guard);

        tracing::info!("Registry tables swapped: {} references", table.len());
        Ok(table)
    }
}
