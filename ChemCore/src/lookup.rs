//! Name-based conversion lookups
//!
//! Recipe builders ask "which chemical does `hydrogen` become?" without
//! caring whether it is an element or a compound. Gas and infusion lookups
//! check elements first, then compounds. Slurry lookups only consult the
//! element table; compound slurries are not used by any processing chain.

use crate::descriptor::Category;
use crate::registry::{ChemicalReference, RegistryMappingTable, SlurryStage, StorageForm};

/// Read-only query view over a [`RegistryMappingTable`].
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    table: &'a RegistryMappingTable,
}

impl<'a> Lookup<'a> {
    #[must_use]
    pub fn new(table: &'a RegistryMappingTable) -> Self {
        Self { table }
    }

    /// Gas form of a substance: element gas, else compound gas.
    #[must_use]
    pub fn gas_form_of(&self, name: &str) -> Option<&'a ChemicalReference> {
        self.table
            .get(Category::Element, StorageForm::Gas, name)
            .or_else(|| self.table.get(Category::Compound, StorageForm::Gas, name))
    }

    /// Slurry form of an element.
    #[must_use]
    pub fn slurry_form_of(&self, name: &str) -> Option<&'a ChemicalReference> {
        self.table.get(Category::Element, StorageForm::Slurry, name)
    }

    /// Identifier of an element's dirty slurry.
    #[must_use]
    pub fn dirty_slurry_of(&self, name: &str) -> Option<&'a str> {
        self.slurry_form_of(name)
            .and_then(|reference| reference.slurry_stage(SlurryStage::Dirty))
    }

    /// Identifier of an element's clean slurry.
    #[must_use]
    pub fn clean_slurry_of(&self, name: &str) -> Option<&'a str> {
        self.slurry_form_of(name)
            .and_then(|reference| reference.slurry_stage(SlurryStage::Clean))
    }

    /// Infusion form of a substance: element infusion, else compound infusion.
    #[must_use]
    pub fn infusion_form_of(&self, name: &str) -> Option<&'a ChemicalReference> {
        self.table
            .get(Category::Element, StorageForm::Infusion, name)
            .or_else(|| self.table.get(Category::Compound, StorageForm::Infusion, name))
    }
}

impl RegistryMappingTable {
    /// Borrow a [`Lookup`] over this table.
    #[must_use]
    pub fn lookup(&self) -> Lookup<'_> {
        Lookup::new(self)
    }
}
