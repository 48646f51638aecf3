//! Building and querying the mapping tables

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::classify::classify;
use crate::color::{ColorCodec, format_argb};
use crate::descriptor::{Category, ChemicalDescriptor};
use crate::error::{Error, Result};
use crate::ident::{primary_id, slurry_pair};

use super::types::{ChemicalReference, RegistryStats, StorageForm};

type Table = IndexMap<String, ChemicalReference>;

/// Six name-keyed tables, one per (category, storage form).
///
/// Tables keep catalog order. Once built the value is never mutated, so it
/// can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryMappingTable {
    element_gases: Table,
    element_slurries: Table,
    element_infusions: Table,
    compound_gases: Table,
    compound_slurries: Table,
    compound_infusions: Table,
    #[serde(skip)]
    stats: RegistryStats,
}

impl RegistryMappingTable {
    /// Build tables from a catalog using the built-in color overrides.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateDescriptor`] if a name repeats within a
    /// category.
    pub fn build(descriptors: &[ChemicalDescriptor]) -> Result<Self> {
        Self::build_with(descriptors, &ColorCodec::default())
    }

    /// Build tables from a catalog with a custom color codec.
    ///
    /// Descriptors are processed in order. Unclassifiable descriptors are
    /// skipped and malformed colors fall back to gray; neither stops the
    /// build.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateDescriptor`] if a name repeats within a
    /// category, or [`Error::DuplicateReference`] if a table slot is filled
    /// twice.
    pub fn build_with(descriptors: &[ChemicalDescriptor], codec: &ColorCodec) -> Result<Self> {
        let mut table = Self::default();
        let mut seen: HashSet<(Category, &str)> = HashSet::with_capacity(descriptors.len());

        for descriptor in descriptors {
            if !seen.insert((descriptor.category, descriptor.name.as_str())) {
                return Err(Error::DuplicateDescriptor {
                    category: descriptor.category,
                    name: descriptor.name.clone(),
                });
            }

            let classifications = classify(descriptor);
            if classifications.is_empty() {
                tracing::debug!(
                    "Skipping {} {}: no storage form for state {}",
                    descriptor.category,
                    descriptor.name,
                    descriptor.matter_state
                );
                table.stats.skipped += 1;
                continue;
            }

            let (color_argb, parsed) = codec.resolve(&descriptor.name, &descriptor.color);
            if !parsed {
                tracing::warn!(
                    "Invalid color {:?} for {} {}, using {}",
                    descriptor.color,
                    descriptor.category,
                    descriptor.name,
                    format_argb(color_argb)
                );
            }

            for classification in classifications {
                let form = classification.form;
                let reference = ChemicalReference {
                    identifier: primary_id(descriptor.category, &descriptor.name, form),
                    color_argb,
                    hazardous: classification.hazardous,
                    name: descriptor.name.clone(),
                    category: descriptor.category,
                    form,
                    slurry: (form == StorageForm::Slurry)
                        .then(|| slurry_pair(descriptor.category, &descriptor.name)),
                };
                table.insert(reference)?;
                if !parsed {
                    table.stats.fallback_colors += 1;
                }
            }
        }

        let stats = &table.stats;
        tracing::info!(
            "Built registry tables: {} gases, {} slurries, {} infusions ({} skipped, {} fallback)",
            stats.element_gases + stats.compound_gases,
            stats.element_slurries + stats.compound_slurries,
            stats.element_infusions + stats.compound_infusions,
            stats.skipped,
            stats.fallback_colors
        );

        Ok(table)
    }

    fn insert(&mut self, reference: ChemicalReference) -> Result<()> {
        let (category, form) = (reference.category, reference.form);
        let slot = self.table_mut(category, form);
        if slot.contains_key(&reference.name) {
            return Err(Error::DuplicateReference {
                category,
                form,
                name: reference.name,
            });
        }
        slot.insert(reference.name.clone(), reference);
        *self.stats.count_mut(category, form) += 1;
        Ok(())
    }

    fn table(&self, category: Category, form: StorageForm) -> &Table {
        match (category, form) {
            (Category::Element, StorageForm::Gas) => &self.element_gases,
            (Category::Element, StorageForm::Slurry) => &self.element_slurries,
            (Category::Element, StorageForm::Infusion) => &self.element_infusions,
            (Category::Compound, StorageForm::Gas) => &self.compound_gases,
            (Category::Compound, StorageForm::Slurry) => &self.compound_slurries,
            (Category::Compound, StorageForm::Infusion) => &self.compound_infusions,
        }
    }

    fn table_mut(&mut self, category: Category, form: StorageForm) -> &mut Table {
        match (category, form) {
            (Category::Element, StorageForm::Gas) => &mut self.element_gases,
            (Category::Element, StorageForm::Slurry) => &mut self.element_slurries,
            (Category::Element, StorageForm::Infusion) => &mut self.element_infusions,
            (Category::Compound, StorageForm::Gas) => &mut self.compound_gases,
            (Category::Compound, StorageForm::Slurry) => &mut self.compound_slurries,
            (Category::Compound, StorageForm::Infusion) => &mut self.compound_infusions,
        }
    }

    /// Look up a reference by substance name.
    #[must_use]
    pub fn get(
        &self,
        category: Category,
        form: StorageForm,
        name: &str,
    ) -> Option<&ChemicalReference> {
        self.table(category, form).get(name)
    }

    #[must_use]
    pub fn has(&self, category: Category, form: StorageForm, name: &str) -> bool {
        self.table(category, form).contains_key(name)
    }

    /// Iterate one table in catalog order.
    pub fn iter(
        &self,
        category: Category,
        form: StorageForm,
    ) -> impl Iterator<Item = &ChemicalReference> + '_ {
        self.table(category, form).values()
    }

    /// Iterate every reference, elements before compounds, gases before
    /// slurries before infusions.
    pub fn references(&self) -> impl Iterator<Item = &ChemicalReference> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            StorageForm::ALL
                .into_iter()
                .flat_map(move |form| self.iter(category, form))
        })
    }

    /// Find the reference that owns a registry identifier, including slurry
    /// stage identifiers.
    #[must_use]
    pub fn find_identifier(&self, identifier: &str) -> Option<&ChemicalReference> {
        self.references().find(|reference| {
            reference.identifier == identifier
                || reference
                    .slurry
                    .as_ref()
                    .is_some_and(|pair| pair.dirty == identifier || pair.clean == identifier)
        })
    }

    /// Number of entries in one table.
    #[must_use]
    pub fn table_len(&self, category: Category, form: StorageForm) -> usize {
        self.table(category, form).len()
    }

    /// Total number of references across all six tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.total()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts gathered while building.
    #[must_use]
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }
}
