//! Types stored in the mapping tables

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::Category;

/// Storage form a substance is registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageForm {
    Gas,
    /// A dirty/clean pair.
    Slurry,
    Infusion,
}

impl StorageForm {
    /// All forms, in table order.
    pub const ALL: [StorageForm; 3] = [
        StorageForm::Gas,
        StorageForm::Slurry,
        StorageForm::Infusion,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageForm::Gas => "gas",
            StorageForm::Slurry => "slurry",
            StorageForm::Infusion => "infusion",
        }
    }
}

impl fmt::Display for StorageForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refinement stage of a slurry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlurryStage {
    Dirty,
    Clean,
}

impl SlurryStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SlurryStage::Dirty => "dirty",
            SlurryStage::Clean => "clean",
        }
    }
}

/// A concrete registered chemical.
///
/// A slurry is registered as two variants, one per stage, while gases and
/// infusions have a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormVariant {
    Gas,
    /// The dirty/clean pair as a whole.
    SlurryPair,
    Slurry(SlurryStage),
    Infusion,
}

impl FormVariant {
    /// The variant that names a whole table entry.
    #[must_use]
    pub fn primary(form: StorageForm) -> Self {
        match form {
            StorageForm::Gas => FormVariant::Gas,
            StorageForm::Slurry => FormVariant::SlurryPair,
            StorageForm::Infusion => FormVariant::Infusion,
        }
    }
}

/// Identifiers of the two registered slurry variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlurryPair {
    pub dirty: String,
    pub clean: String,
}

impl SlurryPair {
    #[must_use]
    pub fn stage(&self, stage: SlurryStage) -> &str {
        match stage {
            SlurryStage::Dirty => &self.dirty,
            SlurryStage::Clean => &self.clean,
        }
    }
}

/// Output record for one classified substance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChemicalReference {
    /// Registry identifier, without namespace.
    pub identifier: String,
    /// Opaque ARGB tint.
    pub color_argb: u32,
    pub hazardous: bool,
    /// Source substance name.
    pub name: String,
    pub category: Category,
    pub form: StorageForm,
    /// Stage identifiers, present only for slurries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slurry: Option<SlurryPair>,
}

impl ChemicalReference {
    /// Identifier of one slurry stage, if this is a slurry.
    #[must_use]
    pub fn slurry_stage(&self, stage: SlurryStage) -> Option<&str> {
        self.slurry.as_ref().map(|pair| pair.stage(stage))
    }
}

/// Counts gathered while building a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub element_gases: usize,
    pub element_slurries: usize,
    pub element_infusions: usize,
    pub compound_gases: usize,
    pub compound_slurries: usize,
    pub compound_infusions: usize,
    /// Descriptors with no storage form.
    pub skipped: usize,
    /// Entries whose color fell back to gray.
    pub fallback_colors: usize,
}

impl RegistryStats {
    /// Total number of registered references.
    #[must_use]
    pub fn total(&self) -> usize {
        self.element_gases
            + self.element_slurries
            + self.element_infusions
            + self.compound_gases
            + self.compound_slurries
            + self.compound_infusions
    }

    pub(crate) fn count_mut(&mut self, category: Category, form: StorageForm) -> &mut usize {
        match (category, form) {
            (Category::Element, StorageForm::Gas) => &mut self.element_gases,
            (Category::Element, StorageForm::Slurry) => &mut self.element_slurries,
            (Category::Element, StorageForm::Infusion) => &mut self.element_infusions,
            (Category::Compound, StorageForm::Gas) => &mut self.compound_gases,
            (Category::Compound, StorageForm::Slurry) => &mut self.compound_slurries,
            (Category::Compound, StorageForm::Infusion) => &mut self.compound_infusions,
        }
    }
}
