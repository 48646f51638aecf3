//! Recipe catalogs built from the mapping tables
//!
//! Recipes are bundled TOML files that name chemicals by storage form and
//! substance (`{ form = "gas", name = "hydrogen" }`). Building a
//! [`RecipeBook`] resolves every name against the tables. A recipe that
//! refers to a chemical the tables do not contain is skipped, so the book
//! only ever holds recipes that can actually be registered.

mod conversion;
mod decomposition;
mod synthesis;

pub use conversion::{ConversionTable, StateConversion};
pub use decomposition::{DecompositionCatalog, DecompositionRecipe, WeightedOutput};
pub use synthesis::{SynthesisCatalog, SynthesisRecipe};

use chemcore::lookup::Lookup;
use chemcore::registry::{ChemicalReference, RegistryMappingTable, StorageForm};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// Bundled recipe TOML files
const CONVERSION_RECIPES: &str = include_str!("data/conversion.toml");
const SYNTHESIS_RECIPES: &str = include_str!("data/synthesis.toml");
const DECOMPOSITION_RECIPES: &str = include_str!("data/decomposition.toml");

/// What a recipe produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// A plain item id such as `minecraft:water_bucket`.
    Item(String),
    Chemical(ChemicalReference),
}

impl Output {
    /// The item id or chemical identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Output::Item(item) => item,
            Output::Chemical(reference) => &reference.identifier,
        }
    }

    #[must_use]
    pub fn as_chemical(&self) -> Option<&ChemicalReference> {
        match self {
            Output::Item(_) => None,
            Output::Chemical(reference) => Some(reference),
        }
    }
}

/// An amount of a registered chemical, in millibuckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChemicalStack {
    pub chemical: ChemicalReference,
    pub amount: u32,
}

/// A chemical named in a recipe file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ChemicalSpec {
    form: StorageForm,
    name: String,
}

impl ChemicalSpec {
    fn resolve<'a>(&self, lookup: &Lookup<'a>) -> Option<&'a ChemicalReference> {
        match self.form {
            StorageForm::Gas => lookup.gas_form_of(&self.name),
            StorageForm::Slurry => lookup.slurry_form_of(&self.name),
            StorageForm::Infusion => lookup.infusion_form_of(&self.name),
        }
    }
}

/// Recipe output as written in a recipe file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OutputSpec {
    Item { item: String },
    Chemical(ChemicalSpec),
}

impl OutputSpec {
    fn resolve(&self, lookup: &Lookup<'_>) -> std::result::Result<Output, &ChemicalSpec> {
        match self {
            OutputSpec::Item { item } => Ok(Output::Item(item.clone())),
            OutputSpec::Chemical(spec) => spec
                .resolve(lookup)
                .map(|reference| Output::Chemical(reference.clone()))
                .ok_or(spec),
        }
    }
}

/// All recipe catalogs for one set of tables.
#[derive(Debug, Clone)]
pub struct RecipeBook {
    pub conversions: ConversionTable,
    pub synthesis: SynthesisCatalog,
    pub decomposition: DecompositionCatalog,
}

impl RecipeBook {
    /// Build the book from the bundled recipe files.
    ///
    /// # Errors
    /// Returns a TOML error if a bundled file fails to parse.
    pub fn bundled(table: &RegistryMappingTable) -> Result<Self> {
        Self::from_sources(
            table,
            CONVERSION_RECIPES,
            SYNTHESIS_RECIPES,
            DECOMPOSITION_RECIPES,
        )
    }

    /// Build the book from recipe documents.
    ///
    /// # Errors
    /// Returns a TOML error if a document fails to parse.
    pub fn from_sources(
        table: &RegistryMappingTable,
        conversion: &str,
        synthesis: &str,
        decomposition: &str,
    ) -> Result<Self> {
        let lookup = table.lookup();
        let book = Self {
            conversions: ConversionTable::from_toml(table, conversion)?,
            synthesis: SynthesisCatalog::from_toml(&lookup, synthesis)?,
            decomposition: DecompositionCatalog::from_toml(&lookup, decomposition)?,
        };

        tracing::info!(
            "Recipe book built: {} conversions, {} synthesis, {} decomposition",
            book.conversions.len(),
            book.synthesis.len(),
            book.decomposition.len()
        );
        Ok(book)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chemcore::descriptor::{ChemicalDescriptor, MatterState, MetalClass};
    use chemcore::registry::RegistryMappingTable;

    /// Tables shaped like the real catalog: carbon is a solid non-metal and
    /// so is an infusion.
    pub fn table() -> RegistryMappingTable {
        RegistryMappingTable::build(&[
            ChemicalDescriptor::element(
                "hydrogen",
                MatterState::Gas,
                MetalClass::NonMetal,
                "ffffff",
            ),
            ChemicalDescriptor::element("oxygen", MatterState::Gas, MetalClass::NonMetal, "d2e7f5"),
            ChemicalDescriptor::element(
                "nitrogen",
                MatterState::Gas,
                MetalClass::NonMetal,
                "8fa5d8",
            ),
            ChemicalDescriptor::element(
                "carbon",
                MatterState::Solid,
                MetalClass::NonMetal,
                "262626",
            ),
            ChemicalDescriptor::element("iron", MatterState::Solid, MetalClass::Metal, "d8af93"),
            ChemicalDescriptor::element("copper", MatterState::Solid, MetalClass::Metal, "e39a6b"),
            ChemicalDescriptor::element("gold", MatterState::Solid, MetalClass::Metal, "fdf55f"),
            ChemicalDescriptor::compound("water_vapor", MatterState::Gas, "d8e4f0"),
            ChemicalDescriptor::compound("carbon_dioxide", MatterState::Gas, "c5c5c5"),
            ChemicalDescriptor::compound("methane", MatterState::Gas, "c0c0c0"),
            ChemicalDescriptor::compound("ammonia", MatterState::Gas, "c0d8f0"),
        ])
        .unwrap()
    }
}
