//! Item decomposition recipes

use chemcore::lookup::Lookup;
use chemcore::registry::ChemicalReference;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ChemicalSpec;
use crate::error::Result;

fn default_probability() -> f64 {
    1.0
}

#[derive(Debug, Default, Deserialize)]
struct DecompositionFile {
    #[serde(default)]
    recipe: Vec<DecompositionEntry>,
}

#[derive(Debug, Deserialize)]
struct DecompositionEntry {
    input: String,
    outputs: Vec<OutputEntry>,
}

#[derive(Debug, Deserialize)]
struct OutputEntry {
    #[serde(flatten)]
    chemical: ChemicalSpec,
    amount: u32,
    #[serde(default = "default_probability")]
    probability: f64,
}

/// A chemical output that is produced with some probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedOutput {
    pub chemical: ChemicalReference,
    pub amount: u32,
    /// Chance in `0.0..=1.0`.
    pub probability: f64,
}

/// One item broken down into chemicals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecompositionRecipe {
    pub input_item: String,
    pub outputs: Vec<WeightedOutput>,
}

/// Decomposition recipes keyed by input item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecompositionCatalog {
    recipes: IndexMap<String, DecompositionRecipe>,
}

impl DecompositionCatalog {
    /// Resolve a decomposition document.
    ///
    /// # Errors
    /// Returns a TOML error if the document is malformed.
    pub fn from_toml(lookup: &Lookup<'_>, source: &str) -> Result<Self> {
        let file: DecompositionFile = toml::from_str(source)?;
        let recipes = file
            .recipe
            .into_iter()
            .filter_map(|entry| resolve_entry(lookup, entry))
            .map(|recipe| (recipe.input_item.clone(), recipe))
            .collect();
        Ok(Self { recipes })
    }

    /// Recipe for an input item id.
    #[must_use]
    pub fn get(&self, input_item: &str) -> Option<&DecompositionRecipe> {
        self.recipes.get(input_item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecompositionRecipe> + '_ {
        self.recipes.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn resolve_entry(lookup: &Lookup<'_>, entry: DecompositionEntry) -> Option<DecompositionRecipe> {
    let mut outputs = Vec::with_capacity(entry.outputs.len());
    for output in &entry.outputs {
        if !(0.0..=1.0).contains(&output.probability) {
            tracing::warn!(
                "Skipping decomposition of {}: probability {} for {} is out of range",
                entry.input,
                output.probability,
                output.chemical.name
            );
            return None;
        }
        let Some(chemical) = output.chemical.resolve(lookup) else {
            tracing::debug!(
                "Skipping decomposition of {}: output {} {} is not registered",
                entry.input,
                output.chemical.form,
                output.chemical.name
            );
            return None;
        };
        outputs.push(WeightedOutput {
            chemical: chemical.clone(),
            amount: output.amount,
            probability: output.probability,
        });
    }

    Some(DecompositionRecipe {
        input_item: entry.input,
        outputs,
    })
}
