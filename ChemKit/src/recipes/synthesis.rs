//! Chemical synthesis recipes

use chemcore::lookup::Lookup;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ChemicalSpec, ChemicalStack, Output, OutputSpec};
use crate::error::Result;

#[derive(Debug, Default, Deserialize)]
struct SynthesisFile {
    #[serde(default)]
    recipe: Vec<SynthesisEntry>,
}

#[derive(Debug, Deserialize)]
struct SynthesisEntry {
    id: String,
    output: OutputSpec,
    amount: u32,
    inputs: Vec<InputEntry>,
}

#[derive(Debug, Deserialize)]
struct InputEntry {
    #[serde(flatten)]
    chemical: ChemicalSpec,
    amount: u32,
}

/// Chemicals in, one item or chemical out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisRecipe {
    pub id: String,
    pub inputs: Vec<ChemicalStack>,
    pub output: Output,
    pub output_amount: u32,
}

/// Synthesis recipes keyed by recipe id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SynthesisCatalog {
    recipes: IndexMap<String, SynthesisRecipe>,
}

impl SynthesisCatalog {
    /// Resolve a synthesis document.
    ///
    /// # Errors
    /// Returns a TOML error if the document is malformed.
    pub fn from_toml(lookup: &Lookup<'_>, source: &str) -> Result<Self> {
        let file: SynthesisFile = toml::from_str(source)?;
        let recipes = file
            .recipe
            .into_iter()
            .filter_map(|entry| resolve_entry(lookup, entry))
            .map(|recipe| (recipe.id.clone(), recipe))
            .collect();
        Ok(Self { recipes })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SynthesisRecipe> {
        self.recipes.get(id)
    }

    /// First recipe producing the given item or chemical identifier.
    #[must_use]
    pub fn find_by_output(&self, output: &str) -> Option<&SynthesisRecipe> {
        self.recipes.values().find(|recipe| recipe.output.id() == output)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SynthesisRecipe> + '_ {
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

fn resolve_entry(lookup: &Lookup<'_>, entry: SynthesisEntry) -> Option<SynthesisRecipe> {
    let mut inputs = Vec::with_capacity(entry.inputs.len());
    for input in &entry.inputs {
        let Some(chemical) = input.chemical.resolve(lookup) else {
            tracing::debug!(
                "Skipping synthesis {}: input {} {} is not registered",
                entry.id,
                input.chemical.form,
                input.chemical.name
            );
            return None;
        };
        inputs.push(ChemicalStack {
            chemical: chemical.clone(),
            amount: input.amount,
        });
    }

    let output = match entry.output.resolve(lookup) {
        Ok(output) => output,
        Err(spec) => {
            tracing::debug!(
                "Skipping synthesis {}: output {} {} is not registered",
                entry.id,
                spec.form,
                spec.name
            );
            return None;
        }
    };

    Some(SynthesisRecipe {
        id: entry.id,
        inputs,
        output,
        output_amount: entry.amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::{SYNTHESIS_RECIPES, test_support};
    use chemcore::registry::StorageForm;

    #[test]
    fn test_water_synthesis() {
        let table = test_support::table();
        let catalog = SynthesisCatalog::from_toml(&table.lookup(), SYNTHESIS_RECIPES).unwrap();

        let water = catalog.get("water_synthesis").unwrap();
        assert_eq!(water.output, Output::Item("minecraft:water_bucket".to_string()));
        assert_eq!(water.output_amount, 1);

        let inputs: Vec<(&str, u32)> = water
            .inputs
            .iter()
            .map(|stack| (stack.chemical.identifier.as_str(), stack.amount))
            .collect();
        assert_eq!(inputs, vec![("element_hydrogen", 2000), ("element_oxygen", 1000)]);
    }

    #[test]
    fn test_carbon_enters_as_infusion() {
        let table = test_support::table();
        let catalog = SynthesisCatalog::from_toml(&table.lookup(), SYNTHESIS_RECIPES).unwrap();
        assert_eq!(catalog.len(), 4);

        let methane = catalog.get("methane_synthesis").unwrap();
        assert_eq!(methane.inputs[0].chemical.identifier, "element_carbon_infusion");
        assert_eq!(methane.inputs[0].chemical.form, StorageForm::Infusion);
        assert_eq!(methane.output.id(), "compound_methane");
        assert!(catalog.get("carbon_dioxide_synthesis").is_some());
    }

    #[test]
    fn test_recipes_with_missing_inputs_are_skipped() {
        let table = test_support::table();
        let source = r#"
            [[recipe]]
            id = "carbon_slurry_synthesis"
            output = { item = "minecraft:coal" }
            amount = 1
            inputs = [{ form = "slurry", name = "carbon", amount = 1000 }]

            [[recipe]]
            id = "iron_ingot_synthesis"
            output = { item = "minecraft:iron_ingot" }
            amount = 1
            inputs = [{ form = "slurry", name = "iron", amount = 1000 }]
        "#;
        let catalog = SynthesisCatalog::from_toml(&table.lookup(), source).unwrap();

        assert!(catalog.get("carbon_slurry_synthesis").is_none());
        assert!(catalog.get("iron_ingot_synthesis").is_some());
    }

    #[test]
    fn test_chemical_output() {
        let table = test_support::table();
        let source = r#"
            [[recipe]]
            id = "ammonia_synthesis"
            output = { form = "gas", name = "ammonia" }
            amount = 1000
            inputs = [
                { form = "gas", name = "nitrogen", amount = 1000 },
                { form = "gas", name = "hydrogen", amount = 3000 },
            ]

            [[recipe]]
            id = "phantom_synthesis"
            output = { form = "gas", name = "phlogiston" }
            amount = 1
            inputs = [{ form = "gas", name = "hydrogen", amount = 1 }]
        "#;
        let catalog = SynthesisCatalog::from_toml(&table.lookup(), source).unwrap();
        assert_eq!(catalog.len(), 1);

        let recipe = catalog.find_by_output("compound_ammonia").unwrap();
        assert_eq!(recipe.id, "ammonia_synthesis");
        assert_eq!(recipe.output.as_chemical().unwrap().name, "ammonia");
    }

    #[test]
    fn test_find_by_item_output() {
        let table = test_support::table();
        let catalog = SynthesisCatalog::from_toml(&table.lookup(), SYNTHESIS_RECIPES).unwrap();
        assert_eq!(
            catalog.find_by_output("minecraft:iron_ingot").unwrap().id,
            "iron_ingot_synthesis"
        );
        assert!(catalog.find_by_output("minecraft:diamond").is_none());
    }
}
