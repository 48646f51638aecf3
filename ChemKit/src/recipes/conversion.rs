//! Item <-> chemical state conversions

use chemcore::descriptor::Category;
use chemcore::registry::{ChemicalReference, RegistryMappingTable, StorageForm};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Default, Deserialize)]
struct ConversionFile {
    #[serde(default)]
    element: Vec<ConversionEntry>,
    #[serde(default)]
    compound: Vec<ConversionEntry>,
}

#[derive(Debug, Deserialize)]
struct ConversionEntry {
    name: String,
    #[serde(default)]
    solid: Option<String>,
    #[serde(default)]
    liquid: Option<String>,
    /// Substance whose gas form is used.
    #[serde(default)]
    gas: Option<String>,
    /// Substance whose slurry form is used.
    #[serde(default)]
    slurry: Option<String>,
    /// Substance whose infusion form is used.
    #[serde(default)]
    infusion: Option<String>,
}

/// The item and chemical forms of one substance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateConversion {
    pub name: String,
    pub category: Category,
    pub solid_form: Option<String>,
    pub liquid_form: Option<String>,
    pub gas_form: Option<ChemicalReference>,
    pub slurry_form: Option<ChemicalReference>,
    pub infusion_form: Option<ChemicalReference>,
}

/// Conversions keyed by substance name, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionTable {
    elements: IndexMap<String, StateConversion>,
    compounds: IndexMap<String, StateConversion>,
}

impl ConversionTable {
    /// Resolve a conversion document against the tables.
    ///
    /// # Errors
    /// Returns a TOML error if the document is malformed.
    pub fn from_toml(table: &RegistryMappingTable, source: &str) -> Result<Self> {
        let file: ConversionFile = toml::from_str(source)?;
        let mut conversions = Self::default();

        for (category, entries) in [
            (Category::Element, file.element),
            (Category::Compound, file.compound),
        ] {
            for entry in entries {
                if let Some(conversion) = resolve_entry(table, category, entry) {
                    conversions
                        .by_category_mut(category)
                        .insert(conversion.name.clone(), conversion);
                }
            }
        }

        Ok(conversions)
    }

    fn by_category_mut(&mut self, category: Category) -> &mut IndexMap<String, StateConversion> {
        match category {
            Category::Element => &mut self.elements,
            Category::Compound => &mut self.compounds,
        }
    }

    #[must_use]
    pub fn element(&self, name: &str) -> Option<&StateConversion> {
        self.elements.get(name)
    }

    #[must_use]
    pub fn compound(&self, name: &str) -> Option<&StateConversion> {
        self.compounds.get(name)
    }

    /// Gas form of a substance, element conversions first.
    #[must_use]
    pub fn gas_form(&self, name: &str) -> Option<&ChemicalReference> {
        self.element(name)
            .and_then(|c| c.gas_form.as_ref())
            .or_else(|| self.compound(name).and_then(|c| c.gas_form.as_ref()))
    }

    /// Slurry form of an element.
    #[must_use]
    pub fn slurry_form(&self, name: &str) -> Option<&ChemicalReference> {
        self.element(name).and_then(|c| c.slurry_form.as_ref())
    }

    /// Infusion form of a substance, element conversions first.
    #[must_use]
    pub fn infusion_form(&self, name: &str) -> Option<&ChemicalReference> {
        self.element(name)
            .and_then(|c| c.infusion_form.as_ref())
            .or_else(|| self.compound(name).and_then(|c| c.infusion_form.as_ref()))
    }

    /// All conversions, elements first.
    pub fn iter(&self) -> impl Iterator<Item = &StateConversion> + '_ {
        self.elements.values().chain(self.compounds.values())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len() + self.compounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn resolve_entry(
    table: &RegistryMappingTable,
    category: Category,
    entry: ConversionEntry,
) -> Option<StateConversion> {
    let resolve = |form: StorageForm, target: Option<&String>| match target {
        None => Some(None),
        Some(target) => match table.get(category, form, target) {
            Some(reference) => Some(Some(reference.clone())),
            None => {
                tracing::debug!(
                    "Skipping {} conversion {}: {} {} is not registered",
                    category,
                    entry.name,
                    form,
                    target
                );
                None
            }
        },
    };

    let gas_form = resolve(StorageForm::Gas, entry.gas.as_ref())?;
    let slurry_form = resolve(StorageForm::Slurry, entry.slurry.as_ref())?;
    let infusion_form = resolve(StorageForm::Infusion, entry.infusion.as_ref())?;

    Some(StateConversion {
        name: entry.name,
        category,
        solid_form: entry.solid,
        liquid_form: entry.liquid,
        gas_form,
        slurry_form,
        infusion_form,
    })
}
