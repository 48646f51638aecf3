//! External chemical providers
//!
//! Mekanism already registers some chemicals (hydrogen, oxygen, brine, ...).
//! Recipes should use those rather than our duplicates, so every chemical id
//! handed to a recipe goes through a [`ProviderMap`] first.
//!
//! Providers are keyed by storage form. Mekanism's `gold` infusion type is
//! not a gold slurry, so a slurry only ever resolves through the slurry
//! table.

use chemcore::ident::namespaced;
use chemcore::lookup::Lookup;
use chemcore::registry::{ChemicalReference, SlurryPair, SlurryStage, StorageForm};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Gases Mekanism registers itself.
const MEKANISM_GASES: &[&str] = &[
    "hydrogen",
    "oxygen",
    "chlorine",
    "fluorine",
    "sodium",
    "lithium",
    "water_vapor",
    "steam",
    "sulfur_dioxide",
    "sulfur_trioxide",
    "hydrogen_chloride",
    "sulfuric_acid",
    "hydrofluoric_acid",
    // nuclear chain
    "brine",
    "ethene",
    "uranium_oxide",
    "uranium_hexafluoride",
    "plutonium",
    "polonium",
    "antimatter",
    "nuclear_waste",
    "spent_nuclear_waste",
    "fissile_fuel",
];

/// Infusion types Mekanism registers itself.
const MEKANISM_INFUSIONS: &[&str] = &[
    "carbon",
    "redstone",
    "diamond",
    "gold",
    "tin",
    "refined_obsidian",
    "bio",
    "fungi",
];

/// Ores Mekanism already processes into dirty/clean slurries.
const MEKANISM_SLURRIES: &[&str] = &["iron", "gold", "copper", "tin", "lead", "osmium", "uranium"];

/// External ids per storage form, as written in `[providers]`.
///
/// ```toml
/// [providers.gas]
/// hydrogen = "mekanism:hydrogen"
///
/// [providers.slurry]
/// gold = { dirty = "mekanism:dirty_gold", clean = "mekanism:clean_gold" }
///
/// [providers.infusion]
/// carbon = "mekanism:carbon"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTable {
    #[serde(default)]
    pub gas: IndexMap<String, String>,
    /// Slurries have no single id; recipes reference a stage.
    #[serde(default)]
    pub slurry: IndexMap<String, SlurryPair>,
    #[serde(default)]
    pub infusion: IndexMap<String, String>,
}

impl ProviderTable {
    /// The Mekanism table.
    #[must_use]
    pub fn builtin() -> Self {
        let slurry = MEKANISM_SLURRIES
            .iter()
            .map(|name| {
                let pair = SlurryPair {
                    dirty: namespaced("mekanism", &format!("dirty_{name}")),
                    clean: namespaced("mekanism", &format!("clean_{name}")),
                };
                ((*name).to_string(), pair)
            })
            .collect();

        Self {
            gas: mekanism_ids(MEKANISM_GASES),
            slurry,
            infusion: mekanism_ids(MEKANISM_INFUSIONS),
        }
    }

    /// Total number of entries across all forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gas.len() + self.slurry.len() + self.infusion.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn mekanism_ids(names: &[&str]) -> IndexMap<String, String> {
    names
        .iter()
        .map(|name| ((*name).to_string(), namespaced("mekanism", name)))
        .collect()
}

fn lowercase_keys<V: Clone>(map: &IndexMap<String, V>) -> IndexMap<String, V> {
    map.iter()
        .map(|(name, value)| (name.to_lowercase(), value.clone()))
        .collect()
}

/// Resolves the chemical ids recipes should reference.
#[derive(Debug, Clone)]
pub struct ProviderMap {
    namespace: String,
    external: ProviderTable,
}

impl ProviderMap {
    /// Build a map over our namespace and a table of external ids.
    ///
    /// Names are matched case-insensitively.
    pub fn new(namespace: impl Into<String>, external: &ProviderTable) -> Self {
        Self {
            namespace: namespace.into(),
            external: ProviderTable {
                gas: lowercase_keys(&external.gas),
                slurry: lowercase_keys(&external.slurry),
                infusion: lowercase_keys(&external.infusion),
            },
        }
    }

    /// External id registered for a substance in one form, if any.
    ///
    /// Always `None` for slurries; see [`Self::external_slurry`].
    #[must_use]
    pub fn external_id(&self, form: StorageForm, name: &str) -> Option<&str> {
        let ids = match form {
            StorageForm::Gas => &self.external.gas,
            StorageForm::Infusion => &self.external.infusion,
            StorageForm::Slurry => return None,
        };
        ids.get(&name.to_lowercase()).map(String::as_str)
    }

    /// External slurry stages registered for a substance, if any.
    #[must_use]
    pub fn external_slurry(&self, name: &str) -> Option<&SlurryPair> {
        self.external.slurry.get(&name.to_lowercase())
    }

    /// Fully qualified id for one of our references.
    ///
    /// Gases and infusions prefer an external provider of the same form.
    /// A slurry pair is always ours; its stages may not be, see
    /// [`Self::slurry_stage_id`].
    #[must_use]
    pub fn chemical_id(&self, reference: &ChemicalReference) -> String {
        match self.external_id(reference.form, &reference.name) {
            Some(id) => id.to_string(),
            None => namespaced(&self.namespace, &reference.identifier),
        }
    }

    /// Fully qualified id of one stage of a slurry reference.
    ///
    /// Returns `None` for gases and infusions.
    #[must_use]
    pub fn slurry_stage_id(
        &self,
        reference: &ChemicalReference,
        stage: SlurryStage,
    ) -> Option<String> {
        if reference.form != StorageForm::Slurry {
            return None;
        }
        if let Some(pair) = self.external_slurry(&reference.name) {
            return Some(pair.stage(stage).to_string());
        }
        reference
            .slurry_stage(stage)
            .map(|id| namespaced(&self.namespace, id))
    }

    /// Fully qualified id for a substance name.
    ///
    /// Tries the gas, slurry and infusion forms in that order. Within a form
    /// an external provider wins over our own reference.
    #[must_use]
    pub fn resolve_name(&self, name: &str, lookup: &Lookup<'_>) -> Option<String> {
        let own =
            |reference: &ChemicalReference| namespaced(&self.namespace, &reference.identifier);

        self.external_id(StorageForm::Gas, name)
            .map(str::to_string)
            .or_else(|| lookup.gas_form_of(name).map(own))
            .or_else(|| lookup.slurry_form_of(name).map(own))
            .or_else(|| self.external_id(StorageForm::Infusion, name).map(str::to_string))
            .or_else(|| lookup.infusion_form_of(name).map(own))
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Number of external mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.external.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.external.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemcore::descriptor::{ChemicalDescriptor, MatterState, MetalClass};
    use chemcore::registry::RegistryMappingTable;
    use pretty_assertions::assert_eq;

    fn table() -> RegistryMappingTable {
        RegistryMappingTable::build(&[
            ChemicalDescriptor::element(
                "hydrogen",
                MatterState::Gas,
                MetalClass::NonMetal,
                "ffffff",
            ),
            ChemicalDescriptor::element("helium", MatterState::Gas, MetalClass::NonMetal, "f0e68c"),
            ChemicalDescriptor::element("iron", MatterState::Solid, MetalClass::Metal, "d8af93"),
            ChemicalDescriptor::element("gold", MatterState::Solid, MetalClass::Metal, "fdf55f"),
            ChemicalDescriptor::element("sodium", MatterState::Solid, MetalClass::Metal, "c8c8c8"),
            ChemicalDescriptor::element("zinc", MatterState::Solid, MetalClass::Metal, "a5b5c5"),
            ChemicalDescriptor::element(
                "carbon",
                MatterState::Solid,
                MetalClass::NonMetal,
                "262626",
            ),
            ChemicalDescriptor::compound("methane", MatterState::Gas, "c0c0c0"),
        ])
        .unwrap()
    }

    fn mekanism() -> ProviderMap {
        ProviderMap::new("chemlibmekanized", &ProviderTable::builtin())
    }

    #[test]
    fn test_builtin_providers() {
        let providers = ProviderTable::builtin();
        assert_eq!(providers.gas.get("brine").unwrap(), "mekanism:brine");
        assert_eq!(providers.infusion.get("gold").unwrap(), "mekanism:gold");
        assert_eq!(providers.slurry.get("osmium").unwrap().clean, "mekanism:clean_osmium");
        assert!(!providers.gas.contains_key("helium"));
        assert!(!providers.gas.contains_key("gold"));
    }

    #[test]
    fn test_prefers_external_id_of_same_form() {
        let table = table();
        let map = mekanism();

        let hydrogen = table.lookup().gas_form_of("hydrogen").unwrap();
        assert_eq!(map.chemical_id(hydrogen), "mekanism:hydrogen");

        let helium = table.lookup().gas_form_of("helium").unwrap();
        assert_eq!(map.chemical_id(helium), "chemlibmekanized:element_helium");

        let carbon = table.lookup().infusion_form_of("carbon").unwrap();
        assert_eq!(map.chemical_id(carbon), "mekanism:carbon");
    }

    #[test]
    fn test_slurry_never_takes_other_form_id() {
        let table = table();
        let lookup = table.lookup();
        let map = mekanism();

        // Mekanism has gold as an infusion and sodium as a gas
        let gold = lookup.slurry_form_of("gold").unwrap();
        assert_eq!(map.chemical_id(gold), "chemlibmekanized:element_gold_slurry");
        let infusion = map.external_id(StorageForm::Infusion, "gold");
        assert_ne!(Some(map.chemical_id(gold).as_str()), infusion);

        let sodium = lookup.slurry_form_of("sodium").unwrap();
        assert_eq!(map.chemical_id(sodium), "chemlibmekanized:element_sodium_slurry");
        assert_eq!(
            map.slurry_stage_id(sodium, SlurryStage::Dirty).as_deref(),
            Some("chemlibmekanized:dirty_sodium")
        );
        assert_eq!(
            map.resolve_name("gold", &lookup).unwrap(),
            "chemlibmekanized:element_gold_slurry"
        );
    }

    #[test]
    fn test_slurry_stages_prefer_external_pair() {
        let table = table();
        let map = mekanism();

        let gold = table.lookup().slurry_form_of("gold").unwrap();
        assert_eq!(
            map.slurry_stage_id(gold, SlurryStage::Dirty).as_deref(),
            Some("mekanism:dirty_gold")
        );
        assert_eq!(
            map.slurry_stage_id(gold, SlurryStage::Clean).as_deref(),
            Some("mekanism:clean_gold")
        );

        let zinc = table.lookup().slurry_form_of("zinc").unwrap();
        assert_eq!(
            map.slurry_stage_id(zinc, SlurryStage::Clean).as_deref(),
            Some("chemlibmekanized:clean_zinc")
        );

        let hydrogen = table.lookup().gas_form_of("hydrogen").unwrap();
        assert_eq!(map.slurry_stage_id(hydrogen, SlurryStage::Dirty), None);
    }

    #[test]
    fn test_resolve_name() {
        let table = table();
        let lookup = table.lookup();
        let map = mekanism();

        assert_eq!(map.resolve_name("Hydrogen", &lookup).unwrap(), "mekanism:hydrogen");
        assert_eq!(map.resolve_name("brine", &lookup).unwrap(), "mekanism:brine");
        assert_eq!(
            map.resolve_name("methane", &lookup).unwrap(),
            "chemlibmekanized:compound_methane"
        );
        assert_eq!(
            map.resolve_name("iron", &lookup).unwrap(),
            "chemlibmekanized:element_iron_slurry"
        );
        assert_eq!(map.resolve_name("carbon", &lookup).unwrap(), "mekanism:carbon");
        assert_eq!(map.resolve_name("unobtainium", &lookup), None);
    }

    #[test]
    fn test_empty_provider_table() {
        let map = ProviderMap::new("mypack", &ProviderTable::default());
        assert!(map.is_empty());
        let table = table();
        let hydrogen = table.lookup().gas_form_of("hydrogen").unwrap();
        assert_eq!(map.chemical_id(hydrogen), "mypack:element_hydrogen");
    }
}
