//! `ChemLib` catalog loading
//!
//! Reads the `elements.json` and `compounds.json` data files shipped with
//! `ChemLib` and turns them into [`ChemicalDescriptor`]s.
//!
//! ```no_run
//! use chemcore::catalog::Catalog;
//! use chemcore::registry::RegistryMappingTable;
//!
//! let catalog = Catalog::from_dir("data/chemlib")?;
//! let table = RegistryMappingTable::build(catalog.descriptors())?;
//! println!("{} chemicals", table.len());
//! # Ok::<(), chemcore::Error>(())
//! ```

use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::descriptor::{
    Category, ChemicalDescriptor, Component, EffectRef, FluidProperties, MatterState, MetalClass,
};
use crate::error::{Error, Result};

/// File name of the element list inside a catalog directory.
pub const ELEMENTS_FILE: &str = "elements.json";
/// File name of the compound list inside a catalog directory.
pub const COMPOUNDS_FILE: &str = "compounds.json";

#[derive(Deserialize)]
struct ElementsFile {
    elements: Vec<RawElement>,
}

#[derive(Deserialize)]
struct CompoundsFile {
    compounds: Vec<RawCompound>,
}

#[derive(Deserialize)]
struct RawElement {
    name: String,
    atomic_number: u32,
    #[serde(default)]
    abbreviation: Option<String>,
    #[serde(default, deserialize_with = "text_from_any")]
    group: Option<String>,
    #[serde(default, deserialize_with = "text_from_any")]
    period: Option<String>,
    matter_state: MatterState,
    #[serde(default)]
    metal_type: MetalClass,
    #[serde(default)]
    artificial: bool,
    color: String,
    #[serde(default)]
    fluid_properties: Option<FluidProperties>,
    #[serde(default)]
    effect: Vec<RawEffect>,
}

#[derive(Deserialize)]
struct RawCompound {
    name: String,
    matter_state: MatterState,
    #[serde(default)]
    has_fluid: bool,
    #[serde(default)]
    description: Option<String>,
    color: String,
    #[serde(default)]
    fluid_properties: Option<FluidProperties>,
    #[serde(default)]
    components: Vec<RawComponent>,
    #[serde(default)]
    effect: Vec<RawEffect>,
}

#[derive(Deserialize)]
struct RawComponent {
    name: String,
    #[serde(default = "default_count")]
    count: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Deserialize)]
struct RawEffect {
    location: String,
    #[serde(deserialize_with = "ticks_from_any")]
    duration: u32,
    #[serde(default)]
    amplifier: u32,
}

/// Catalog values that are sometimes written as strings, sometimes as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Text(String),
    Number(u64),
}

fn ticks_from_any<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<u32, D::Error> {
    match Lenient::deserialize(deserializer)? {
        Lenient::Number(n) => u32::try_from(n).map_err(de::Error::custom),
        Lenient::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn text_from_any<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(Option::<Lenient>::deserialize(deserializer)?.map(|value| match value {
        Lenient::Text(s) => s,
        Lenient::Number(n) => n.to_string(),
    }))
}

impl From<RawEffect> for EffectRef {
    fn from(raw: RawEffect) -> Self {
        EffectRef::new(raw.location, raw.duration, raw.amplifier)
    }
}

impl From<RawElement> for ChemicalDescriptor {
    fn from(raw: RawElement) -> Self {
        let mut descriptor =
            ChemicalDescriptor::element(raw.name, raw.matter_state, raw.metal_type, raw.color);
        descriptor.effects = raw.effect.into_iter().map(EffectRef::from).collect();
        descriptor.atomic_number = Some(raw.atomic_number);
        descriptor.abbreviation = raw.abbreviation;
        descriptor.group = raw.group;
        descriptor.period = raw.period;
        descriptor.artificial = raw.artificial;
        descriptor.fluid_properties = raw.fluid_properties;
        descriptor
    }
}

impl From<RawCompound> for ChemicalDescriptor {
    fn from(raw: RawCompound) -> Self {
        let mut descriptor = ChemicalDescriptor::compound(raw.name, raw.matter_state, raw.color);
        descriptor.effects = raw.effect.into_iter().map(EffectRef::from).collect();
        descriptor.components = raw
            .components
            .into_iter()
            .map(|c| Component {
                name: c.name,
                count: c.count,
            })
            .collect();
        descriptor.description = raw.description.filter(|d| !d.is_empty());
        descriptor.fluid_properties = raw.fluid_properties;
        descriptor
    }
}

/// Parse the contents of `elements.json`.
///
/// # Errors
/// Returns [`Error::Json`] if the document is malformed.
pub fn parse_elements(json: &str) -> Result<Vec<ChemicalDescriptor>> {
    let file: ElementsFile = serde_json::from_str(json)?;
    Ok(file.elements.into_iter().map(ChemicalDescriptor::from).collect())
}

/// Parse the contents of `compounds.json`.
///
/// Compounds flagged `has_fluid` are already served by a vanilla fluid and
/// are left out. Returns the kept descriptors and the names left out.
///
/// # Errors
/// Returns [`Error::Json`] if the document is malformed.
pub fn parse_compounds(json: &str) -> Result<(Vec<ChemicalDescriptor>, Vec<String>)> {
    let file: CompoundsFile = serde_json::from_str(json)?;
    let mut kept = Vec::with_capacity(file.compounds.len());
    let mut vanilla = Vec::new();
    for raw in file.compounds {
        if raw.has_fluid {
            tracing::debug!("Skipping compound {}: served by a vanilla fluid", raw.name);
            vanilla.push(raw.name);
        } else {
            kept.push(ChemicalDescriptor::from(raw));
        }
    }
    Ok((kept, vanilla))
}

/// The loaded descriptor list, elements first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    descriptors: Vec<ChemicalDescriptor>,
    vanilla_fluids: Vec<String>,
}

impl Catalog {
    /// Wrap an already-built descriptor list.
    #[must_use]
    pub fn from_descriptors(descriptors: Vec<ChemicalDescriptor>) -> Self {
        Self {
            descriptors,
            vanilla_fluids: Vec::new(),
        }
    }

    /// Parse both catalog documents.
    ///
    /// # Errors
    /// Returns [`Error::Json`] if either document is malformed.
    pub fn from_json(elements_json: &str, compounds_json: &str) -> Result<Self> {
        let mut descriptors = parse_elements(elements_json)?;
        let (compounds, vanilla_fluids) = parse_compounds(compounds_json)?;
        let element_count = descriptors.len();
        descriptors.extend(compounds);

        tracing::info!(
            "Loaded catalog: {} elements, {} compounds ({} served by vanilla fluids)",
            element_count,
            descriptors.len() - element_count,
            vanilla_fluids.len()
        );

        Ok(Self {
            descriptors,
            vanilla_fluids,
        })
    }

    /// Load `elements.json` and `compounds.json` from a directory.
    ///
    /// # Errors
    /// Returns [`Error::CatalogFileMissing`] if either file is absent, or an
    /// IO or JSON error if reading fails.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        tracing::info!("Loading catalog from {}", dir.display());
        let elements = read_catalog_file(&dir.join(ELEMENTS_FILE))?;
        let compounds = read_catalog_file(&dir.join(COMPOUNDS_FILE))?;
        Self::from_json(&elements, &compounds)
    }

    #[must_use]
    pub fn descriptors(&self) -> &[ChemicalDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn into_descriptors(self) -> Vec<ChemicalDescriptor> {
        self.descriptors
    }

    pub fn elements(&self) -> impl Iterator<Item = &ChemicalDescriptor> + '_ {
        self.by_category(Category::Element)
    }

    pub fn compounds(&self) -> impl Iterator<Item = &ChemicalDescriptor> + '_ {
        self.by_category(Category::Compound)
    }

    fn by_category(&self, category: Category) -> impl Iterator<Item = &ChemicalDescriptor> + '_ {
        self.descriptors
            .iter()
            .filter(move |descriptor| descriptor.category == category)
    }

    /// Find a descriptor by category and name.
    #[must_use]
    pub fn get(&self, category: Category, name: &str) -> Option<&ChemicalDescriptor> {
        self.by_category(category).find(|descriptor| descriptor.name == name)
    }

    /// Compounds left out because a vanilla fluid already covers them.
    #[must_use]
    pub fn vanilla_fluids(&self) -> &[String] {
        &self.vanilla_fluids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn read_catalog_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::CatalogFileMissing {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const ELEMENTS: &str = r#"{
        "elements": [
            {
                "name": "hydrogen",
                "atomic_number": 1,
                "abbreviation": "H",
                "group": 1,
                "period": "1",
                "matter_state": "gas",
                "metal_type": "nonmetal",
                "color": "ffffff",
                "effect": []
            },
            {
                "name": "arsenic",
                "atomic_number": 33,
                "abbreviation": "As",
                "group": "15",
                "period": "4",
                "matter_state": "solid",
                "metal_type": "metalloid",
                "color": "6e7c6f",
                "effect": [
                    { "location": "minecraft:poison", "duration": "600", "amplifier": 1 }
                ]
            },
            {
                "name": "promethium",
                "atomic_number": 61,
                "abbreviation": "Pm",
                "group": "3",
                "period": "6",
                "matter_state": "solid",
                "metal_type": "metal",
                "artificial": true,
                "color": "62af0a7"
            }
        ]
    }"#;

    const COMPOUNDS: &str = r#"{
        "compounds": [
            {
                "name": "water",
                "matter_state": "liquid",
                "has_fluid": true,
                "color": "3f76e4",
                "components": [
                    { "name": "hydrogen", "count": 2 },
                    { "name": "oxygen" }
                ]
            },
            {
                "name": "ammonia",
                "matter_state": "gas",
                "description": "",
                "color": "c0d8f0",
                "components": [
                    { "name": "nitrogen" },
                    { "name": "hydrogen", "count": 3 }
                ],
                "effect": [
                    { "location": "minecraft:nausea", "duration": 200, "amplifier": 0 }
                ],
                "fluid_properties": {
                    "density": -500,
                    "light_level": 0,
                    "viscosity": 200,
                    "temperature": 240,
                    "motion_scale": 0.014,
                    "fall_distance_modifier": 0.5,
                    "path_type": "water",
                    "push_entity": true,
                    "can_swim": true,
                    "can_drown": true,
                    "can_hydrate": false,
                    "can_extinguish": false,
                    "supports_boating": false,
                    "can_convert_to_source": false
                }
            },
            {
                "name": "ectoplasm",
                "matter_state": "plasma",
                "color": "00ff00"
            }
        ]
    }"#;

    #[test]
    fn test_parse_elements() {
        let elements = parse_elements(ELEMENTS).unwrap();
        assert_eq!(elements.len(), 3);

        let hydrogen = &elements[0];
        assert_eq!(hydrogen.matter_state, MatterState::Gas);
        assert_eq!(hydrogen.metal_class, MetalClass::NonMetal);
        assert_eq!(hydrogen.group.as_deref(), Some("1"));
        assert_eq!(hydrogen.atomic_number, Some(1));

        let arsenic = &elements[1];
        assert_eq!(arsenic.effects, vec![EffectRef::new("minecraft:poison", 600, 1)]);
        assert!(arsenic.hazardous());

        assert!(elements[2].artificial);
        assert!(elements[2].effects.is_empty());
    }

    #[test]
    fn test_parse_compounds_skips_vanilla_fluids() {
        let (compounds, vanilla) = parse_compounds(COMPOUNDS).unwrap();
        assert_eq!(vanilla, vec!["water".to_string()]);
        assert_eq!(compounds.len(), 2);

        let ammonia = &compounds[0];
        assert_eq!(ammonia.components[0].count, 1);
        assert_eq!(ammonia.components[1].count, 3);
        assert_eq!(ammonia.effects[0].duration, 200);
        assert_eq!(ammonia.description, None);
        assert_eq!(ammonia.fluid_properties.as_ref().unwrap().density, -500);

        assert_eq!(compounds[1].matter_state, MatterState::Unknown);
    }

    #[test]
    fn test_bad_duration_is_an_error() {
        let json = r#"{"elements":[{"name":"x","atomic_number":1,"matter_state":"gas",
            "color":"ffffff","effect":[{"location":"a:b","duration":"soon","amplifier":0}]}]}"#;
        assert!(matches!(parse_elements(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_orders_elements_first() {
        let catalog = Catalog::from_json(ELEMENTS, COMPOUNDS).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.elements().count(), 3);
        assert_eq!(catalog.compounds().count(), 2);
        assert_eq!(catalog.descriptors()[3].name, "ammonia");
        assert!(catalog.get(Category::Compound, "water").is_none());
        assert_eq!(catalog.vanilla_fluids(), ["water".to_string()]);
    }

    #[test]
    fn test_from_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ELEMENTS_FILE), ELEMENTS).unwrap();
        fs::write(dir.path().join(COMPOUNDS_FILE), COMPOUNDS).unwrap();

        let catalog = Catalog::from_dir(dir.path()).unwrap();
        assert!(catalog.get(Category::Element, "arsenic").is_some());
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ELEMENTS_FILE), ELEMENTS).unwrap();

        let err = Catalog::from_dir(dir.path()).unwrap_err();
        match err {
            Error::CatalogFileMissing { path } => assert!(path.ends_with(COMPOUNDS_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
