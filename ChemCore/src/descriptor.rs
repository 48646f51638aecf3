//! Chemical descriptor model
//!
//! A [`ChemicalDescriptor`] is one element or compound record from the `ChemLib`
//! catalog. Descriptors are plain data; classification and naming live in
//! [`crate::classify`] and [`crate::ident`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a descriptor is an element or a compound.
///
/// Elements and compounds are namespaced independently, so the same name may
/// appear once in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Element,
    Compound,
}

impl Category {
    /// Both categories, in table order.
    pub const ALL: [Category; 2] = [Category::Element, Category::Compound];

    /// Lowercase name used in identifiers and log output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Element => "element",
            Category::Compound => "compound",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical state of a substance at room temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatterState {
    Solid,
    Liquid,
    Gas,
    /// Any state string the catalog uses that we do not recognise.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for MatterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatterState::Solid => "solid",
            MatterState::Liquid => "liquid",
            MatterState::Gas => "gas",
            MatterState::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Metal classification. Only meaningful for elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalClass {
    Metal,
    Metalloid,
    #[serde(rename = "nonmetal")]
    NonMetal,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// A status effect attached to a substance (e.g. `minecraft:poison`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRef {
    /// Namespaced effect id.
    pub location: String,
    /// Duration in ticks.
    pub duration: u32,
    pub amplifier: u32,
}

impl EffectRef {
    pub fn new(location: impl Into<String>, duration: u32, amplifier: u32) -> Self {
        Self {
            location: location.into(),
            duration,
            amplifier,
        }
    }
}

/// One `(name, count)` entry of a compound's formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub count: u32,
}

/// Fluid behaviour block carried through from the catalog.
///
/// The engine never interprets these values; they are kept so exporters and
/// downstream generators have the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    pub density: i32,
    pub light_level: i32,
    pub viscosity: i32,
    pub temperature: i32,
    pub motion_scale: f64,
    pub fall_distance_modifier: f64,
    pub path_type: String,
    pub push_entity: bool,
    pub can_swim: bool,
    pub can_drown: bool,
    pub can_hydrate: bool,
    pub can_extinguish: bool,
    pub supports_boating: bool,
    pub can_convert_to_source: bool,
}

/// A single element or compound record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalDescriptor {
    /// Substance name, unique within its category.
    pub name: String,
    pub category: Category,
    pub matter_state: MatterState,
    /// Always [`MetalClass::Unspecified`] for compounds.
    pub metal_class: MetalClass,
    /// Raw hex color string as found in the catalog. May be malformed.
    pub color: String,
    pub effects: Vec<EffectRef>,
    /// Formula of a compound. Empty for elements.
    pub components: Vec<Component>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default)]
    pub artificial: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid_properties: Option<FluidProperties>,
}

impl ChemicalDescriptor {
    fn bare(name: String, category: Category, matter_state: MatterState, color: String) -> Self {
        Self {
            name,
            category,
            matter_state,
            metal_class: MetalClass::Unspecified,
            color,
            effects: Vec::new(),
            components: Vec::new(),
            abbreviation: None,
            atomic_number: None,
            group: None,
            period: None,
            artificial: false,
            description: None,
            fluid_properties: None,
        }
    }

    /// Create an element descriptor with no effects.
    pub fn element(
        name: impl Into<String>,
        matter_state: MatterState,
        metal_class: MetalClass,
        color: impl Into<String>,
    ) -> Self {
        let mut descriptor = Self::bare(name.into(), Category::Element, matter_state, color.into());
        descriptor.metal_class = metal_class;
        descriptor
    }

    /// Create a compound descriptor with no effects or components.
    pub fn compound(
        name: impl Into<String>,
        matter_state: MatterState,
        color: impl Into<String>,
    ) -> Self {
        Self::bare(name.into(), Category::Compound, matter_state, color.into())
    }

    /// Append an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: EffectRef) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append a formula component.
    #[must_use]
    pub fn with_component(mut self, name: impl Into<String>, count: u32) -> Self {
        self.components.push(Component {
            name: name.into(),
            count,
        });
        self
    }

    /// Whether this substance carries an adverse effect.
    ///
    /// See [`crate::classify::is_hazardous`] for the rule.
    #[must_use]
    pub fn hazardous(&self) -> bool {
        crate::classify::is_hazardous(self)
    }

    pub fn is_element(&self) -> bool {
        self.category == Category::Element
    }
}
