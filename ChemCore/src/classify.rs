//! Storage form classification
//!
//! Decides which storage form a descriptor is registered as. The rules depend
//! only on category, matter state and metal class:
//!
//! | category | state  | metal class | form     |
//! |----------|--------|-------------|----------|
//! | element  | gas    | any         | gas      |
//! | element  | liquid | any         | slurry   |
//! | element  | solid  | metal       | slurry   |
//! | element  | solid  | other       | infusion |
//! | compound | gas    | -           | gas      |
//! | compound | liquid | -           | slurry   |
//! | compound | solid  | -           | infusion |
//!
//! Unknown matter states produce no form.

use serde::{Deserialize, Serialize};

use crate::descriptor::{Category, ChemicalDescriptor, MatterState, MetalClass};
use crate::registry::StorageForm;

/// Effect locations that mark an element as hazardous.
pub const ADVERSE_EFFECTS: &[&str] = &["minecraft:poison", "minecraft:wither"];

/// A form a descriptor should be registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub form: StorageForm,
    pub hazardous: bool,
}

/// Classify a descriptor into zero or one storage form.
#[must_use]
pub fn classify(descriptor: &ChemicalDescriptor) -> Vec<Classification> {
    storage_form(descriptor)
        .map(|form| Classification {
            form,
            hazardous: is_hazardous(descriptor),
        })
        .into_iter()
        .collect()
}

/// The storage form for a descriptor, if any.
#[must_use]
pub fn storage_form(descriptor: &ChemicalDescriptor) -> Option<StorageForm> {
    match (descriptor.category, descriptor.matter_state) {
        (_, MatterState::Gas) => Some(StorageForm::Gas),
        (_, MatterState::Liquid) => Some(StorageForm::Slurry),
        (Category::Element, MatterState::Solid) => match descriptor.metal_class {
            MetalClass::Metal => Some(StorageForm::Slurry),
            MetalClass::Metalloid | MetalClass::NonMetal | MetalClass::Unspecified => {
                Some(StorageForm::Infusion)
            }
        },
        (Category::Compound, MatterState::Solid) => Some(StorageForm::Infusion),
        (_, MatterState::Unknown) => None,
    }
}

/// Hazard flag.
///
/// Elements are hazardous when any effect is in [`ADVERSE_EFFECTS`]. Compounds
/// are hazardous when they carry any effect at all.
#[must_use]
pub fn is_hazardous(descriptor: &ChemicalDescriptor) -> bool {
    match descriptor.category {
        Category::Element => descriptor
            .effects
            .iter()
            .any(|effect| ADVERSE_EFFECTS.contains(&effect.location.as_str())),
        Category::Compound => !descriptor.effects.is_empty(),
    }
}
