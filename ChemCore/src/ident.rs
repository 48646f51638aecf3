//! Registry identifier derivation
//!
//! Identifiers are lowercase `snake_case` strings derived from the substance
//! name. Slurry stages drop the category prefix (`dirty_iron`), so an element
//! slurry and a compound slurry with the same name would share stage ids;
//! the deriver does not check for that.

use crate::descriptor::Category;
use crate::registry::{FormVariant, SlurryPair, SlurryStage, StorageForm};

/// Namespace our chemicals are registered under.
pub const DEFAULT_NAMESPACE: &str = "chemlibmekanized";

/// Derive the identifier for a substance variant.
///
/// ```
/// use chemcore::descriptor::Category;
/// use chemcore::ident::derive_id;
/// use chemcore::registry::{FormVariant, SlurryStage};
///
/// assert_eq!(derive_id(Category::Element, "hydrogen", FormVariant::Gas), "element_hydrogen");
/// assert_eq!(
///     derive_id(Category::Element, "iron", FormVariant::Slurry(SlurryStage::Dirty)),
///     "dirty_iron"
/// );
/// ```
#[must_use]
pub fn derive_id(category: Category, name: &str, variant: FormVariant) -> String {
    let prefix = category.as_str();
    match variant {
        FormVariant::Gas => format!("{prefix}_{name}"),
        FormVariant::SlurryPair => format!("{prefix}_{name}_slurry"),
        FormVariant::Slurry(stage) => format!("{}_{name}", stage.as_str()),
        FormVariant::Infusion => format!("{prefix}_{name}_infusion"),
    }
}

/// Primary identifier for a table entry.
#[must_use]
pub fn primary_id(category: Category, name: &str, form: StorageForm) -> String {
    derive_id(category, name, FormVariant::primary(form))
}

/// Both stage identifiers of a slurry.
#[must_use]
pub fn slurry_pair(category: Category, name: &str) -> SlurryPair {
    SlurryPair {
        dirty: derive_id(category, name, FormVariant::Slurry(SlurryStage::Dirty)),
        clean: derive_id(category, name, FormVariant::Slurry(SlurryStage::Clean)),
    }
}

/// Render a namespaced resource location, `namespace:id`.
#[must_use]
pub fn namespaced(namespace: &str, id: &str) -> String {
    format!("{namespace}:{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_element_ids() {
        let e = Category::Element;
        assert_eq!(derive_id(e, "hydrogen", FormVariant::Gas), "element_hydrogen");
        assert_eq!(derive_id(e, "iron", FormVariant::SlurryPair), "element_iron_slurry");
        assert_eq!(derive_id(e, "carbon", FormVariant::Infusion), "element_carbon_infusion");
        assert_eq!(
            derive_id(e, "iron", FormVariant::Slurry(SlurryStage::Clean)),
            "clean_iron"
        );
    }

    #[test]
    fn test_compound_ids() {
        let c = Category::Compound;
        assert_eq!(derive_id(c, "methane", FormVariant::Gas), "compound_methane");
        assert_eq!(derive_id(c, "brine", FormVariant::SlurryPair), "compound_brine_slurry");
        assert_eq!(
            derive_id(c, "sucrose", FormVariant::Infusion),
            "compound_sucrose_infusion"
        );
        assert_eq!(
            derive_id(c, "brine", FormVariant::Slurry(SlurryStage::Dirty)),
            "dirty_brine"
        );
    }

    #[test]
    fn test_ids_are_injective_per_table() {
        let names = ["hydrogen", "helium", "lithium", "iron", "iron_oxide", "carbon"];
        for category in Category::ALL {
            for form in StorageForm::ALL {
                let ids: HashSet<String> = names
                    .iter()
                    .map(|name| primary_id(category, name, form))
                    .collect();
                assert_eq!(ids.len(), names.len());
            }
        }
    }

    #[test]
    fn test_namespaced() {
        assert_eq!(
            namespaced(DEFAULT_NAMESPACE, "element_hydrogen"),
            "chemlibmekanized:element_hydrogen"
        );
    }
}
