use chemkit::chemcore::descriptor::Category;
use chemkit::chemcore::registry::StorageForm;
use chemkit::recipes::Output;
use chemkit::{ChemKitConfig, Error, Toolkit};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ELEMENTS: &str = r#"{
    "elements": [
        { "name": "hydrogen", "atomic_number": 1, "abbreviation": "H", "group": "1", "period": "1",
          "matter_state": "gas", "metal_type": "nonmetal", "color": "ffffff" },
        { "name": "helium", "atomic_number": 2, "abbreviation": "He", "group": "18", "period": "1",
          "matter_state": "gas", "metal_type": "nonmetal", "color": "f0e68c" },
        { "name": "oxygen", "atomic_number": 8, "abbreviation": "O", "group": "16", "period": "2",
          "matter_state": "gas", "metal_type": "nonmetal", "color": "d2e7f5" },
        { "name": "carbon", "atomic_number": 6, "abbreviation": "C", "group": "14", "period": "2",
          "matter_state": "solid", "metal_type": "nonmetal", "color": "262626" },
        { "name": "iron", "atomic_number": 26, "abbreviation": "Fe", "group": "8", "period": "4",
          "matter_state": "solid", "metal_type": "metal", "color": "d8af93" },
        { "name": "promethium", "atomic_number": 61, "abbreviation": "Pm", "group": "3", "period": "6",
          "matter_state": "solid", "metal_type": "metal", "artificial": true, "color": "62af0a7" }
    ]
}"#;

const COMPOUNDS: &str = r#"{
    "compounds": [
        { "name": "water", "matter_state": "liquid", "has_fluid": true, "color": "3f76e4" },
        { "name": "methane", "matter_state": "gas", "color": "c0c0c0",
          "components": [ { "name": "carbon" }, { "name": "hydrogen", "count": 4 } ] }
    ]
}"#;

fn write_catalog(dir: &Path, elements: &str) {
    fs::write(dir.join("elements.json"), elements).unwrap();
    fs::write(dir.join("compounds.json"), COMPOUNDS).unwrap();
}

fn toolkit(temp: &TempDir) -> Toolkit {
    write_catalog(temp.path(), ELEMENTS);
    let mut config = ChemKitConfig::default();
    config.catalog.dir = Some(temp.path().to_path_buf());
    config
        .colors
        .overrides
        .insert("helium".to_string(), "ffd700".to_string());
    Toolkit::new(config).unwrap()
}

#[test]
fn test_toolkit_builds_tables() {
    let temp = TempDir::new().unwrap();
    let toolkit = toolkit(&temp);
    let table = toolkit.table().unwrap();

    assert_eq!(table.len(), 7);
    let lookup = table.lookup();
    assert_eq!(lookup.gas_form_of("helium").unwrap().color_argb, 0xFFFFD700);
    assert_eq!(lookup.slurry_form_of("promethium").unwrap().color_argb, 0xFF4AAFAA);
    assert!(table.has(Category::Element, StorageForm::Infusion, "carbon"));
}

#[test]
fn test_toolkit_without_catalog_dir() {
    let result = Toolkit::new(ChemKitConfig::default());
    assert!(matches!(result, Err(Error::CatalogNotConfigured(_))));
}

#[test]
fn test_recipes_use_tables() {
    let temp = TempDir::new().unwrap();
    let toolkit = toolkit(&temp);
    let book = toolkit.recipes().unwrap();

    let water = book.synthesis.get("water_synthesis").unwrap();
    assert_eq!(water.output, Output::Item("minecraft:water_bucket".to_string()));
    // carbon is an infusion here, and carbon dioxide is not in this catalog
    assert!(book.synthesis.get("methane_synthesis").is_some());
    assert!(book.synthesis.get("carbon_dioxide_synthesis").is_none());
    assert!(book.decomposition.get("minecraft:iron_ingot").is_some());
}

#[test]
fn test_export_prefers_providers() {
    let temp = TempDir::new().unwrap();
    let toolkit = toolkit(&temp);
    let out = temp.path().join("export").join("chemicals.json");
    toolkit.export_to(&out).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let gases = json["tables"]["element_gas"].as_array().unwrap();
    assert_eq!(gases[0]["id"], "mekanism:hydrogen");
    assert_eq!(gases[1]["id"], "chemlibmekanized:element_helium");
    assert_eq!(json["stats"]["compound_gases"], 1);

    let slurries = json["tables"]["element_slurry"].as_array().unwrap();
    let iron = slurries.iter().find(|e| e["name"] == "iron").unwrap();
    assert_eq!(iron["id"], "chemlibmekanized:element_iron_slurry");
    assert_eq!(iron["dirty"], "mekanism:dirty_iron");

    let carbon = &json["tables"]["element_infusion"][0];
    assert_eq!(carbon["id"], "mekanism:carbon");
}

#[test]
fn test_reload_keeps_tables_on_failure() {
    let temp = TempDir::new().unwrap();
    let toolkit = toolkit(&temp);

    let duplicated = ELEMENTS.replace("\"helium\"", "\"hydrogen\"");
    write_catalog(temp.path(), &duplicated);
    assert!(toolkit.reload().is_err());
    assert!(toolkit.table().unwrap().lookup().gas_form_of("helium").is_some());

    let trimmed = r#"{ "elements": [
        { "name": "neon", "atomic_number": 10, "matter_state": "gas",
          "metal_type": "nonmetal", "color": "ff4040" } ] }"#;
    write_catalog(temp.path(), trimmed);
    let table = toolkit.reload().unwrap();
    assert!(table.lookup().gas_form_of("neon").is_some());
    assert!(toolkit.table().unwrap().lookup().gas_form_of("helium").is_none());
}
