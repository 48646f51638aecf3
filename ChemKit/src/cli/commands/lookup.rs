//! CLI command for name lookups

use chemcore::color::format_argb;
use chemcore::registry::{ChemicalReference, SlurryStage};

use crate::cli::GlobalOptions;
use crate::providers::ProviderMap;

pub fn execute(
    options: &GlobalOptions,
    gas: Option<&str>,
    slurry: Option<&str>,
) -> anyhow::Result<()> {
    let toolkit = options.toolkit()?;
    let table = toolkit.table()?;
    let lookup = table.lookup();
    let providers = toolkit.providers();

    let (kind, name, found) = match (gas, slurry) {
        (Some(name), _) => ("gas", name, lookup.gas_form_of(name)),
        (None, Some(name)) => ("slurry", name, lookup.slurry_form_of(name)),
        (None, None) => anyhow::bail!("pass --gas NAME or --slurry NAME"),
    };

    let Some(reference) = found else {
        anyhow::bail!("no {kind} registered for '{name}'");
    };

    print_reference(reference, &providers);
    Ok(())
}

fn print_reference(reference: &ChemicalReference, providers: &ProviderMap) {
    println!("Name:       {}", reference.name);
    println!("Category:   {}", reference.category);
    println!("Form:       {}", reference.form);
    println!("Identifier: {}", reference.identifier);
    println!("Registry:   {}", providers.chemical_id(reference));
    println!("Color:      {}", format_argb(reference.color_argb));
    println!("Hazardous:  {}", reference.hazardous);
    if let Some(dirty) = providers.slurry_stage_id(reference, SlurryStage::Dirty) {
        println!("Dirty:      {dirty}");
    }
    if let Some(clean) = providers.slurry_stage_id(reference, SlurryStage::Clean) {
        println!("Clean:      {clean}");
    }
}
