//! CLI command for listing recipe catalogs

use console::style;

use crate::cli::GlobalOptions;

pub fn execute(options: &GlobalOptions) -> anyhow::Result<()> {
    let toolkit = options.toolkit()?;
    let book = toolkit.recipes()?;
    let providers = toolkit.providers();

    println!("{}", style("State conversions").bold());
    for conversion in book.conversions.iter() {
        let chemical = conversion
            .gas_form
            .as_ref()
            .or(conversion.slurry_form.as_ref())
            .or(conversion.infusion_form.as_ref())
            .map_or_else(|| "-".to_string(), |reference| providers.chemical_id(reference));
        let item = conversion
            .solid_form
            .as_deref()
            .or(conversion.liquid_form.as_deref())
            .unwrap_or("-");
        println!("  {:<16} {item:<28} {chemical}", conversion.name);
    }

    println!();
    println!("{}", style("Synthesis").bold());
    for recipe in book.synthesis.iter() {
        let inputs: Vec<String> = recipe
            .inputs
            .iter()
            .map(|stack| format!("{} x{}", providers.chemical_id(&stack.chemical), stack.amount))
            .collect();
        let output = match recipe.output.as_chemical() {
            Some(reference) => providers.chemical_id(reference),
            None => recipe.output.id().to_string(),
        };
        println!(
            "  {:<26} {} -> {output} x{}",
            recipe.id,
            inputs.join(" + "),
            recipe.output_amount
        );
    }

    println!();
    println!("{}", style("Decomposition").bold());
    for recipe in book.decomposition.iter() {
        let outputs: Vec<String> = recipe
            .outputs
            .iter()
            .map(|output| {
                format!(
                    "{} x{} ({:.0}%)",
                    providers.chemical_id(&output.chemical),
                    output.amount,
                    output.probability * 100.0
                )
            })
            .collect();
        println!("  {:<26} -> {}", recipe.input_item, outputs.join(", "));
    }

    Ok(())
}
