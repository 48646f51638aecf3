//! CLI command for summarizing the mapping tables

use chemcore::color::format_argb;
use chemcore::descriptor::Category;
use chemcore::registry::StorageForm;
use console::style;

use crate::cli::GlobalOptions;

pub fn execute(options: &GlobalOptions, verbose: bool) -> anyhow::Result<()> {
    let toolkit = options.toolkit()?;
    let table = toolkit.table()?;

    for category in Category::ALL {
        for form in StorageForm::ALL {
            let count = table.table_len(category, form);
            println!("{:<20} {count:>5}", style(format!("{category} {form}")).bold());
            if verbose {
                for reference in table.iter(category, form) {
                    let hazard = if reference.hazardous { " hazardous" } else { "" };
                    println!(
                        "    {:<32} {}{}",
                        reference.identifier,
                        format_argb(reference.color_argb),
                        style(hazard).red()
                    );
                }
            }
        }
    }

    let stats = table.stats();
    println!();
    println!("Total: {} chemicals", stats.total());
    if stats.skipped > 0 {
        println!("Skipped: {} (no storage form)", stats.skipped);
    }
    if stats.fallback_colors > 0 {
        println!(
            "{}",
            style(format!("Fallback colors: {}", stats.fallback_colors)).yellow()
        );
    }

    Ok(())
}
