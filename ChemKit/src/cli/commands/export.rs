//! CLI command for exporting the tables

use std::path::Path;

use crate::cli::GlobalOptions;

pub fn execute(options: &GlobalOptions, output: &Path) -> anyhow::Result<()> {
    let toolkit = options.toolkit()?;
    let document = toolkit.export()?;
    document.write(output)?;

    println!(
        "Wrote {} chemicals to {}",
        document.stats.total(),
        output.display()
    );
    Ok(())
}
