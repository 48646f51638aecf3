//! Command execution implementations

use super::Commands;
use super::{classify, color, export, lookup, recipes};
use crate::cli::GlobalOptions;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, options: &GlobalOptions) -> anyhow::Result<()> {
        match self {
            Commands::Classify { verbose } => classify::execute(options, *verbose),
            Commands::Lookup { gas, slurry } => {
                lookup::execute(options, gas.as_deref(), slurry.as_deref())
            }
            Commands::Color { hex, name } => color::execute(options, hex, name.as_deref()),
            Commands::Export { output } => export::execute(options, output),
            Commands::Recipes => recipes::execute(options),
        }
    }
}
