use clap::Subcommand;
use std::path::PathBuf;

pub mod classify;
pub mod color;
pub mod execute;
pub mod export;
pub mod lookup;
pub mod recipes;

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the catalog and summarize each mapping table
    Classify {
        /// List every chemical, not just the counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Look up the chemical registered for a substance
    Lookup {
        /// Gas form (element first, then compound)
        #[arg(long, conflicts_with = "slurry", required_unless_present = "slurry")]
        gas: Option<String>,

        /// Slurry form (elements only)
        #[arg(long)]
        slurry: Option<String>,
    },

    /// Parse a catalog hex color the way the tables do
    Color {
        /// Hex color without '#', e.g. "3f76e4"
        hex: String,

        /// Substance name, so color overrides apply
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Export every mapping table as JSON
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the recipe catalogs built from the tables
    Recipes,
}
