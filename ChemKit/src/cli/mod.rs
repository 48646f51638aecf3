//! ChemKit CLI - inspect and export the ChemLib chemical tables

pub mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser};
use commands::Commands;

use crate::{ChemKitConfig, Toolkit};

#[derive(Parser)]
#[command(name = "chemkit")]
#[command(about = "ChemKit: ChemLib chemical tables for Mekanism", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing elements.json and compounds.json
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

impl GlobalOptions {
    /// Load the config, applying command-line overrides.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_config(&self) -> anyhow::Result<ChemKitConfig> {
        let mut config = match &self.config {
            Some(path) => ChemKitConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ChemKitConfig::load_default().context("failed to load default config")?,
        };
        if let Some(dir) = &self.catalog {
            config.catalog.dir = Some(dir.clone());
        }
        Ok(config)
    }

    /// Load the config and build the tables.
    ///
    /// # Errors
    /// Returns an error if the config or catalog cannot be loaded.
    pub fn toolkit(&self) -> anyhow::Result<Toolkit> {
        let config = self.load_config()?;
        Ok(Toolkit::new(config)?)
    }
}

/// Run the ChemKit CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute(&cli.options)?;

    Ok(())
}
