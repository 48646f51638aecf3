use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ChemCore error: {0}")]
    ChemCore(#[from] chemcore::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("no catalog configured; pass --catalog or set [catalog] dir in {}", .0.display())]
    CatalogNotConfigured(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
