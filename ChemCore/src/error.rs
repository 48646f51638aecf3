//! Error types for `ChemCore`

use std::path::PathBuf;

use thiserror::Error;

use crate::descriptor::Category;
use crate::registry::StorageForm;

/// The error type for `ChemCore` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog data file was expected but not found.
    #[error("catalog file not found: {path}")]
    CatalogFileMissing {
        /// The path that was checked.
        path: PathBuf,
    },

    // ==================== Catalog Errors ====================
    /// JSON parse error while reading catalog data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== Registry Errors ====================
    /// The same substance appeared twice in one category of the catalog.
    #[error("duplicate {category} descriptor: {name}")]
    DuplicateDescriptor {
        /// Category the duplicate was found in.
        category: Category,
        /// The repeated substance name.
        name: String,
    },

    /// A reference was inserted twice into the same mapping table.
    #[error("duplicate {category} {form} reference: {name}")]
    DuplicateReference {
        /// Category of the table.
        category: Category,
        /// Storage form of the table.
        form: StorageForm,
        /// The repeated substance name.
        name: String,
    },

    /// The shared registry lock was poisoned by a panicking writer.
    #[error("registry lock poisoned")]
    LockPoisoned,
}

/// Result type alias for `ChemCore` operations.
pub type Result<T> = std::result::Result<T, Error>;
