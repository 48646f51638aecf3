//! # ChemCore
//!
//! Classification and registry mapping for `ChemLib` chemical descriptors.
//!
//! Every element and compound in the catalog is sorted into one of three
//! storage forms used by Mekanism-style processing chains:
//!
//! - **Gas** - gaseous substances of either category
//! - **Slurry** - liquids and solid metals, registered as a dirty/clean pair
//! - **Infusion** - remaining solids
//!
//! Each classified substance gets a stable identifier and an ARGB tint, and
//! is published in name-keyed mapping tables.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chemcore::prelude::*;
//!
//! let catalog = Catalog::from_dir("data/chemlib")?;
//! let table = RegistryMappingTable::build(catalog.descriptors())?;
//!
//! if let Some(gas) = table.lookup().gas_form_of("hydrogen") {
//!     println!("{} -> {}", gas.name, gas.identifier);
//! }
//! # Ok::<(), chemcore::Error>(())
//! ```
//!
//! ## Colors
//!
//! ```
//! use chemcore::color::{ColorCodec, parse_color};
//!
//! assert_eq!(parse_color("FF0000"), (0xFFFF0000, true));
//!
//! let codec = ColorCodec::new();
//! assert_eq!(codec.resolve("promethium", "62af0a7"), (0xFF4AAFAA, true));
//! ```

pub mod catalog;
pub mod classify;
pub mod color;
pub mod descriptor;
pub mod error;
pub mod ident;
pub mod lookup;
pub mod registry;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::classify::{Classification, classify};
    pub use crate::color::{ColorCodec, format_argb, parse_color};
    pub use crate::descriptor::{
        Category, ChemicalDescriptor, EffectRef, MatterState, MetalClass,
    };
    pub use crate::error::{Error, Result};
    pub use crate::ident::{DEFAULT_NAMESPACE, derive_id, namespaced};
    pub use crate::lookup::Lookup;
    pub use crate::registry::{
        ChemicalReference, FormVariant, RegistryMappingTable, SharedRegistry, SlurryStage,
        StorageForm,
    };
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
