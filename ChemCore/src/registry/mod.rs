//! Registry mapping tables
//!
//! The tables map substance names to the chemicals registered for them, one
//! table per (category, storage form):
//!
//! - **element gases**, **element slurries**, **element infusions**
//! - **compound gases**, **compound slurries**, **compound infusions**
//!
//! # Usage
//!
//! ```
//! use chemcore::descriptor::{Category, ChemicalDescriptor, MatterState, MetalClass};
//! use chemcore::registry::{RegistryMappingTable, StorageForm};
//!
//! let catalog = vec![
//!     ChemicalDescriptor::element("hydrogen", MatterState::Gas, MetalClass::NonMetal, "ffffff"),
//!     ChemicalDescriptor::element("iron", MatterState::Solid, MetalClass::Metal, "d8af93"),
//! ];
//! let table = RegistryMappingTable::build(&catalog)?;
//!
//! let iron = table.get(Category::Element, StorageForm::Slurry, "iron").unwrap();
//! assert_eq!(iron.identifier, "element_iron_slurry");
//! # Ok::<(), chemcore::Error>(())
//! ```

mod shared;
mod table;
mod types;

pub use shared::SharedRegistry;
pub use table::RegistryMappingTable;
pub use types::*;
