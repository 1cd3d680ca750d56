//! Domain Entities
//!
//! - `Catalog` / `AggregateCatalog` - exports discovered in loaded modules
//! - `ResourceDictionary` - visual attributes produced by color lookups

mod catalog;
mod resource_dictionary;

pub use catalog::{
    downcast_part, erase, AggregateCatalog, Catalog, CatalogEntry, ExportDescriptor, ExportKey,
    ImportSource, PartFactory, PartInstance,
};
pub use resource_dictionary::{labels, ResourceDictionary, ResourceValue};
