//! Application Layer
//!
//! Use cases over a composition root. This layer:
//! - Depends on the composition and domain layers
//! - Does NOT contain resolution rules (those are in `composition`)
//!
//! ## Use Cases
//!
//! - `InspectUseCase` - Module, catalog, capability, color and option queries

pub mod capabilities;
pub mod inspect;

pub use capabilities::{find_capability, NamedCapability, NAMED_CAPABILITIES};
pub use inspect::{
    CatalogSummary, ColorSummary, ExportSummary, InspectUseCase, ModuleSummary, ResolveSummary,
    TEXT_STORAGE_KEY,
};
