//! Composition Layer
//!
//! Builds the container the rest of the host resolves capabilities from:
//! module loading, catalog aggregation, override injection and the one-time
//! construction guard.

pub mod container;
pub mod internal;
pub mod loader;
pub mod overrides;
pub mod root;

pub use container::{CapabilitySource, CompositionContainer, Resolution};
pub use loader::{load_catalogs, module_references, EDITOR_COMPONENTS};
pub use overrides::{inject_overrides, HostEnvironment, HostServiceProviderWrapper};
pub use root::{Bootstrap, CompositionRoot};
