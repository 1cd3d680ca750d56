//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod capability;
mod color;
mod module_reference;

pub use capability::CapabilityId;
pub use color::{named, Rgb, SolidBrush, SystemColorRole};
pub use module_reference::{DeploymentQualifier, ModuleReference, ReferenceParseError};
