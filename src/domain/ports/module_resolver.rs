//! ModuleResolver port - resolution of named extension modules
//!
//! The host decides how a fully-qualified module reference becomes a loaded
//! module; the composition core only inspects what comes back.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::{ExportDescriptor, PartInstance};
use crate::domain::value_objects::{CapabilityId, ModuleReference};

/// Why a module reference could not be resolved.
#[derive(Debug, Error)]
pub enum ModuleLoadError {
    /// No module with this logical name is installed
    #[error("module '{name}' is not installed")]
    NotFound { name: String },

    /// The module exists but not at the requested qualifier
    #[error("installed module does not match the requested qualifier: {reason}")]
    Incompatible { reason: String },
}

/// A part a module keeps out of its public catalog but exposes to trusted hosts.
///
/// The table is versioned so that a renamed or reshaped internal type fails
/// loudly at the single place that depends on it.
#[derive(Debug, Clone, Copy)]
pub struct InternalPart {
    /// Name of the internal type inside the owning module
    pub type_name: &'static str,
    /// Contract the constructed value implements
    pub contract: CapabilityId,
    /// Bumped whenever the shape of the internal type changes
    pub contract_version: u32,
    /// Default constructor
    pub construct: fn() -> PartInstance,
}

/// An inspectable, loaded extension module.
pub trait ComponentModule: Send + Sync {
    /// Logical module name
    fn name(&self) -> &str;

    /// Version of the installed build
    fn version(&self) -> &str;

    /// Publicly declared capability exports
    fn exports(&self) -> Vec<ExportDescriptor>;

    /// Internal parts offered to hosts that know them by name
    fn internal_parts(&self) -> Vec<InternalPart> {
        Vec::new()
    }
}

/// Resolves fully-qualified module references into loaded modules.
///
/// Implementations:
/// - `BuiltinModuleResolver` - the editor modules compiled into this crate
/// - test resolvers that count or fail loads
pub trait ModuleResolver: Send + Sync {
    fn load(&self, reference: &ModuleReference) -> Result<Arc<dyn ComponentModule>, ModuleLoadError>;
}
