//! Module catalog loading
//!
//! Turns the fixed list of editor module names into one catalog per module.

use tracing::debug;

use crate::domain::entities::Catalog;
use crate::domain::ports::ModuleResolver;
use crate::domain::value_objects::{DeploymentQualifier, ModuleReference};
use crate::error::{HostError, HostResult};

/// Editor modules whose exports make up the catalog, in load order.
pub const EDITOR_COMPONENTS: &[&str] = &[
    // Core editor components
    "editor.platform",
    // Required by the platform module at load time
    "editor.text.internal",
    // Tab and indent options are exported from here
    "editor.text.logic",
    // Word wrap option
    "editor.text.ui",
    // Zoom option and the presentation layer
    "editor.text.ui.presentation",
    // Shell-backed data storage and undo registry
    "editor.implementation",
    // Hierarchy items, used by peek providers
    "shell.tree-navigation",
];

/// Qualified references for `names`, in order.
pub fn module_references(names: &[&str], qualifier: &DeploymentQualifier) -> Vec<ModuleReference> {
    names
        .iter()
        .map(|name| ModuleReference::new(*name, qualifier.clone()))
        .collect()
}

/// Load every module in `names` and extract its catalog.
///
/// The first module that cannot be resolved aborts the whole load.
pub fn load_catalogs(
    resolver: &dyn ModuleResolver,
    names: &[&str],
    qualifier: &DeploymentQualifier,
) -> HostResult<Vec<Catalog>> {
    module_references(names, qualifier)
        .into_iter()
        .map(|reference| {
            let module = resolver
                .load(&reference)
                .map_err(|source| HostError::ModuleLoad {
                    reference: reference.full_name(),
                    source,
                })?;
            let exports = module.exports();
            debug!(
                module = reference.name(),
                version = module.version(),
                exports = exports.len(),
                "loaded module catalog"
            );
            Ok(Catalog::new(reference.name(), exports))
        })
        .collect()
}
