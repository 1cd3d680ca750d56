//! Access to parts `editor.utils` does not export.
//!
//! The undo registry the host needs is internal to `editor.utils`. The module
//! lists it in its internal-part table; this is the only code that looks it up
//! by name. If the module renames or reshapes the type, the lookup below fails
//! with an `OverrideInjection` error and `tests::utils_module_exposes_basic_undo_registry`
//! fails with it.

use std::sync::Arc;

use crate::domain::entities::downcast_part;
use crate::domain::ports::{ComponentModule, TextUndoHistoryRegistry};
use crate::domain::value_objects::CapabilityId;
use crate::error::{HostError, HostResult};

/// Name of the internal undo registry type inside `editor.utils`.
pub const BASIC_UNDO_REGISTRY_TYPE: &str = "BasicUndo.BasicTextUndoHistoryRegistry";

/// Shape version this host was written against.
pub const BASIC_UNDO_REGISTRY_VERSION: u32 = 1;

/// Default-construct the internal undo registry of `module`.
pub fn basic_undo_history_registry(
    module: &dyn ComponentModule,
) -> HostResult<Arc<dyn TextUndoHistoryRegistry>> {
    let contract = CapabilityId::of::<dyn TextUndoHistoryRegistry>();
    let failure = |reason: String| HostError::OverrideInjection {
        capability: contract.to_string(),
        reason,
    };

    let part = module
        .internal_parts()
        .into_iter()
        .find(|part| part.type_name == BASIC_UNDO_REGISTRY_TYPE)
        .ok_or_else(|| {
            failure(format!(
                "module '{}' {} has no internal type '{}'",
                module.name(),
                module.version(),
                BASIC_UNDO_REGISTRY_TYPE
            ))
        })?;

    if part.contract != contract {
        return Err(failure(format!(
            "'{}' implements {} instead",
            part.type_name, part.contract
        )));
    }
    if part.contract_version != BASIC_UNDO_REGISTRY_VERSION {
        return Err(failure(format!(
            "'{}' is at shape version {}, expected {}",
            part.type_name, part.contract_version, BASIC_UNDO_REGISTRY_VERSION
        )));
    }

    let instance = (part.construct)();
    downcast_part::<dyn TextUndoHistoryRegistry>(&instance).map_err(|err| failure(err.to_string()))
}
