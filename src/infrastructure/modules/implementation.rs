//! `editor.implementation`: shell-backed services.
//!
//! Both exports depend on services only the native shell provides, so in a
//! standalone host they fail to construct unless overridden.

use std::sync::Arc;

use crate::domain::entities::{downcast_part, erase, ExportDescriptor, ImportSource, PartInstance};
use crate::domain::ports::{
    DataStorage, DataStorageService, LocalRegistry, ServiceProvider, TextUndoHistory,
    TextUndoHistoryRegistry,
};
use crate::error::{HostError, HostResult};

/// Shell service holding the user's font and color settings.
pub const FONT_AND_COLOR_STORAGE: &str = "FontAndColorStorage";

/// Class the shell's local registry creates the undo registry from.
pub const UNDO_HISTORY_REGISTRY_CLASS: &str = "TextUndoHistoryRegistry";

pub fn exports() -> Vec<ExportDescriptor> {
    vec![
        ExportDescriptor::new::<dyn DataStorageService>("ShellDataStorageService", data_storage_service)
            .importing::<dyn ServiceProvider>(),
        ExportDescriptor::new::<dyn TextUndoHistoryRegistry>(
            "ShellUndoHistoryRegistry",
            undo_history_registry,
        )
        .importing::<dyn LocalRegistry>(),
    ]
}

fn data_storage_service(imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    let services = imports.import::<dyn ServiceProvider>()?;
    let storage = services
        .service(FONT_AND_COLOR_STORAGE)
        .ok_or_else(|| HostError::ServiceUnavailable {
            service: FONT_AND_COLOR_STORAGE.to_string(),
        })
        .and_then(|instance| downcast_part::<dyn DataStorage>(&instance))?;
    Ok(erase::<dyn DataStorageService>(Arc::new(
        ShellDataStorageService { storage },
    )))
}

fn undo_history_registry(imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    let registry = imports.import::<dyn LocalRegistry>()?;
    let inner = registry
        .create_instance(UNDO_HISTORY_REGISTRY_CLASS)
        .ok_or_else(|| HostError::ServiceUnavailable {
            service: UNDO_HISTORY_REGISTRY_CLASS.to_string(),
        })
        .and_then(|instance| downcast_part::<dyn TextUndoHistoryRegistry>(&instance))?;
    Ok(erase::<dyn TextUndoHistoryRegistry>(Arc::new(
        ShellUndoHistoryRegistry { inner },
    )))
}

/// Answers every storage key with the shell's font and color storage.
pub struct ShellDataStorageService {
    storage: Arc<dyn DataStorage>,
}

impl DataStorageService for ShellDataStorageService {
    fn data_storage(&self, _storage_key: &str) -> Arc<dyn DataStorage> {
        self.storage.clone()
    }
}

/// Forwards to the registry created by the shell.
pub struct ShellUndoHistoryRegistry {
    inner: Arc<dyn TextUndoHistoryRegistry>,
}

impl TextUndoHistoryRegistry for ShellUndoHistoryRegistry {
    fn register_history(&self, context: &str) -> Arc<dyn TextUndoHistory> {
        self.inner.register_history(context)
    }

    fn try_get_history(&self, context: &str) -> Option<Arc<dyn TextUndoHistory>> {
        self.inner.try_get_history(context)
    }

    fn remove_history(&self, context: &str) -> bool {
        self.inner.remove_history(context)
    }
}
