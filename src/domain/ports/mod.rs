//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod editor_services;
pub mod host_services;
pub mod module_resolver;

pub use editor_services::{
    ContentType, ContentTypeRegistry, DataStorage, DataStorageService, EditorOptionDefinition,
    EditorOptions, EditorOptionsFactory, HierarchyItem, HierarchyItemManager, LocalRegistry,
    OptionValue, TextUndoHistory, TextUndoHistoryRegistry,
};
pub use host_services::{ServiceProvider, SystemColors};
pub use module_resolver::{ComponentModule, InternalPart, ModuleLoadError, ModuleResolver};
