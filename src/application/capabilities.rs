//! Capabilities that can be resolved by name.

use crate::composition::CompositionContainer;
use crate::domain::entities::downcast_part;
use crate::domain::ports::{
    ContentTypeRegistry, DataStorageService, EditorOptionDefinition, EditorOptionsFactory,
    HierarchyItemManager, LocalRegistry, ServiceProvider, TextUndoHistoryRegistry,
};
use crate::domain::value_objects::CapabilityId;
use crate::error::HostResult;
use crate::infrastructure::APPLICATION_NAME_SERVICE;

const PROBE_CONTEXT: &str = "editor-host/probe";

/// A contract the CLI knows by name, plus how to summarize a resolved instance.
pub struct NamedCapability {
    pub name: &'static str,
    pub contract: fn() -> CapabilityId,
    pub describe: fn(&CompositionContainer) -> HostResult<String>,
}

pub const NAMED_CAPABILITIES: &[NamedCapability] = &[
    NamedCapability {
        name: "ServiceProvider",
        contract: CapabilityId::of::<dyn ServiceProvider>,
        describe: describe_service_provider,
    },
    NamedCapability {
        name: "DataStorageService",
        contract: CapabilityId::of::<dyn DataStorageService>,
        describe: describe_data_storage,
    },
    NamedCapability {
        name: "TextUndoHistoryRegistry",
        contract: CapabilityId::of::<dyn TextUndoHistoryRegistry>,
        describe: describe_undo_registry,
    },
    NamedCapability {
        name: "ContentTypeRegistry",
        contract: CapabilityId::of::<dyn ContentTypeRegistry>,
        describe: describe_content_types,
    },
    NamedCapability {
        name: "EditorOptionsFactory",
        contract: CapabilityId::of::<dyn EditorOptionsFactory>,
        describe: describe_options_factory,
    },
    NamedCapability {
        name: "EditorOptionDefinition",
        contract: CapabilityId::of::<dyn EditorOptionDefinition>,
        describe: describe_option_definition,
    },
    NamedCapability {
        name: "HierarchyItemManager",
        contract: CapabilityId::of::<dyn HierarchyItemManager>,
        describe: describe_hierarchy,
    },
    NamedCapability {
        name: "LocalRegistry",
        contract: CapabilityId::of::<dyn LocalRegistry>,
        describe: describe_local_registry,
    },
];

/// Case-insensitive lookup by contract name.
pub fn find_capability(name: &str) -> Option<&'static NamedCapability> {
    NAMED_CAPABILITIES
        .iter()
        .find(|capability| capability.name.eq_ignore_ascii_case(name.trim()))
}

fn describe_service_provider(container: &CompositionContainer) -> HostResult<String> {
    let provider = container.resolve::<dyn ServiceProvider>()?;
    let name = provider
        .service(APPLICATION_NAME_SERVICE)
        .map(|instance| downcast_part::<str>(&instance))
        .transpose()?;
    Ok(match name {
        Some(name) => format!("application name: {}", name),
        None => "no application name".to_string(),
    })
}

fn describe_data_storage(container: &CompositionContainer) -> HostResult<String> {
    let storage = container
        .resolve::<dyn DataStorageService>()?
        .data_storage("text");
    let entries = storage
        .try_get_item_value("Plain Text")
        .map(|dict| dict.len())
        .unwrap_or(0);
    Ok(format!("'Plain Text' has {} resource entries", entries))
}

fn describe_undo_registry(container: &CompositionContainer) -> HostResult<String> {
    let registry = container.resolve::<dyn TextUndoHistoryRegistry>()?;
    let history = registry.register_history(PROBE_CONTEXT);
    history.push("probe");
    let working = history.undo().is_some() && history.can_redo();
    registry.remove_history(PROBE_CONTEXT);
    Ok(if working {
        "undo and redo work".to_string()
    } else {
        "history did not record the probe".to_string()
    })
}

fn describe_content_types(container: &CompositionContainer) -> HostResult<String> {
    let names: Vec<String> = container
        .resolve::<dyn ContentTypeRegistry>()?
        .content_types()
        .into_iter()
        .map(|content_type| content_type.name)
        .collect();
    Ok(format!("{} content types: {}", names.len(), names.join(", ")))
}

fn describe_options_factory(container: &CompositionContainer) -> HostResult<String> {
    let options = container.resolve::<dyn EditorOptionsFactory>()?.global_options();
    Ok(format!("{} global options", options.len()))
}

fn describe_option_definition(container: &CompositionContainer) -> HostResult<String> {
    let definition = container.resolve::<dyn EditorOptionDefinition>()?;
    Ok(format!("{} = {}", definition.key(), definition.default_value()))
}

fn describe_hierarchy(container: &CompositionContainer) -> HostResult<String> {
    let root = container.resolve::<dyn HierarchyItemManager>()?.root();
    Ok(match root {
        Some(item) => format!("root item '{}'", item.name),
        None => "empty hierarchy".to_string(),
    })
}

fn describe_local_registry(container: &CompositionContainer) -> HostResult<String> {
    let registry = container.resolve::<dyn LocalRegistry>()?;
    let creates = registry.create_instance("TextUndoHistoryRegistry").is_some();
    Ok(format!("creates TextUndoHistoryRegistry: {}", creates))
}
