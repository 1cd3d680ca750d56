//! Composition Root Factory
//!
//! Wires the built-in infrastructure into a `CompositionRoot`.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::composition::{Bootstrap, CompositionRoot, HostEnvironment, EDITOR_COMPONENTS};
use crate::config::HostConfig;
use crate::infrastructure::modules::EditorUtilsModule;
use crate::infrastructure::{BuiltinModuleResolver, StandaloneHost, SystemPalette};

/// Name the standalone host reports through its service provider.
pub const APPLICATION_NAME: &str = "editor-host";

/// Host services for a standalone process.
pub fn create_environment(config: &HostConfig) -> HostEnvironment {
    HostEnvironment {
        services: Arc::new(StandaloneHost::new(APPLICATION_NAME)),
        system_colors: Arc::new(SystemPalette::with_overrides(
            &config.system_colors.overrides(),
        )),
    }
}

/// Bootstrap for the built-in modules at the configured qualifier.
pub fn create_bootstrap(config: &HostConfig) -> Bootstrap {
    Bootstrap {
        resolver: Arc::new(BuiltinModuleResolver::new()),
        modules: EDITOR_COMPONENTS.iter().map(|name| name.to_string()).collect(),
        qualifier: config.deployment.clone(),
        environment: create_environment(config),
        utils: Arc::new(EditorUtilsModule),
    }
}

/// Create an unconstructed composition root.
///
/// Nothing is loaded until the first `container()` call.
pub fn create_composition_root(config: &HostConfig) -> CompositionRoot {
    CompositionRoot::new(create_bootstrap(config))
}
