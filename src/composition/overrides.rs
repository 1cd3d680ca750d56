//! Override injection
//!
//! Runs once, right after the container is built and before anyone else can
//! see it. Each override replaces a capability the catalog cannot provide in
//! a standalone host.

use std::sync::Arc;

use tracing::{debug, info};

use super::container::CompositionContainer;
use super::internal;
use crate::domain::entities::PartInstance;
use crate::domain::ports::{
    ComponentModule, DataStorageService, ServiceProvider, SystemColors, TextUndoHistoryRegistry,
};
use crate::domain::services::FallbackDataStorageService;
use crate::error::HostResult;

/// Ambient services the host supplies at process start.
#[derive(Clone)]
pub struct HostEnvironment {
    pub services: Arc<dyn ServiceProvider>,
    pub system_colors: Arc<dyn SystemColors>,
}

/// Presents the host's global provider as the container's `ServiceProvider`.
pub struct HostServiceProviderWrapper {
    inner: Arc<dyn ServiceProvider>,
}

impl HostServiceProviderWrapper {
    pub fn new(inner: Arc<dyn ServiceProvider>) -> Self {
        Self { inner }
    }
}

impl ServiceProvider for HostServiceProviderWrapper {
    fn service(&self, name: &str) -> Option<PartInstance> {
        self.inner.service(name)
    }
}

/// Register the host's overrides into a freshly built container.
///
/// - `ServiceProvider`: the host provider, wrapped
/// - `DataStorageService`: fallback color storage; the shell-backed export
///   needs the shell's font and color service
/// - `TextUndoHistoryRegistry`: the internal registry of `utils`; the
///   catalog's registry needs the shell's local registry
pub fn inject_overrides(
    container: &mut CompositionContainer,
    environment: &HostEnvironment,
    utils: &dyn ComponentModule,
) -> HostResult<()> {
    let undo_registry = internal::basic_undo_history_registry(utils)?;
    debug!(
        module = utils.name(),
        version = utils.version(),
        "obtained internal undo history registry"
    );

    container.compose_exported_value::<dyn ServiceProvider>(Arc::new(
        HostServiceProviderWrapper::new(environment.services.clone()),
    ));
    container.compose_exported_value::<dyn DataStorageService>(Arc::new(
        FallbackDataStorageService::new(environment.system_colors.clone()),
    ));
    container.compose_exported_value::<dyn TextUndoHistoryRegistry>(undo_registry);

    info!(
        overrides = container.overridden_contracts().count(),
        "injected capability overrides"
    );
    Ok(())
}
