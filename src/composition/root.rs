//! Composition root
//!
//! Owns the one-time construction of the container. Components that need
//! capabilities receive a `&CompositionRoot` (or the container it hands out)
//! explicitly; there is no global instance.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use super::container::CompositionContainer;
use super::loader::load_catalogs;
use super::overrides::{inject_overrides, HostEnvironment};
use crate::domain::entities::AggregateCatalog;
use crate::domain::ports::{ComponentModule, ModuleResolver};
use crate::domain::value_objects::DeploymentQualifier;
use crate::error::HostResult;

/// Everything needed to build the container.
#[derive(Clone)]
pub struct Bootstrap {
    pub resolver: Arc<dyn ModuleResolver>,
    /// Logical names of the catalog modules, in load order
    pub modules: Vec<String>,
    pub qualifier: DeploymentQualifier,
    pub environment: HostEnvironment,
    /// Linked module providing internal override parts
    pub utils: Arc<dyn ComponentModule>,
}

/// Lazily constructed, process-lifetime composition container.
///
/// The first call to [`CompositionRoot::container`] loads every module,
/// builds the container and injects overrides; concurrent callers block until
/// that finishes and receive the same instance. If construction fails the
/// root stays unconstructed and the next call starts over.
pub struct CompositionRoot {
    bootstrap: Bootstrap,
    container: OnceCell<Arc<CompositionContainer>>,
}

impl CompositionRoot {
    pub fn new(bootstrap: Bootstrap) -> Self {
        Self {
            bootstrap,
            container: OnceCell::new(),
        }
    }

    pub fn bootstrap(&self) -> &Bootstrap {
        &self.bootstrap
    }

    /// The container, constructing it on first use.
    pub fn container(&self) -> HostResult<Arc<CompositionContainer>> {
        self.container
            .get_or_try_init(|| self.construct())
            .cloned()
    }

    pub fn is_constructed(&self) -> bool {
        self.container.get().is_some()
    }

    /// Shorthand for `container()?.resolve::<T>()`.
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> HostResult<Arc<T>> {
        self.container()?.resolve::<T>()
    }

    fn construct(&self) -> HostResult<Arc<CompositionContainer>> {
        let bootstrap = &self.bootstrap;
        let names: Vec<&str> = bootstrap.modules.iter().map(String::as_str).collect();

        let built = load_catalogs(bootstrap.resolver.as_ref(), &names, &bootstrap.qualifier)
            .and_then(|catalogs| {
                let mut container = CompositionContainer::new(AggregateCatalog::new(catalogs));
                inject_overrides(
                    &mut container,
                    &bootstrap.environment,
                    bootstrap.utils.as_ref(),
                )?;
                Ok(container)
            });

        match built {
            Ok(container) => {
                info!(
                    modules = names.len(),
                    exports = container.catalog().len(),
                    version = %bootstrap.qualifier.version,
                    "composition container ready"
                );
                Ok(Arc::new(container))
            }
            Err(err) => {
                warn!(error = %err, "composition container construction failed");
                Err(err)
            }
        }
    }
}
