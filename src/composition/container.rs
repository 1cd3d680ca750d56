//! Composition container
//!
//! Matches capability requests to overrides first and catalog exports
//! second. Catalog parts are built on first use, with their own imports
//! resolved recursively, and cached for the lifetime of the container.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::entities::{
    downcast_part, erase, AggregateCatalog, CatalogEntry, ExportKey, ImportSource, PartInstance,
};
use crate::domain::value_objects::CapabilityId;
use crate::error::{HostError, HostResult};

/// Outcome of matching one capability request.
///
/// Construction failures of a matched part are reported through the outer
/// `HostResult` instead.
#[derive(Debug)]
pub enum Resolution<T: ?Sized> {
    Unique(Arc<T>),
    NotFound,
    /// Qualified names (`module/part`) of every matching export
    Ambiguous(Vec<String>),
}

impl<T: ?Sized> Resolution<T> {
    pub fn is_unique(&self) -> bool {
        matches!(self, Resolution::Unique(_))
    }

    /// Apply the default policy: anything but a unique match is an error.
    pub fn into_result(self, contract: CapabilityId) -> HostResult<Arc<T>> {
        match self {
            Resolution::Unique(instance) => Ok(instance),
            Resolution::NotFound => Err(HostError::CapabilityNotFound {
                capability: contract.to_string(),
            }),
            Resolution::Ambiguous(candidates) => Err(HostError::CapabilityAmbiguous {
                capability: contract.to_string(),
                candidates,
            }),
        }
    }
}

/// Where a resolved capability came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilitySource {
    Override,
    /// Qualified part name of the catalog export
    Catalog(String),
}

/// Resolver over an aggregate catalog plus override registrations.
pub struct CompositionContainer {
    catalog: AggregateCatalog,
    overrides: Vec<(CapabilityId, PartInstance)>,
    instances: RwLock<HashMap<ExportKey, PartInstance>>,
}

impl std::fmt::Debug for CompositionContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositionContainer").finish_non_exhaustive()
    }
}

impl CompositionContainer {
    pub fn new(catalog: AggregateCatalog) -> Self {
        Self {
            catalog,
            overrides: Vec::new(),
            instances: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &AggregateCatalog {
        &self.catalog
    }

    /// Bind `value` as the only answer for contract `T`.
    ///
    /// Takes `&mut self`: overrides can only be added while the container is
    /// still exclusively owned, before it is shared.
    pub fn compose_exported_value<T: ?Sized + Send + Sync + 'static>(&mut self, value: Arc<T>) {
        let contract = CapabilityId::of::<T>();
        let instance = erase(value);
        match self
            .overrides
            .iter_mut()
            .find(|(existing, _)| *existing == contract)
        {
            Some(slot) => slot.1 = instance,
            None => self.overrides.push((contract, instance)),
        }
    }

    pub fn is_overridden(&self, contract: CapabilityId) -> bool {
        self.override_for(contract).is_some()
    }

    /// Overridden contracts in registration order.
    pub fn overridden_contracts(&self) -> impl Iterator<Item = CapabilityId> + '_ {
        self.overrides.iter().map(|(contract, _)| *contract)
    }

    /// Which registration would answer a request for `contract`, if exactly one.
    pub fn source_of(&self, contract: CapabilityId) -> Option<CapabilitySource> {
        if self.is_overridden(contract) {
            return Some(CapabilitySource::Override);
        }
        match self.catalog.exports_for(contract).as_slice() {
            [entry] => Some(CapabilitySource::Catalog(entry.qualified_part())),
            _ => None,
        }
    }

    /// Match a request for `T` without turning misses into errors.
    pub fn try_resolve<T: ?Sized + Send + Sync + 'static>(&self) -> HostResult<Resolution<T>> {
        let mut scope = ImportScope::new(self);
        Ok(match scope.resolve_unique(CapabilityId::of::<T>())? {
            Resolution::Unique(instance) => Resolution::Unique(downcast_part::<T>(&instance)?),
            Resolution::NotFound => Resolution::NotFound,
            Resolution::Ambiguous(candidates) => Resolution::Ambiguous(candidates),
        })
    }

    /// Resolve exactly one implementation of `T`.
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> HostResult<Arc<T>> {
        self.try_resolve::<T>()?
            .into_result(CapabilityId::of::<T>())
    }

    /// Resolve every implementation of `T`.
    ///
    /// An override replaces all catalog exports of its contract.
    pub fn resolve_many<T: ?Sized + Send + Sync + 'static>(&self) -> HostResult<Vec<Arc<T>>> {
        let mut scope = ImportScope::new(self);
        scope
            .resolve_all(CapabilityId::of::<T>())?
            .iter()
            .map(|instance| downcast_part::<T>(instance))
            .collect()
    }

    fn override_for(&self, contract: CapabilityId) -> Option<PartInstance> {
        self.overrides
            .iter()
            .find(|(existing, _)| *existing == contract)
            .map(|(_, instance)| instance.clone())
    }

    fn cached(&self, key: ExportKey) -> Option<PartInstance> {
        self.instances.read().get(&key).cloned()
    }

    /// Keep the first instance stored for `key` and return it.
    fn cache(&self, key: ExportKey, instance: PartInstance) -> PartInstance {
        self.instances.write().entry(key).or_insert(instance).clone()
    }
}

/// One top-level request. Tracks the contracts under construction so that
/// import cycles are reported instead of recursing forever.
struct ImportScope<'c> {
    container: &'c CompositionContainer,
    in_progress: Vec<CapabilityId>,
}

impl<'c> ImportScope<'c> {
    fn new(container: &'c CompositionContainer) -> Self {
        Self {
            container,
            in_progress: Vec::new(),
        }
    }

    fn resolve_unique(
        &mut self,
        contract: CapabilityId,
    ) -> HostResult<Resolution<dyn Any + Send + Sync>> {
        let container = self.container;
        if let Some(instance) = container.override_for(contract) {
            return Ok(Resolution::Unique(instance));
        }
        let candidates = container.catalog.exports_for(contract);
        match candidates.as_slice() {
            [] => Ok(Resolution::NotFound),
            [entry] => self.instantiate(entry).map(Resolution::Unique),
            _ => Ok(Resolution::Ambiguous(
                candidates.iter().map(|entry| entry.qualified_part()).collect(),
            )),
        }
    }

    fn resolve_all(&mut self, contract: CapabilityId) -> HostResult<Vec<PartInstance>> {
        let container = self.container;
        if let Some(instance) = container.override_for(contract) {
            return Ok(vec![instance]);
        }
        container
            .catalog
            .exports_for(contract)
            .iter()
            .map(|entry| self.instantiate(entry))
            .collect()
    }

    fn instantiate(&mut self, entry: &CatalogEntry<'_>) -> HostResult<PartInstance> {
        if let Some(instance) = self.container.cached(entry.key) {
            return Ok(instance);
        }

        let contract = entry.export.contract();
        if self.in_progress.contains(&contract) {
            let chain: Vec<String> = self
                .in_progress
                .iter()
                .chain(std::iter::once(&contract))
                .map(|id| id.to_string())
                .collect();
            return Err(HostError::CompositionCycle {
                chain: chain.join(" -> "),
            });
        }

        self.in_progress.push(contract);
        let built = entry.export.instantiate(self);
        self.in_progress.pop();

        let instance = built.map_err(|source| HostError::PartConstruction {
            part: entry.qualified_part(),
            source: Box::new(source),
        })?;
        Ok(self.container.cache(entry.key, instance))
    }
}

impl ImportSource for ImportScope<'_> {
    fn import_instance(&mut self, contract: CapabilityId) -> HostResult<PartInstance> {
        self.resolve_unique(contract)?.into_result(contract)
    }

    fn import_many_instances(&mut self, contract: CapabilityId) -> HostResult<Vec<PartInstance>> {
        self.resolve_all(contract)
    }
}
