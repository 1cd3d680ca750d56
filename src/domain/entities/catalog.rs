//! Catalog Entities
//!
//! A `Catalog` is the set of exports discovered in one module; an
//! `AggregateCatalog` is the union of all of them.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::domain::value_objects::CapabilityId;
use crate::error::{HostError, HostResult};

/// Type-erased capability instance.
///
/// Always holds an `Arc<T>` where `T` is the contract type, so that trait
/// objects survive the erasure.
pub type PartInstance = Arc<dyn Any + Send + Sync>;

/// Erase a contract instance for storage in a catalog, container or service map.
pub fn erase<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> PartInstance {
    Arc::new(value)
}

/// Recover the contract instance stored by [`erase`].
pub fn downcast_part<T: ?Sized + Send + Sync + 'static>(
    instance: &PartInstance,
) -> HostResult<Arc<T>> {
    (**instance)
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| HostError::ContractMismatch {
            capability: CapabilityId::of::<T>().to_string(),
        })
}

/// Where a part's factory obtains its own imports.
pub trait ImportSource {
    /// Resolve exactly one export of `contract`.
    fn import_instance(&mut self, contract: CapabilityId) -> HostResult<PartInstance>;

    /// Resolve every export of `contract`, possibly none.
    fn import_many_instances(&mut self, contract: CapabilityId) -> HostResult<Vec<PartInstance>>;
}

impl dyn ImportSource + '_ {
    /// Typed form of [`ImportSource::import_instance`].
    pub fn import<T: ?Sized + Send + Sync + 'static>(&mut self) -> HostResult<Arc<T>> {
        let instance = self.import_instance(CapabilityId::of::<T>())?;
        downcast_part(&instance)
    }

    /// Typed form of [`ImportSource::import_many_instances`].
    pub fn import_many<T: ?Sized + Send + Sync + 'static>(&mut self) -> HostResult<Vec<Arc<T>>> {
        self.import_many_instances(CapabilityId::of::<T>())?
            .iter()
            .map(|instance| downcast_part::<T>(instance))
            .collect()
    }
}

/// Builds a part, pulling its imports from the given source.
pub type PartFactory = fn(&mut dyn ImportSource) -> HostResult<PartInstance>;

/// Declaration of one capability provided by a module.
#[derive(Clone)]
pub struct ExportDescriptor {
    part: &'static str,
    contract: CapabilityId,
    imports: Vec<CapabilityId>,
    factory: PartFactory,
}

impl ExportDescriptor {
    /// Declare that `part` provides the contract `T`.
    pub fn new<T: ?Sized + 'static>(part: &'static str, factory: PartFactory) -> Self {
        Self {
            part,
            contract: CapabilityId::of::<T>(),
            imports: Vec::new(),
            factory,
        }
    }

    /// Record that the part imports `T` (informational; the factory does the import).
    pub fn importing<T: ?Sized + 'static>(mut self) -> Self {
        self.imports.push(CapabilityId::of::<T>());
        self
    }

    pub fn part(&self) -> &'static str {
        self.part
    }

    pub fn contract(&self) -> CapabilityId {
        self.contract
    }

    pub fn imports(&self) -> &[CapabilityId] {
        &self.imports
    }

    pub fn instantiate(&self, source: &mut dyn ImportSource) -> HostResult<PartInstance> {
        (self.factory)(source)
    }
}

impl fmt::Debug for ExportDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportDescriptor")
            .field("part", &self.part)
            .field("contract", &self.contract)
            .field("imports", &self.imports)
            .finish()
    }
}

/// Exports discovered in a single module.
#[derive(Debug, Clone)]
pub struct Catalog {
    origin: String,
    exports: Vec<ExportDescriptor>,
}

impl Catalog {
    pub fn new(origin: impl Into<String>, exports: Vec<ExportDescriptor>) -> Self {
        Self {
            origin: origin.into(),
            exports,
        }
    }

    /// Name of the module the exports were read from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn exports(&self) -> &[ExportDescriptor] {
        &self.exports
    }
}

/// Stable position of an export inside an aggregate catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExportKey {
    catalog: usize,
    export: usize,
}

/// One export seen through the aggregate view.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub key: ExportKey,
    pub origin: &'a str,
    pub export: &'a ExportDescriptor,
}

impl CatalogEntry<'_> {
    /// `origin/part`, used when reporting candidates.
    pub fn qualified_part(&self) -> String {
        format!("{}/{}", self.origin, self.export.part())
    }
}

/// Union of the catalogs of every loaded module.
///
/// Duplicate contracts stay visible; ambiguity is left to the resolver.
#[derive(Debug, Clone, Default)]
pub struct AggregateCatalog {
    catalogs: Vec<Catalog>,
}

impl AggregateCatalog {
    pub fn new(catalogs: impl IntoIterator<Item = Catalog>) -> Self {
        Self {
            catalogs: catalogs.into_iter().collect(),
        }
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Every export in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.catalogs
            .iter()
            .enumerate()
            .flat_map(|(catalog_index, catalog)| {
                catalog
                    .exports
                    .iter()
                    .enumerate()
                    .map(move |(export_index, export)| CatalogEntry {
                        key: ExportKey {
                            catalog: catalog_index,
                            export: export_index,
                        },
                        origin: catalog.origin(),
                        export,
                    })
            })
    }

    /// Exports whose contract is `contract`, in catalog order.
    pub fn exports_for(&self, contract: CapabilityId) -> Vec<CatalogEntry<'_>> {
        self.entries()
            .filter(|entry| entry.export.contract() == contract)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.catalogs.iter().map(|c| c.exports.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
