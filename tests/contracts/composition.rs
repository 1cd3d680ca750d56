//! Contract: the composition root builds one container, overrides beat
//! catalog exports, and a failed build can be retried.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use editor_host::composition::{
    Bootstrap, CapabilitySource, CompositionRoot, HostEnvironment, EDITOR_COMPONENTS,
};
use editor_host::domain::entities::ExportDescriptor;
use editor_host::domain::ports::{
    ComponentModule, DataStorageService, HierarchyItemManager, ModuleLoadError, ModuleResolver,
    TextUndoHistoryRegistry,
};
use editor_host::domain::value_objects::{CapabilityId, DeploymentQualifier, ModuleReference};
use editor_host::infrastructure::modules::EditorUtilsModule;
use editor_host::infrastructure::{BuiltinModuleResolver, StandaloneHost, SystemPalette};
use editor_host::HostError;

/// Counts loads and fails the first `fail_first` of them.
struct CountingResolver {
    loads: AtomicUsize,
    fail_first: AtomicUsize,
    inner: BuiltinModuleResolver,
}

impl CountingResolver {
    fn new(fail_first: usize) -> Arc<Self> {
        Arc::new(Self {
            loads: AtomicUsize::new(0),
            fail_first: AtomicUsize::new(fail_first),
            inner: BuiltinModuleResolver::new(),
        })
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModuleResolver for CountingResolver {
    fn load(&self, reference: &ModuleReference) -> Result<Arc<dyn ComponentModule>, ModuleLoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .fail_first
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(ModuleLoadError::NotFound {
                name: reference.name().to_string(),
            });
        }
        self.inner.load(reference)
    }
}

/// A utils build that no longer carries the undo registry.
struct StrippedUtils;

impl ComponentModule for StrippedUtils {
    fn name(&self) -> &str {
        "editor.utils"
    }

    fn version(&self) -> &str {
        "15.0.0.0"
    }

    fn exports(&self) -> Vec<ExportDescriptor> {
        Vec::new()
    }
}

fn bootstrap(resolver: Arc<dyn ModuleResolver>) -> Bootstrap {
    Bootstrap {
        resolver,
        modules: EDITOR_COMPONENTS.iter().map(|s| s.to_string()).collect(),
        qualifier: DeploymentQualifier::default(),
        environment: HostEnvironment {
            services: Arc::new(StandaloneHost::new("contracts")),
            system_colors: Arc::new(SystemPalette::default()),
        },
        utils: Arc::new(EditorUtilsModule),
    }
}

/// CONTRACT: concurrent first access constructs the container exactly once.
#[test]
fn contract_concurrent_first_access_builds_once() {
    let resolver = CountingResolver::new(0);
    let root = CompositionRoot::new(bootstrap(resolver.clone()));
    let callers = 8;
    let start = Barrier::new(callers);

    let containers: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..callers)
            .map(|_| {
                scope.spawn(|| {
                    start.wait();
                    root.container().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(containers
        .windows(2)
        .all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    assert_eq!(resolver.loads(), EDITOR_COMPONENTS.len());
}

/// CONTRACT: an override answers its contract even when the catalog exports it.
#[test]
fn contract_override_precedence() {
    let root = CompositionRoot::new(bootstrap(CountingResolver::new(0)));
    let container = root.container().unwrap();

    for contract in [
        CapabilityId::of::<dyn DataStorageService>(),
        CapabilityId::of::<dyn TextUndoHistoryRegistry>(),
    ] {
        assert_eq!(container.catalog().exports_for(contract).len(), 1);
        assert_eq!(container.source_of(contract), Some(CapabilitySource::Override));
    }

    // The shell-backed exports cannot be built here; resolving succeeds
    // only because the overrides answer first.
    let storage = container.resolve::<dyn DataStorageService>().unwrap();
    assert!(storage
        .data_storage("text")
        .try_get_item_value("Selected Text")
        .is_some());
    assert_eq!(container.resolve_many::<dyn DataStorageService>().unwrap().len(), 1);
}

/// CONTRACT: catalog parts importing an overridden contract receive the override.
#[test]
fn contract_catalog_imports_see_overrides() {
    let root = CompositionRoot::new(bootstrap(CountingResolver::new(0)));
    let manager = root.resolve::<dyn HierarchyItemManager>().unwrap();
    assert_eq!(manager.root().unwrap().name, "contracts");
}

/// CONTRACT: a failed load leaves the root unconstructed and the next call retries.
#[test]
fn contract_load_failure_is_retryable() {
    let resolver = CountingResolver::new(1);
    let root = CompositionRoot::new(bootstrap(resolver.clone()));

    let err = root.container().unwrap_err();
    assert!(matches!(
        err,
        HostError::ModuleLoad { ref reference, source: ModuleLoadError::NotFound { .. } }
            if reference.starts_with("editor.platform, Version=14.0.0.0")
    ));
    assert!(!root.is_constructed());
    assert_eq!(resolver.loads(), 1);

    root.container().unwrap();
    assert!(root.is_constructed());
    assert_eq!(resolver.loads(), 1 + EDITOR_COMPONENTS.len());
}

/// CONTRACT: a qualifier the installed modules do not satisfy is fatal every time.
#[test]
fn contract_incompatible_qualifier_is_fatal() {
    let mut bootstrap = bootstrap(Arc::new(BuiltinModuleResolver::new()));
    bootstrap.qualifier.version = "15.0.0.0".to_string();
    let root = CompositionRoot::new(bootstrap);

    for _ in 0..2 {
        let err = root.container().unwrap_err();
        assert!(matches!(
            err,
            HostError::ModuleLoad {
                source: ModuleLoadError::Incompatible { .. },
                ..
            }
        ));
        assert!(!root.is_constructed());
    }
}

/// CONTRACT: a utils module without the internal registry aborts construction.
#[test]
fn contract_missing_internal_part_is_fatal() {
    let mut bootstrap = bootstrap(Arc::new(BuiltinModuleResolver::new()));
    bootstrap.utils = Arc::new(StrippedUtils);
    let root = CompositionRoot::new(bootstrap);

    let err = root.container().unwrap_err();
    assert!(matches!(err, HostError::OverrideInjection { .. }), "{}", err);
    assert!(err.to_string().contains("15.0.0.0"), "{}", err);
    assert!(!root.is_constructed());
}
