//! Inspection use case
//!
//! Read-only queries over a composition root, shaped for CLI output.

use serde::Serialize;

use super::capabilities::{find_capability, NAMED_CAPABILITIES};
use crate::composition::{module_references, CapabilitySource, CompositionRoot};
use crate::domain::entities::labels;
use crate::domain::ports::{DataStorageService, EditorOptions, EditorOptionsFactory};
use crate::domain::services::policy_for;
use crate::domain::value_objects::Rgb;
use crate::error::{HostError, HostResult};

/// Storage key used when looking up text colors.
pub const TEXT_STORAGE_KEY: &str = "text";

#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub reference: String,
    /// Installed version, if the module resolved
    pub version: Option<String>,
    pub exports: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub module: String,
    pub part: String,
    pub contract: String,
    pub imports: Vec<String>,
    /// The contract is answered by a host override instead
    pub overridden: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub exports: Vec<ExportSummary>,
    /// Overridden contracts, in registration order
    pub overrides: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveSummary {
    pub capability: String,
    /// `override` or `module/part`
    pub source: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorSummary {
    pub key: String,
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub found: bool,
    /// Whether the key has its own entry instead of the default pair
    pub recognized: bool,
}

pub struct InspectUseCase<'a> {
    root: &'a CompositionRoot,
}

impl<'a> InspectUseCase<'a> {
    pub fn new(root: &'a CompositionRoot) -> Self {
        Self { root }
    }

    /// The fixed module set and whether each module resolves.
    ///
    /// Loads modules one by one without building the container, so a broken
    /// module does not hide the others.
    pub fn modules(&self) -> Vec<ModuleSummary> {
        let bootstrap = self.root.bootstrap();
        let names: Vec<&str> = bootstrap.modules.iter().map(String::as_str).collect();

        module_references(&names, &bootstrap.qualifier)
            .into_iter()
            .map(|reference| {
                let loaded = bootstrap.resolver.load(&reference);
                ModuleSummary {
                    name: reference.name().to_string(),
                    reference: reference.full_name(),
                    version: loaded.as_ref().ok().map(|m| m.version().to_string()),
                    exports: loaded.as_ref().map(|m| m.exports().len()).unwrap_or(0),
                    error: loaded.err().map(|e| e.to_string()),
                }
            })
            .collect()
    }

    pub fn catalog(&self) -> HostResult<CatalogSummary> {
        let container = self.root.container()?;
        let exports = container
            .catalog()
            .entries()
            .map(|entry| ExportSummary {
                module: entry.origin.to_string(),
                part: entry.export.part().to_string(),
                contract: entry.export.contract().to_string(),
                imports: entry
                    .export
                    .imports()
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
                overridden: container.is_overridden(entry.export.contract()),
            })
            .collect();
        let overrides = container
            .overridden_contracts()
            .map(|id| id.to_string())
            .collect();
        Ok(CatalogSummary { exports, overrides })
    }

    /// Resolve a capability by contract name and summarize the instance.
    pub fn resolve(&self, name: &str) -> HostResult<ResolveSummary> {
        let capability = find_capability(name).ok_or_else(|| HostError::CapabilityNotFound {
            capability: format!(
                "{} (known: {})",
                name,
                NAMED_CAPABILITIES
                    .iter()
                    .map(|c| c.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })?;
        let container = self.root.container()?;
        let detail = (capability.describe)(&container)?;
        let source = match container.source_of((capability.contract)()) {
            Some(CapabilitySource::Override) => "override".to_string(),
            Some(CapabilitySource::Catalog(part)) => part,
            None => "unknown".to_string(),
        };
        Ok(ResolveSummary {
            capability: capability.name.to_string(),
            source,
            detail,
        })
    }

    /// Colors for each key, looked up through the container's data storage.
    pub fn colors(&self, keys: &[String]) -> HostResult<Vec<ColorSummary>> {
        let storage = self
            .root
            .resolve::<dyn DataStorageService>()?
            .data_storage(TEXT_STORAGE_KEY);

        Ok(keys
            .iter()
            .map(|key| {
                let dict = storage.try_get_item_value(key);
                let (_, recognized) = policy_for(key);
                ColorSummary {
                    key: key.clone(),
                    background: dict.as_ref().and_then(|d| d.color(labels::BACKGROUND_COLOR)),
                    foreground: dict.as_ref().and_then(|d| d.color(labels::FOREGROUND_COLOR)),
                    found: dict.is_some(),
                    recognized,
                }
            })
            .collect())
    }

    pub fn options(&self) -> HostResult<EditorOptions> {
        Ok(self
            .root
            .resolve::<dyn EditorOptionsFactory>()?
            .global_options())
    }
}
