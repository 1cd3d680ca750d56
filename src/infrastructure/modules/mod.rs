//! Built-in Editor Modules
//!
//! In-process builds of the editor component modules. They implement the
//! `ComponentModule` port so the bootstrap runs end to end without an
//! external module loader.

pub mod implementation;
pub mod navigation;
pub mod platform;
pub mod text;
pub mod utils;

pub use utils::EditorUtilsModule;

use std::sync::Arc;

use crate::domain::entities::ExportDescriptor;
use crate::domain::ports::{ComponentModule, ModuleLoadError, ModuleResolver};
use crate::domain::value_objects::ModuleReference;

/// Version stamped on every built-in module.
pub const BUILD_VERSION: &str = "14.0.23107.0";

/// Major version a qualifier must request to load the built-in modules.
pub const BUILD_MAJOR_VERSION: u32 = 14;

/// Signing key token of the built-in modules.
pub const BUILD_PUBLIC_KEY_TOKEN: &str = "b03f5f7f11d50a3a";

/// A built-in module whose exports come from a plain function.
pub struct BuiltinModule {
    name: &'static str,
    exports: fn() -> Vec<ExportDescriptor>,
}

impl BuiltinModule {
    pub const fn new(name: &'static str, exports: fn() -> Vec<ExportDescriptor>) -> Self {
        Self { name, exports }
    }
}

impl ComponentModule for BuiltinModule {
    fn name(&self) -> &str {
        self.name
    }

    fn version(&self) -> &str {
        BUILD_VERSION
    }

    fn exports(&self) -> Vec<ExportDescriptor> {
        (self.exports)()
    }
}

/// Get all built-in modules
pub fn all_modules() -> Vec<Arc<dyn ComponentModule>> {
    vec![
        Arc::new(BuiltinModule::new("editor.platform", platform::exports)),
        Arc::new(BuiltinModule::new("editor.text.internal", text::internal_exports)),
        Arc::new(BuiltinModule::new("editor.text.logic", text::logic_exports)),
        Arc::new(BuiltinModule::new("editor.text.ui", text::ui_exports)),
        Arc::new(BuiltinModule::new(
            "editor.text.ui.presentation",
            text::presentation_exports,
        )),
        Arc::new(BuiltinModule::new(
            "editor.implementation",
            implementation::exports,
        )),
        Arc::new(BuiltinModule::new("shell.tree-navigation", navigation::exports)),
        Arc::new(EditorUtilsModule),
    ]
}

/// Resolves references against a fixed set of in-process modules.
pub struct BuiltinModuleResolver {
    modules: Vec<Arc<dyn ComponentModule>>,
}

impl BuiltinModuleResolver {
    pub fn new() -> Self {
        Self::with_modules(all_modules())
    }

    pub fn with_modules(modules: Vec<Arc<dyn ComponentModule>>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[Arc<dyn ComponentModule>] {
        &self.modules
    }

    fn check_qualifier(reference: &ModuleReference) -> Result<(), ModuleLoadError> {
        let qualifier = reference.qualifier();
        match qualifier.major_version() {
            Some(BUILD_MAJOR_VERSION) => {}
            _ => {
                return Err(ModuleLoadError::Incompatible {
                    reason: format!(
                        "'{}' requests version {}, installed build is {}",
                        reference.name(),
                        qualifier.version,
                        BUILD_VERSION
                    ),
                })
            }
        }
        if !qualifier
            .public_key_token
            .eq_ignore_ascii_case(BUILD_PUBLIC_KEY_TOKEN)
        {
            return Err(ModuleLoadError::Incompatible {
                reason: format!(
                    "'{}' requests public key token {}, installed build is signed with {}",
                    reference.name(),
                    qualifier.public_key_token,
                    BUILD_PUBLIC_KEY_TOKEN
                ),
            });
        }
        Ok(())
    }
}

impl Default for BuiltinModuleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleResolver for BuiltinModuleResolver {
    fn load(&self, reference: &ModuleReference) -> Result<Arc<dyn ComponentModule>, ModuleLoadError> {
        let module = self
            .modules
            .iter()
            .find(|module| module.name() == reference.name())
            .ok_or_else(|| ModuleLoadError::NotFound {
                name: reference.name().to_string(),
            })?;
        Self::check_qualifier(reference)?;
        Ok(module.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::EDITOR_COMPONENTS;
    use crate::domain::value_objects::DeploymentQualifier;

    fn reference(name: &str) -> ModuleReference {
        ModuleReference::new(name, DeploymentQualifier::default())
    }

    #[test]
    fn every_editor_component_is_built_in() {
        let resolver = BuiltinModuleResolver::new();
        for name in EDITOR_COMPONENTS {
            let module = resolver.load(&reference(name)).unwrap();
            assert_eq!(module.name(), *name);
            assert_eq!(module.version(), BUILD_VERSION);
        }
    }

    #[test]
    fn utils_module_is_loadable_but_not_a_component() {
        let resolver = BuiltinModuleResolver::new();
        assert!(resolver.load(&reference("editor.utils")).is_ok());
        assert!(!EDITOR_COMPONENTS.contains(&"editor.utils"));
    }

    #[test]
    fn unknown_module_is_not_found() {
        let err = BuiltinModuleResolver::new()
            .load(&reference("editor.missing"))
            .err()
            .unwrap();
        assert!(matches!(err, ModuleLoadError::NotFound { ref name } if name == "editor.missing"));
    }

    #[test]
    fn other_major_version_is_incompatible() {
        let qualifier = DeploymentQualifier {
            version: "15.0.0.0".to_string(),
            ..DeploymentQualifier::default()
        };
        let err = BuiltinModuleResolver::new()
            .load(&ModuleReference::new("editor.platform", qualifier))
            .err()
            .unwrap();
        assert!(err.to_string().contains("version 15.0.0.0"), "{}", err);
    }

    #[test]
    fn minor_version_and_token_case_are_ignored() {
        let qualifier = DeploymentQualifier {
            version: "14.9.1.0".to_string(),
            public_key_token: "B03F5F7F11D50A3A".to_string(),
            ..DeploymentQualifier::default()
        };
        assert!(BuiltinModuleResolver::new()
            .load(&ModuleReference::new("editor.platform", qualifier))
            .is_ok());
    }

    #[test]
    fn foreign_token_is_incompatible() {
        let qualifier = DeploymentQualifier {
            public_key_token: "0000000000000000".to_string(),
            ..DeploymentQualifier::default()
        };
        let err = BuiltinModuleResolver::new()
            .load(&ModuleReference::new("editor.platform", qualifier))
            .err()
            .unwrap();
        assert!(matches!(err, ModuleLoadError::Incompatible { .. }));
    }
}
