//! editor-host - composition bootstrap for editor components
//!
//! Loads a fixed set of editor modules, aggregates their exports into one
//! catalog, and builds a composition container over it. A standalone host
//! registers overrides for the capabilities that only work inside the native
//! shell, including a fallback color storage for text views.

pub mod application;
pub mod composition;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use composition::{Bootstrap, CompositionContainer, CompositionRoot, Resolution};
pub use config::HostConfig;
pub use domain::value_objects::{CapabilityId, DeploymentQualifier, ModuleReference};
pub use error::{HostError, HostResult};
