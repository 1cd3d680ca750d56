//! Error types for editor-host
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ModuleLoadError;

/// Result type alias for editor-host operations
pub type HostResult<T> = Result<T, HostError>;

/// Main error type for composition and bootstrap operations
#[derive(Error, Debug)]
pub enum HostError {
    /// A module of the fixed set could not be resolved at the deployment qualifier
    #[error("failed to load module '{reference}'")]
    ModuleLoad {
        reference: String,
        #[source]
        source: ModuleLoadError,
    },

    /// Neither an override nor a catalog export satisfies the request
    #[error("no export satisfies capability '{capability}'")]
    CapabilityNotFound { capability: String },

    /// More than one catalog export satisfies the request
    #[error("capability '{capability}' is ambiguous: {}", candidates.join(", "))]
    CapabilityAmbiguous {
        capability: String,
        candidates: Vec<String>,
    },

    /// A part transitively imports its own contract
    #[error("import cycle detected: {chain}")]
    CompositionCycle { chain: String },

    /// A matched export failed while being instantiated
    #[error("failed to construct part '{part}'")]
    PartConstruction {
        part: String,
        #[source]
        source: Box<HostError>,
    },

    /// An export or override holds a value that does not implement its contract
    #[error("export registered for '{capability}' does not implement it")]
    ContractMismatch { capability: String },

    /// A host service the part depends on is not offered by the host
    #[error("host service '{service}' is not available")]
    ServiceUnavailable { service: String },

    /// An override could not be built during startup
    #[error("cannot inject override for '{capability}': {reason}")]
    OverrideInjection { capability: String, reason: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HostError {
    /// Follow nested part-construction failures down to the error that started them.
    pub fn root_cause(&self) -> &HostError {
        match self {
            HostError::PartConstruction { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
