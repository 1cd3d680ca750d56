//! Configuration module for editor-host
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EDITOR_HOST_*)
//! 3. Project config (.editor-host/config.toml)
//! 4. User config (<config_dir>/editor-host/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_layered, load_with_warnings, parse_log_level, parse_version, project_config_path,
    user_config_path, with_env_overrides, with_env_overrides_from, ConfigWarning, LoadedConfig,
    ENV_LOG, ENV_VERSION,
};
pub use types::{HostConfig, LoggingConfig, SystemColorsConfig, LOG_LEVELS};
