use std::path::PathBuf;

use clap::{Parser, Subcommand};

use editor_host::config::parse_version;

/// editor-host - composition bootstrap for editor components
#[derive(Parser, Debug)]
#[command(name = "editor-host")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory to read .editor-host/config.toml from
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Module version to request (overrides config and EDITOR_HOST_VERSION)
    #[arg(long, global = true, value_name = "VERSION", value_parser = deployment_version)]
    pub deployment_version: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Same rule as `EDITOR_HOST_VERSION`: dotted numeric components only.
fn deployment_version(value: &str) -> Result<String, String> {
    parse_version(value)
        .ok_or_else(|| format!("'{}' is not a dotted numeric version such as 14.0.0.0", value))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the editor modules and their fully-qualified references
    Modules,

    /// List every export in the aggregate catalog
    Catalog,

    /// Resolve one capability and show where it came from
    Resolve {
        /// Contract name, e.g. DataStorageService
        capability: String,
    },

    /// Look up text colors through the data storage service
    Colors {
        /// Color keys (defaults to the recognized keys)
        keys: Vec<String>,
    },

    /// Show the global editor options
    Options,
}
