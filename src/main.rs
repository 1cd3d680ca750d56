//! editor-host CLI - composition bootstrap for editor components
//!
//! Usage: editor-host <COMMAND>
//!
//! Commands:
//!   modules   List the editor modules and their references
//!   catalog   List every export in the aggregate catalog
//!   resolve   Resolve one capability
//!   colors    Look up text colors
//!   options   Show the global editor options

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use cli::{Cli, Commands};
use editor_host::config::{self, LoadedConfig};
use editor_host::logging;
use editor_host::presentation::factory::create_composition_root;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = match &cli.project {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let LoadedConfig {
        config,
        warnings,
        sources,
    } = config::load_layered(
        config::user_config_path().as_deref(),
        Some(&config::project_config_path(&project_root)),
    )?;

    let mut config = config::with_env_overrides(config);
    if let Some(version) = &cli.deployment_version {
        config.deployment.version = version.clone();
    }

    logging::init(&config.logging.level, cli.verbose);
    debug!(?sources, qualifier = %config.deployment.suffix(), "configuration loaded");
    for warning in &warnings {
        warn!("{}", warning);
    }

    let root = create_composition_root(&config);

    match cli.command {
        Commands::Modules => commands::cmd_modules(&root, cli.json, cli.verbose),
        Commands::Catalog => commands::cmd_catalog(&root, cli.json),
        Commands::Resolve { capability } => commands::cmd_resolve(&root, &capability, cli.json),
        Commands::Colors { keys } => commands::cmd_colors(&root, keys, cli.json),
        Commands::Options => commands::cmd_options(&root, cli.json),
    }
}
