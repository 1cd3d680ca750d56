//! Configuration loading
//!
//! Each config file is parsed on its own to collect unknown-key warnings, then
//! the files are deep-merged in priority order and deserialized once.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{HostConfig, LOG_LEVELS};
use crate::error::{HostError, HostResult};

/// Overrides `deployment.version`
pub const ENV_VERSION: &str = "EDITOR_HOST_VERSION";
/// Overrides `logging.level`
pub const ENV_LOG: &str = "EDITOR_HOST_LOG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Merged configuration plus what was learned while loading it.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: HostConfig,
    pub warnings: Vec<ConfigWarning>,
    /// Files that contributed, lowest priority first
    pub sources: Vec<PathBuf>,
}

/// `<config_dir>/editor-host/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("editor-host").join("config.toml"))
}

/// `<root>/.editor-host/config.toml`
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(".editor-host").join("config.toml")
}

/// Load a single file and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> HostResult<(HostConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (config, warnings, _) = parse_file(path, &content)?;
    Ok((config, warnings))
}

/// Load user then project config over the defaults. Missing files are skipped.
pub fn load_layered(user: Option<&Path>, project: Option<&Path>) -> HostResult<LoadedConfig> {
    let mut merged = toml::Table::new();
    let mut loaded = LoadedConfig::default();

    for path in [user, project].into_iter().flatten() {
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(path)?;
        let (_, warnings, table) = parse_file(path, &content)?;
        merge_tables(&mut merged, table);
        loaded.warnings.extend(warnings);
        loaded.sources.push(path.to_path_buf());
    }

    // Both layers already deserialized on their own, so a failure here can
    // only come from the combination.
    loaded.config = toml::Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| HostError::Config {
            file: loaded.sources.last().cloned().unwrap_or_default(),
            message: e.to_string(),
        })?;
    Ok(loaded)
}

/// Apply environment variable overrides (`EDITOR_HOST_*`)
pub fn with_env_overrides(config: HostConfig) -> HostConfig {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Same as [`with_env_overrides`] with an explicit variable lookup.
pub fn with_env_overrides_from<F>(mut config: HostConfig, lookup: F) -> HostConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(version) = lookup(ENV_VERSION) {
        let current = config.deployment.version.clone();
        config.deployment.version =
            EnvVarValidator::new(ENV_VERSION, &["14.0.0.0"]).parse(&version, parse_version, current);
    }

    if let Some(level) = lookup(ENV_LOG) {
        let current = config.logging.level.clone();
        config.logging.level =
            EnvVarValidator::new(ENV_LOG, LOG_LEVELS).parse(&level, parse_log_level, current);
    }

    config
}

/// Dotted version whose components are all numeric, e.g. `14.0.0.0`.
pub fn parse_version(value: &str) -> Option<String> {
    let value = value.trim();
    let valid = !value.is_empty()
        && value
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    valid.then(|| value.to_string())
}

/// A level shorthand, or a directive such as `editor_host=debug`.
pub fn parse_log_level(value: &str) -> Option<String> {
    let value = value.trim().to_lowercase();
    let is_directive = value.contains('=') || value.contains(',');
    (LOG_LEVELS.contains(&value.as_str()) || is_directive).then_some(value)
}

fn parse_file(path: &Path, content: &str) -> HostResult<(HostConfig, Vec<ConfigWarning>, toml::Table)> {
    let config_error = |message: String| HostError::Config {
        file: path.to_path_buf(),
        message,
    };

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let config: HostConfig =
        serde_ignored::deserialize(toml::Value::Table(table.clone()), |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| config_error(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &leaf),
                suggestion: suggest_key(&leaf),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings, table))
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                    continue;
                }
                base.insert(key, toml::Value::Table(incoming));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|index| index + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deployment",
        "version",
        "culture",
        "public_key_token",
        "processor_architecture",
        "system_colors",
        "window",
        "window_text",
        "highlight",
        "highlight_text",
        "control",
        "control_text",
        "logging",
        "level",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
