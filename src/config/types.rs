//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DeploymentQualifier, Rgb, SystemColorRole};

/// Valid `logging.level` shorthands; any other value is used as a raw
/// `EnvFilter` directive.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Qualifier appended to every module reference
    pub deployment: DeploymentQualifier,

    pub system_colors: SystemColorsConfig,

    pub logging: LoggingConfig,
}

/// Per-role overrides of the system palette (`"#RRGGBB"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemColorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_text: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_text: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_text: Option<Rgb>,
}

impl SystemColorsConfig {
    /// The roles that were set, keyed by role.
    pub fn overrides(&self) -> BTreeMap<SystemColorRole, Rgb> {
        [
            (SystemColorRole::Window, self.window),
            (SystemColorRole::WindowText, self.window_text),
            (SystemColorRole::Highlight, self.highlight),
            (SystemColorRole::HighlightText, self.highlight_text),
            (SystemColorRole::Control, self.control),
            (SystemColorRole::ControlText, self.control_text),
        ]
        .into_iter()
        .filter_map(|(role, color)| color.map(|color| (role, color)))
        .collect()
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
