//! Module Reference Value Object
//!
//! A logical module name plus the deployment qualifier needed to resolve it
//! against a specific installation of the editor components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment-specific metadata appended to a logical module name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentQualifier {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_culture")]
    pub culture: String,

    #[serde(default = "default_public_key_token")]
    pub public_key_token: String,

    #[serde(default = "default_processor_architecture")]
    pub processor_architecture: String,
}

impl Default for DeploymentQualifier {
    fn default() -> Self {
        Self {
            version: default_version(),
            culture: default_culture(),
            public_key_token: default_public_key_token(),
            processor_architecture: default_processor_architecture(),
        }
    }
}

fn default_version() -> String {
    "14.0.0.0".to_string()
}

fn default_culture() -> String {
    "neutral".to_string()
}

fn default_public_key_token() -> String {
    "b03f5f7f11d50a3a".to_string()
}

fn default_processor_architecture() -> String {
    "MSIL".to_string()
}

impl DeploymentQualifier {
    /// Suffix appended to a logical name to form a fully-qualified reference.
    pub fn suffix(&self) -> String {
        format!(
            ", Version={}, Culture={}, PublicKeyToken={}, processorArchitecture={}",
            self.version, self.culture, self.public_key_token, self.processor_architecture
        )
    }

    /// Leading component of the dotted version, if it is numeric.
    pub fn major_version(&self) -> Option<u32> {
        self.version.split('.').next()?.parse().ok()
    }
}

/// Fully-qualified load request for one extension module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReference {
    name: String,
    qualifier: DeploymentQualifier,
}

impl ModuleReference {
    pub fn new(name: impl Into<String>, qualifier: DeploymentQualifier) -> Self {
        Self {
            name: name.into(),
            qualifier,
        }
    }

    /// Logical module name (without qualifier).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualifier(&self) -> &DeploymentQualifier {
        &self.qualifier
    }

    /// Name and qualifier combined, e.g.
    /// `editor.text.logic, Version=14.0.0.0, Culture=neutral, ...`.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.qualifier.suffix())
    }
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Why a fully-qualified reference string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceParseError {
    #[error("module reference has no logical name")]
    MissingName,

    #[error("malformed qualifier component '{component}'")]
    MalformedComponent { component: String },

    #[error("unknown qualifier key '{key}'")]
    UnknownKey { key: String },

    #[error("qualifier key '{key}' appears more than once")]
    DuplicateKey { key: String },

    #[error("qualifier is missing '{key}'")]
    MissingKey { key: &'static str },
}

impl FromStr for ModuleReference {
    type Err = ReferenceParseError;

    /// Parse the form produced by [`ModuleReference::full_name`]. Qualifier
    /// components may appear in any order but all four are required.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut components = value.split(", ");
        let name = components.next().unwrap_or_default().trim();
        if name.is_empty() || name.contains('=') {
            return Err(ReferenceParseError::MissingName);
        }

        let mut version = None;
        let mut culture = None;
        let mut public_key_token = None;
        let mut processor_architecture = None;

        for component in components {
            let malformed = || ReferenceParseError::MalformedComponent {
                component: component.to_string(),
            };
            let (key, raw) = component.split_once('=').ok_or_else(malformed)?;
            if raw.is_empty() {
                return Err(malformed());
            }
            let slot = match key {
                "Version" => &mut version,
                "Culture" => &mut culture,
                "PublicKeyToken" => &mut public_key_token,
                "processorArchitecture" => &mut processor_architecture,
                other => {
                    return Err(ReferenceParseError::UnknownKey {
                        key: other.to_string(),
                    })
                }
            };
            if slot.replace(raw.to_string()).is_some() {
                return Err(ReferenceParseError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }

        let require = |slot: Option<String>, key: &'static str| {
            slot.ok_or(ReferenceParseError::MissingKey { key })
        };
        Ok(ModuleReference::new(
            name,
            DeploymentQualifier {
                version: require(version, "Version")?,
                culture: require(culture, "Culture")?,
                public_key_token: require(public_key_token, "PublicKeyToken")?,
                processor_architecture: require(processor_architecture, "processorArchitecture")?,
            },
        ))
    }
}
