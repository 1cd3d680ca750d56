//! System palette
//!
//! Fixed light-theme palette standing in for the operating system's colors,
//! with per-role overrides from configuration.

use std::collections::BTreeMap;

use crate::domain::ports::SystemColors;
use crate::domain::value_objects::{Rgb, SystemColorRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPalette {
    colors: BTreeMap<SystemColorRole, Rgb>,
}

impl SystemPalette {
    pub fn default_color(role: SystemColorRole) -> Rgb {
        match role {
            SystemColorRole::Window => Rgb::new(0xFF, 0xFF, 0xFF),
            SystemColorRole::WindowText => Rgb::new(0x00, 0x00, 0x00),
            SystemColorRole::Highlight => Rgb::new(0x33, 0x99, 0xFF),
            SystemColorRole::HighlightText => Rgb::new(0xFF, 0xFF, 0xFF),
            SystemColorRole::Control => Rgb::new(0xF0, 0xF0, 0xF0),
            SystemColorRole::ControlText => Rgb::new(0x00, 0x00, 0x00),
        }
    }

    /// Default palette with `overrides` applied.
    pub fn with_overrides(overrides: &BTreeMap<SystemColorRole, Rgb>) -> Self {
        let mut palette = Self::default();
        palette.colors.extend(overrides);
        palette
    }

    pub fn iter(&self) -> impl Iterator<Item = (SystemColorRole, Rgb)> + '_ {
        self.colors.iter().map(|(role, color)| (*role, *color))
    }
}

impl Default for SystemPalette {
    fn default() -> Self {
        Self {
            colors: SystemColorRole::ALL
                .iter()
                .map(|role| (*role, Self::default_color(*role)))
                .collect(),
        }
    }
}

impl SystemColors for SystemPalette {
    fn color(&self, role: SystemColorRole) -> Rgb {
        self.colors
            .get(&role)
            .copied()
            .unwrap_or_else(|| Self::default_color(role))
    }
}
