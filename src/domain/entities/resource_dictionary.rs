//! Resource Dictionary
//!
//! Label-indexed visual attributes returned by keyed color storage.

use std::collections::BTreeMap;

use crate::domain::value_objects::{Rgb, SolidBrush};

/// Fixed labels callers index a color dictionary by.
pub mod labels {
    pub const BACKGROUND: &str = "Background";
    pub const FOREGROUND: &str = "Foreground";
    pub const BACKGROUND_COLOR: &str = "BackgroundColor";
    pub const FOREGROUND_COLOR: &str = "ForegroundColor";
}

/// A single stored visual attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceValue {
    Brush(SolidBrush),
    Color(Rgb),
}

/// Label → value map; one is allocated per lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDictionary {
    entries: BTreeMap<String, ResourceValue>,
}

impl ResourceDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: ResourceValue) {
        self.entries.insert(label.into(), value);
    }

    /// Store `color` under `prefix` as a brush and under `prefix + "Color"` as raw.
    pub fn set_color(&mut self, prefix: &str, color: Rgb) {
        self.insert(prefix, ResourceValue::Brush(SolidBrush::new(color)));
        self.insert(format!("{prefix}Color"), ResourceValue::Color(color));
    }

    pub fn get(&self, label: &str) -> Option<&ResourceValue> {
        self.entries.get(label)
    }

    pub fn brush(&self, label: &str) -> Option<SolidBrush> {
        match self.get(label)? {
            ResourceValue::Brush(brush) => Some(*brush),
            ResourceValue::Color(_) => None,
        }
    }

    pub fn color(&self, label: &str) -> Option<Rgb> {
        match self.get(label)? {
            ResourceValue::Color(color) => Some(*color),
            ResourceValue::Brush(_) => None,
        }
    }

    pub fn background(&self) -> Option<Rgb> {
        self.color(labels::BACKGROUND_COLOR)
    }

    pub fn foreground(&self) -> Option<Rgb> {
        self.color(labels::FOREGROUND_COLOR)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
