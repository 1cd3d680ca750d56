//! Fallback color storage
//!
//! Keyed color lookup used when the shell's font-and-color storage is not
//! available. Recognized keys map to roles of the ambient system palette;
//! every other key gets a fixed diagnostic pair so that missing entries are
//! visible on screen instead of failing.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{labels, ResourceDictionary};
use crate::domain::ports::{DataStorage, DataStorageService, SystemColors};
use crate::domain::value_objects::{named, Rgb, SystemColorRole};

/// Where one side of a color pair comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    System(SystemColorRole),
    Fixed(Rgb),
}

/// Background/foreground sources for one key. `None` leaves the side unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPolicy {
    pub background: Option<ColorSource>,
    pub foreground: Option<ColorSource>,
}

const KNOWN_KEYS: &[(&str, ColorPolicy)] = &[
    (
        "TextView Background",
        ColorPolicy {
            background: Some(ColorSource::System(SystemColorRole::Window)),
            foreground: None,
        },
    ),
    (
        "Plain Text",
        ColorPolicy {
            background: None,
            foreground: Some(ColorSource::System(SystemColorRole::WindowText)),
        },
    ),
    (
        "Selected Text",
        ColorPolicy {
            background: Some(ColorSource::System(SystemColorRole::Highlight)),
            foreground: Some(ColorSource::System(SystemColorRole::HighlightText)),
        },
    ),
    (
        "Inactive Selected Text",
        ColorPolicy {
            background: Some(ColorSource::System(SystemColorRole::Control)),
            foreground: Some(ColorSource::System(SystemColorRole::ControlText)),
        },
    ),
];

/// Applied to every key missing from the table.
pub const DEFAULT_POLICY: ColorPolicy = ColorPolicy {
    background: Some(ColorSource::Fixed(named::BEIGE)),
    foreground: Some(ColorSource::Fixed(named::MIDNIGHT_BLUE)),
};

/// Keys with a dedicated policy, in table order.
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    KNOWN_KEYS.iter().map(|(key, _)| *key)
}

/// Exact-match policy for `key`, and whether the key was recognized.
pub fn policy_for(key: &str) -> (ColorPolicy, bool) {
    KNOWN_KEYS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, policy)| (*policy, true))
        .unwrap_or((DEFAULT_POLICY, false))
}

/// Result of one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorLookup {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    /// Always `true`; unknown keys resolve to the default pair.
    pub found: bool,
    /// Whether the key had its own policy.
    pub recognized: bool,
}

/// Keyed color storage backed by the ambient system palette.
pub struct FallbackColorStorage {
    system: Arc<dyn SystemColors>,
}

impl FallbackColorStorage {
    pub fn new(system: Arc<dyn SystemColors>) -> Self {
        Self { system }
    }

    pub fn lookup(&self, key: &str) -> ColorLookup {
        let (policy, recognized) = policy_for(key);
        if !recognized {
            debug!(key, "returning default colors for unknown color key");
        }
        ColorLookup {
            background: policy.background.map(|source| self.evaluate(source)),
            foreground: policy.foreground.map(|source| self.evaluate(source)),
            found: true,
            recognized,
        }
    }

    /// Freshly allocated dictionary for `key`.
    pub fn resources(&self, key: &str) -> ResourceDictionary {
        let lookup = self.lookup(key);
        let mut dict = ResourceDictionary::new();
        if let Some(background) = lookup.background {
            dict.set_color(labels::BACKGROUND, background);
        }
        if let Some(foreground) = lookup.foreground {
            dict.set_color(labels::FOREGROUND, foreground);
        }
        dict
    }

    fn evaluate(&self, source: ColorSource) -> Rgb {
        match source {
            ColorSource::System(role) => self.system.color(role),
            ColorSource::Fixed(color) => color,
        }
    }
}

impl DataStorage for FallbackColorStorage {
    fn try_get_item_value(&self, item_key: &str) -> Option<ResourceDictionary> {
        Some(self.resources(item_key))
    }
}

/// Data storage service that answers every storage key with the same
/// fallback storage.
pub struct FallbackDataStorageService {
    storage: Arc<FallbackColorStorage>,
}

impl FallbackDataStorageService {
    pub fn new(system: Arc<dyn SystemColors>) -> Self {
        Self {
            storage: Arc::new(FallbackColorStorage::new(system)),
        }
    }
}

impl DataStorageService for FallbackDataStorageService {
    fn data_storage(&self, _storage_key: &str) -> Arc<dyn DataStorage> {
        self.storage.clone()
    }
}
