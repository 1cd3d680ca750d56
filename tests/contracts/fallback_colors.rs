//! Contract: fallback color lookups always answer, take recognized keys from
//! the system palette, and hand out a fresh dictionary per call.

use std::sync::Arc;

use editor_host::domain::entities::{labels, ResourceValue};
use editor_host::domain::ports::DataStorageService;
use editor_host::domain::services::{known_keys, FallbackColorStorage, FallbackDataStorageService};
use editor_host::domain::value_objects::{named, Rgb, SolidBrush, SystemColorRole};

use crate::common::FakePalette;

fn storage() -> FallbackColorStorage {
    FallbackColorStorage::new(Arc::new(FakePalette))
}

/// CONTRACT: each recognized key reads exactly the documented palette roles.
#[test]
fn contract_known_keys_map_to_system_roles() {
    let storage = storage();
    let role = FakePalette::color_of;

    let cases: [(&str, Option<Rgb>, Option<Rgb>); 4] = [
        ("TextView Background", Some(role(SystemColorRole::Window)), None),
        ("Plain Text", None, Some(role(SystemColorRole::WindowText))),
        (
            "Selected Text",
            Some(role(SystemColorRole::Highlight)),
            Some(role(SystemColorRole::HighlightText)),
        ),
        (
            "Inactive Selected Text",
            Some(role(SystemColorRole::Control)),
            Some(role(SystemColorRole::ControlText)),
        ),
    ];

    for (key, background, foreground) in cases {
        let lookup = storage.lookup(key);
        assert!(lookup.found, "{key}");
        assert!(lookup.recognized, "{key}");
        assert_eq!(lookup.background, background, "{key}");
        assert_eq!(lookup.foreground, foreground, "{key}");
    }
    assert_eq!(known_keys().count(), cases.len());
}

/// CONTRACT: unknown keys are found and carry Beige on MidnightBlue.
#[test]
fn contract_unknown_key_gets_default_pair() {
    let lookup = storage().lookup("NonsenseKey123");
    assert!(lookup.found);
    assert!(!lookup.recognized);
    assert_eq!(lookup.background, Some(Rgb::new(0xF5, 0xF5, 0xDC)));
    assert_eq!(lookup.foreground, Some(Rgb::new(0x19, 0x19, 0x70)));
    assert_eq!(lookup.background, Some(named::BEIGE));
    assert_eq!(lookup.foreground, Some(named::MIDNIGHT_BLUE));
}

/// CONTRACT: keys match exactly; case and whitespace variants fall back.
#[test]
fn contract_key_matching_is_exact() {
    let storage = storage();
    for key in ["selected text", "Selected Text ", "SelectedText", ""] {
        let lookup = storage.lookup(key);
        assert!(!lookup.recognized, "{key:?}");
        assert_eq!(lookup.background, Some(named::BEIGE), "{key:?}");
    }
}

/// CONTRACT: a dictionary holds a brush and a raw color per side that is set.
#[test]
fn contract_dictionary_labels() {
    let dict = storage().resources("Selected Text");
    let highlight = FakePalette::color_of(SystemColorRole::Highlight);
    let highlight_text = FakePalette::color_of(SystemColorRole::HighlightText);

    assert_eq!(
        dict.get(labels::BACKGROUND),
        Some(&ResourceValue::Brush(SolidBrush::new(highlight)))
    );
    assert_eq!(
        dict.get(labels::BACKGROUND_COLOR),
        Some(&ResourceValue::Color(highlight))
    );
    assert_eq!(
        dict.get(labels::FOREGROUND),
        Some(&ResourceValue::Brush(SolidBrush::new(highlight_text)))
    );
    assert_eq!(
        dict.get(labels::FOREGROUND_COLOR),
        Some(&ResourceValue::Color(highlight_text))
    );

    let plain = storage().resources("Plain Text");
    assert_eq!(plain.len(), 2);
    assert!(plain.get(labels::BACKGROUND).is_none());
}

/// CONTRACT: every lookup allocates a new dictionary; mutating one leaves
/// later lookups untouched.
#[test]
fn contract_lookup_returns_fresh_dictionary() {
    let service = FallbackDataStorageService::new(Arc::new(FakePalette));
    let storage = service.data_storage("text");

    let mut first = storage.try_get_item_value("Plain Text").unwrap();
    first.set_color(labels::FOREGROUND, Rgb::new(0xAB, 0xCD, 0xEF));

    let second = storage.try_get_item_value("Plain Text").unwrap();
    assert_eq!(
        second.foreground(),
        Some(FakePalette::color_of(SystemColorRole::WindowText))
    );
    assert_ne!(first, second);
}

/// CONTRACT: the data storage service never returns `None` for any storage key.
#[test]
fn contract_every_storage_key_answers() {
    let service = FallbackDataStorageService::new(Arc::new(FakePalette));
    for storage_key in ["text", "Output Window", ""] {
        assert!(service
            .data_storage(storage_key)
            .try_get_item_value("Selected Text")
            .is_some());
    }
}
