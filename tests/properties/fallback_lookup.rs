//! Property tests for fallback color lookups.

use std::sync::Arc;

use proptest::prelude::*;

use editor_host::domain::services::{known_keys, policy_for, FallbackColorStorage};
use editor_host::domain::value_objects::named;

use crate::common::FakePalette;

fn any_key() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9 _/.\\-]{0,48}").unwrap(),
        any::<String>(),
        proptest::sample::select(known_keys().collect::<Vec<_>>()).prop_map(str::to_string),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every key is found and yields a non-empty dictionary.
    #[test]
    fn property_lookup_always_answers(key in any_key()) {
        let storage = FallbackColorStorage::new(Arc::new(FakePalette));
        let lookup = storage.lookup(&key);

        prop_assert!(lookup.found);
        prop_assert!(lookup.background.is_some() || lookup.foreground.is_some());
        prop_assert!(!storage.resources(&key).is_empty());
    }

    /// PROPERTY: keys outside the table always get Beige on MidnightBlue.
    #[test]
    fn property_unknown_keys_get_default_pair(key in any_key()) {
        prop_assume!(!known_keys().any(|known| known == key));

        let lookup = FallbackColorStorage::new(Arc::new(FakePalette)).lookup(&key);
        prop_assert!(!lookup.recognized);
        prop_assert_eq!(lookup.background, Some(named::BEIGE));
        prop_assert_eq!(lookup.foreground, Some(named::MIDNIGHT_BLUE));
    }

    /// PROPERTY: recognition agrees with the key table.
    #[test]
    fn property_recognition_matches_table(key in any_key()) {
        let (_, recognized) = policy_for(&key);
        prop_assert_eq!(recognized, known_keys().any(|known| known == key));
    }
}
