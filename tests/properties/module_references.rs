//! Property tests for fully-qualified module references.

use proptest::prelude::*;

use editor_host::composition::module_references;
use editor_host::domain::value_objects::{DeploymentQualifier, ModuleReference};

fn module_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,10}(\\.[a-z][a-z0-9\\-]{0,10}){0,3}").unwrap()
}

fn qualifier() -> impl Strategy<Value = DeploymentQualifier> {
    (
        proptest::string::string_regex("[0-9]{1,2}(\\.[0-9]{1,5}){0,3}").unwrap(),
        proptest::sample::select(vec!["neutral", "en-US"]),
        proptest::string::string_regex("[0-9a-f]{16}").unwrap(),
    )
        .prop_map(|(version, culture, token)| DeploymentQualifier {
            version,
            culture: culture.to_string(),
            public_key_token: token,
            ..DeploymentQualifier::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a full name is the logical name followed by the qualifier suffix.
    #[test]
    fn property_full_name_is_name_plus_suffix(name in module_name(), qualifier in qualifier()) {
        let reference = ModuleReference::new(name.clone(), qualifier.clone());
        let full = reference.full_name();

        prop_assert!(full.starts_with(&name));
        prop_assert!(full.ends_with(&qualifier.suffix()));
        prop_assert_eq!(full.len(), name.len() + qualifier.suffix().len());
        let version_part = format!("Version={},", qualifier.version);
        prop_assert!(full.contains(&version_part));
    }

    /// PROPERTY: a full name parses back into an equal reference.
    #[test]
    fn property_full_name_parses_back(name in module_name(), qualifier in qualifier()) {
        let reference = ModuleReference::new(name, qualifier);
        let parsed: ModuleReference = reference.full_name().parse().unwrap();
        prop_assert_eq!(parsed, reference);
    }

    /// PROPERTY: references keep the order and names of the module list.
    #[test]
    fn property_references_preserve_order(
        names in proptest::collection::vec(module_name(), 0..8),
        qualifier in qualifier(),
    ) {
        let borrowed: Vec<&str> = names.iter().map(String::as_str).collect();
        let references = module_references(&borrowed, &qualifier);

        prop_assert_eq!(references.len(), names.len());
        for (reference, name) in references.iter().zip(&names) {
            prop_assert_eq!(reference.name(), name.as_str());
            prop_assert_eq!(reference.qualifier(), &qualifier);
        }
    }
}
