//! `editor.platform`: content types.

use std::sync::Arc;

use crate::domain::entities::{erase, ExportDescriptor, ImportSource, PartInstance};
use crate::domain::ports::{ContentType, ContentTypeRegistry};
use crate::error::HostResult;

/// (name, base types); `any` is the root of the hierarchy.
const CONTENT_TYPES: &[(&str, &[&str])] = &[
    ("any", &[]),
    ("text", &["any"]),
    ("plaintext", &["text"]),
    ("code", &["text"]),
];

pub fn exports() -> Vec<ExportDescriptor> {
    vec![ExportDescriptor::new::<dyn ContentTypeRegistry>(
        "ContentTypeRegistryImpl",
        content_type_registry,
    )]
}

fn content_type_registry(_imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    Ok(erase::<dyn ContentTypeRegistry>(Arc::new(
        StaticContentTypeRegistry::new(),
    )))
}

pub struct StaticContentTypeRegistry {
    types: Vec<ContentType>,
}

impl StaticContentTypeRegistry {
    pub fn new() -> Self {
        let types = CONTENT_TYPES
            .iter()
            .map(|(name, bases)| ContentType {
                name: name.to_string(),
                base_types: bases.iter().map(|base| base.to_string()).collect(),
            })
            .collect();
        Self { types }
    }
}

impl Default for StaticContentTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTypeRegistry for StaticContentTypeRegistry {
    fn content_type(&self, name: &str) -> Option<ContentType> {
        self.types
            .iter()
            .find(|content_type| content_type.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    fn content_types(&self) -> Vec<ContentType> {
        self.types.clone()
    }
}
