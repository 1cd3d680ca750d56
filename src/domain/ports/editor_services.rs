//! Editor capability contracts
//!
//! The contracts the composition container resolves. Modules export
//! implementations of these; the host may override some of them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{PartInstance, ResourceDictionary};

/// Hands out keyed storages of visual attributes.
pub trait DataStorageService: Send + Sync {
    fn data_storage(&self, storage_key: &str) -> Arc<dyn DataStorage>;
}

/// Keyed visual attribute storage.
pub trait DataStorage: Send + Sync {
    /// Attributes stored for `item_key`, or `None` if the storage has none.
    fn try_get_item_value(&self, item_key: &str) -> Option<ResourceDictionary>;
}

/// Per-context undo histories.
pub trait TextUndoHistoryRegistry: Send + Sync {
    /// History for `context`, created on first registration.
    fn register_history(&self, context: &str) -> Arc<dyn TextUndoHistory>;

    fn try_get_history(&self, context: &str) -> Option<Arc<dyn TextUndoHistory>>;

    /// Returns whether a history was registered for `context`.
    fn remove_history(&self, context: &str) -> bool;
}

/// Undo/redo stack of transaction descriptions.
pub trait TextUndoHistory: Send + Sync {
    fn push(&self, description: &str);
    fn undo(&self) -> Option<String>;
    fn redo(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
}

/// COM-style class factory offered only inside the native shell.
pub trait LocalRegistry: Send + Sync {
    fn create_instance(&self, class_name: &str) -> Option<PartInstance>;
}

/// A content type known to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentType {
    pub name: String,
    pub base_types: Vec<String>,
}

pub trait ContentTypeRegistry: Send + Sync {
    fn content_type(&self, name: &str) -> Option<ContentType>;
    fn content_types(&self) -> Vec<ContentType>;
}

/// Value of an editor option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{}", value),
            OptionValue::Int(value) => write!(f, "{}", value),
            OptionValue::Text(value) => f.write_str(value),
        }
    }
}

/// One editor option, exported by whichever module owns it.
pub trait EditorOptionDefinition: Send + Sync {
    /// Option key, e.g. `Tabs/TabSize`
    fn key(&self) -> &str;
    fn default_value(&self) -> OptionValue;
}

/// Resolved option values keyed by option key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EditorOptions {
    values: BTreeMap<String, OptionValue>,
}

impl EditorOptions {
    pub fn new(values: BTreeMap<String, OptionValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub trait EditorOptionsFactory: Send + Sync {
    /// Defaults of every option definition found in the catalog.
    fn global_options(&self) -> EditorOptions;
}

/// Node of the host's project hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyItem {
    pub id: u32,
    pub name: String,
}

pub trait HierarchyItemManager: Send + Sync {
    fn root(&self) -> Option<HierarchyItem>;
    fn item(&self, id: u32) -> Option<HierarchyItem>;
}
