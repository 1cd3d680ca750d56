//! `editor.utils`: editor utilities.
//!
//! Exports nothing publicly. Its basic undo history registry is offered to
//! trusted hosts through the internal-part table.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::BUILD_VERSION;
use crate::domain::entities::{erase, ExportDescriptor, PartInstance};
use crate::domain::ports::{ComponentModule, InternalPart, TextUndoHistory, TextUndoHistoryRegistry};
use crate::domain::value_objects::CapabilityId;

pub struct EditorUtilsModule;

impl ComponentModule for EditorUtilsModule {
    fn name(&self) -> &str {
        "editor.utils"
    }

    fn version(&self) -> &str {
        BUILD_VERSION
    }

    fn exports(&self) -> Vec<ExportDescriptor> {
        Vec::new()
    }

    fn internal_parts(&self) -> Vec<InternalPart> {
        vec![InternalPart {
            type_name: "BasicUndo.BasicTextUndoHistoryRegistry",
            contract: CapabilityId::of::<dyn TextUndoHistoryRegistry>(),
            contract_version: 1,
            construct: new_basic_registry,
        }]
    }
}

fn new_basic_registry() -> PartInstance {
    erase::<dyn TextUndoHistoryRegistry>(Arc::new(BasicTextUndoHistoryRegistry::default()))
}

/// In-memory registry, one history per context.
#[derive(Default)]
pub struct BasicTextUndoHistoryRegistry {
    histories: Mutex<HashMap<String, Arc<BasicUndoHistory>>>,
}

impl TextUndoHistoryRegistry for BasicTextUndoHistoryRegistry {
    fn register_history(&self, context: &str) -> Arc<dyn TextUndoHistory> {
        self.histories
            .lock()
            .entry(context.to_string())
            .or_default()
            .clone()
    }

    fn try_get_history(&self, context: &str) -> Option<Arc<dyn TextUndoHistory>> {
        self.histories
            .lock()
            .get(context)
            .map(|history| history.clone() as Arc<dyn TextUndoHistory>)
    }

    fn remove_history(&self, context: &str) -> bool {
        self.histories.lock().remove(context).is_some()
    }
}

#[derive(Default)]
struct UndoStacks {
    undo: Vec<String>,
    redo: Vec<String>,
}

#[derive(Default)]
pub struct BasicUndoHistory {
    stacks: Mutex<UndoStacks>,
}

impl TextUndoHistory for BasicUndoHistory {
    fn push(&self, description: &str) {
        let mut stacks = self.stacks.lock();
        stacks.undo.push(description.to_string());
        stacks.redo.clear();
    }

    fn undo(&self) -> Option<String> {
        let mut stacks = self.stacks.lock();
        let description = stacks.undo.pop()?;
        stacks.redo.push(description.clone());
        Some(description)
    }

    fn redo(&self) -> Option<String> {
        let mut stacks = self.stacks.lock();
        let description = stacks.redo.pop()?;
        stacks.undo.push(description.clone());
        Some(description)
    }

    fn can_undo(&self) -> bool {
        !self.stacks.lock().undo.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.stacks.lock().redo.is_empty()
    }
}
