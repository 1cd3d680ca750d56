//! The `editor.text.*` modules: editor option definitions and the options
//! factory that collects them.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{erase, ExportDescriptor, ImportSource, PartInstance};
use crate::domain::ports::{
    EditorOptionDefinition, EditorOptions, EditorOptionsFactory, OptionValue,
};
use crate::error::HostResult;

pub const TAB_SIZE: &str = "Tabs/TabSize";
pub const INDENT_SIZE: &str = "Tabs/IndentSize";
pub const CONVERT_TABS_TO_SPACE: &str = "Tabs/ConvertTabsToSpace";
pub const WORD_WRAP_STYLE: &str = "TextView/WordWrapStyle";
pub const ZOOM_LEVEL: &str = "TextView/ZoomLevel";

/// `editor.text.internal` exports nothing of its own.
pub fn internal_exports() -> Vec<ExportDescriptor> {
    Vec::new()
}

pub fn logic_exports() -> Vec<ExportDescriptor> {
    vec![
        ExportDescriptor::new::<dyn EditorOptionsFactory>("EditorOptionsFactoryService", options_factory)
            .importing::<dyn EditorOptionDefinition>(),
        ExportDescriptor::new::<dyn EditorOptionDefinition>("TabSizeOption", tab_size),
        ExportDescriptor::new::<dyn EditorOptionDefinition>("IndentSizeOption", indent_size),
        ExportDescriptor::new::<dyn EditorOptionDefinition>("ConvertTabsToSpacesOption", convert_tabs),
    ]
}

pub fn ui_exports() -> Vec<ExportDescriptor> {
    vec![ExportDescriptor::new::<dyn EditorOptionDefinition>(
        "WordWrapStyleOption",
        word_wrap_style,
    )]
}

pub fn presentation_exports() -> Vec<ExportDescriptor> {
    vec![ExportDescriptor::new::<dyn EditorOptionDefinition>(
        "ZoomLevelOption",
        zoom_level,
    )]
}

/// Option with a fixed default.
pub struct StaticOption {
    key: &'static str,
    default: OptionValue,
}

impl StaticOption {
    pub fn new(key: &'static str, default: OptionValue) -> Self {
        Self { key, default }
    }
}

impl EditorOptionDefinition for StaticOption {
    fn key(&self) -> &str {
        self.key
    }

    fn default_value(&self) -> OptionValue {
        self.default.clone()
    }
}

fn option(key: &'static str, default: OptionValue) -> HostResult<PartInstance> {
    Ok(erase::<dyn EditorOptionDefinition>(Arc::new(
        StaticOption::new(key, default),
    )))
}

fn tab_size(_imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    option(TAB_SIZE, OptionValue::Int(4))
}

fn indent_size(_imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    option(INDENT_SIZE, OptionValue::Int(4))
}

fn convert_tabs(_imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    option(CONVERT_TABS_TO_SPACE, OptionValue::Bool(true))
}

fn word_wrap_style(_imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    option(WORD_WRAP_STYLE, OptionValue::Text("none".to_string()))
}

fn zoom_level(_imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    option(ZOOM_LEVEL, OptionValue::Int(100))
}

fn options_factory(imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    let definitions = imports.import_many::<dyn EditorOptionDefinition>()?;
    Ok(erase::<dyn EditorOptionsFactory>(Arc::new(
        DefaultEditorOptionsFactory::new(definitions),
    )))
}

/// Options factory over the definitions imported at construction.
pub struct DefaultEditorOptionsFactory {
    definitions: Vec<Arc<dyn EditorOptionDefinition>>,
}

impl DefaultEditorOptionsFactory {
    pub fn new(definitions: Vec<Arc<dyn EditorOptionDefinition>>) -> Self {
        Self { definitions }
    }
}

impl EditorOptionsFactory for DefaultEditorOptionsFactory {
    fn global_options(&self) -> EditorOptions {
        // Later definitions of the same key win.
        let values: BTreeMap<String, OptionValue> = self
            .definitions
            .iter()
            .map(|definition| (definition.key().to_string(), definition.default_value()))
            .collect();
        EditorOptions::new(values)
    }
}
