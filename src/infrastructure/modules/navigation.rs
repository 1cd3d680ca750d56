//! `shell.tree-navigation`: the project hierarchy.

use std::sync::Arc;

use crate::domain::entities::{downcast_part, erase, ExportDescriptor, ImportSource, PartInstance};
use crate::domain::ports::{HierarchyItem, HierarchyItemManager, ServiceProvider};
use crate::error::HostResult;
use crate::infrastructure::APPLICATION_NAME_SERVICE;

const DEFAULT_ROOT_NAME: &str = "Solution";

pub fn exports() -> Vec<ExportDescriptor> {
    vec![ExportDescriptor::new::<dyn HierarchyItemManager>(
        "HierarchyItemManager",
        hierarchy_item_manager,
    )
    .importing::<dyn ServiceProvider>()]
}

fn hierarchy_item_manager(imports: &mut dyn ImportSource) -> HostResult<PartInstance> {
    let services = imports.import::<dyn ServiceProvider>()?;
    // The root is named after the host application when it tells us its name.
    let root_name = match services.service(APPLICATION_NAME_SERVICE) {
        Some(instance) => downcast_part::<str>(&instance)?.to_string(),
        None => DEFAULT_ROOT_NAME.to_string(),
    };
    Ok(erase::<dyn HierarchyItemManager>(Arc::new(
        SingleRootHierarchy::new(root_name),
    )))
}

/// A hierarchy holding only its root item.
pub struct SingleRootHierarchy {
    root: HierarchyItem,
}

impl SingleRootHierarchy {
    pub const ROOT_ID: u32 = 0;

    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root: HierarchyItem {
                id: Self::ROOT_ID,
                name: root_name.into(),
            },
        }
    }
}

impl HierarchyItemManager for SingleRootHierarchy {
    fn root(&self) -> Option<HierarchyItem> {
        Some(self.root.clone())
    }

    fn item(&self, id: u32) -> Option<HierarchyItem> {
        (id == self.root.id).then(|| self.root.clone())
    }
}
