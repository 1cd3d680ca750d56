//! Catalog command handler

use anyhow::Result;

use editor_host::application::InspectUseCase;
use editor_host::composition::CompositionRoot;
use editor_host::presentation::output;

pub fn cmd_catalog(root: &CompositionRoot, json: bool) -> Result<()> {
    let catalog = InspectUseCase::new(root).catalog()?;

    if json {
        output::emit_data("catalog", "catalog", &catalog)?;
        return Ok(());
    }

    print!("{}", output::render_catalog(&catalog));
    Ok(())
}
