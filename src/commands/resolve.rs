//! Resolve command handler

use anyhow::Result;

use editor_host::application::InspectUseCase;
use editor_host::composition::CompositionRoot;
use editor_host::presentation::output;

pub fn cmd_resolve(root: &CompositionRoot, capability: &str, json: bool) -> Result<()> {
    let summary = InspectUseCase::new(root).resolve(capability)?;

    if json {
        output::emit_data("resolve", "resolution", &summary)?;
        return Ok(());
    }

    print!("{}", output::render_resolve(&summary));
    Ok(())
}
