//! Options command handler

use anyhow::Result;

use editor_host::application::InspectUseCase;
use editor_host::composition::CompositionRoot;
use editor_host::presentation::output;

pub fn cmd_options(root: &CompositionRoot, json: bool) -> Result<()> {
    let options = InspectUseCase::new(root).options()?;

    if json {
        output::emit_data("options", "options", &options)?;
        return Ok(());
    }

    print!("{}", output::render_options(&options));
    Ok(())
}
