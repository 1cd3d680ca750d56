//! Modules command handler

use anyhow::Result;

use editor_host::application::InspectUseCase;
use editor_host::composition::CompositionRoot;
use editor_host::presentation::output;

pub fn cmd_modules(root: &CompositionRoot, json: bool, verbose: u8) -> Result<()> {
    let modules = InspectUseCase::new(root).modules();

    if json {
        output::emit_data("modules", "modules", &modules)?;
        return Ok(());
    }

    print!("{}", output::render_modules(&modules, verbose));
    Ok(())
}
