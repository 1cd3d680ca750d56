//! Colors command handler

use anyhow::Result;

use editor_host::application::InspectUseCase;
use editor_host::composition::CompositionRoot;
use editor_host::domain::services::known_keys;
use editor_host::presentation::output;

pub fn cmd_colors(root: &CompositionRoot, keys: Vec<String>, json: bool) -> Result<()> {
    let keys = if keys.is_empty() {
        known_keys().map(str::to_string).collect()
    } else {
        keys
    };
    let colors = InspectUseCase::new(root).colors(&keys)?;

    if json {
        output::emit_data("colors", "colors", &colors)?;
        return Ok(());
    }

    print!(
        "{}",
        output::render_colors(&colors, output::stdout_supports_color())
    );
    Ok(())
}
