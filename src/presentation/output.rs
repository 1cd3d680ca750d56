//! Output Rendering
//!
//! Text views for each command and the NDJSON helpers used with `--json`.
//! Text views return strings so they can be tested without a terminal.

use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;
use serde::Serialize;

use crate::application::{CatalogSummary, ColorSummary, ModuleSummary, ResolveSummary};
use crate::domain::ports::EditorOptions;
use crate::domain::value_objects::{Rgb, SolidBrush};

/// Whether stdout should get ANSI colors.
pub fn stdout_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit `{"event": "data", "command": <command>, <field>: <payload>}` on stdout.
pub fn emit_data<T: Serialize>(command: &str, field: &str, payload: &T) -> io::Result<()> {
    let payload =
        serde_json::to_value(payload).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut event = serde_json::Map::new();
    event.insert("event".to_string(), "data".into());
    event.insert("command".to_string(), command.into());
    event.insert(field.to_string(), payload);
    write_event(&mut io::stdout().lock(), &serde_json::Value::Object(event))
}

pub fn render_modules(modules: &[ModuleSummary], verbose: u8) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Editor modules ({})", modules.len());
    let _ = writeln!(out);
    for module in modules {
        match (&module.version, &module.error) {
            (Some(version), _) => {
                let _ = writeln!(
                    out,
                    "  {:<30} {:<14} {} export(s)",
                    module.name, version, module.exports
                );
            }
            (None, error) => {
                let _ = writeln!(
                    out,
                    "  {:<30} error: {}",
                    module.name,
                    error.as_deref().unwrap_or("not loaded")
                );
            }
        }
        if verbose > 0 {
            let _ = writeln!(out, "      {}", module.reference);
        }
    }
    out
}

pub fn render_catalog(catalog: &CatalogSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Catalog ({} exports, {} overrides)",
        catalog.exports.len(),
        catalog.overrides.len()
    );

    let mut current_module: Option<&str> = None;
    for export in &catalog.exports {
        if current_module != Some(export.module.as_str()) {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", export.module);
            current_module = Some(export.module.as_str());
        }
        let _ = write!(out, "  {} -> {}", export.part, export.contract);
        if !export.imports.is_empty() {
            let _ = write!(out, " (imports {})", export.imports.join(", "));
        }
        if export.overridden {
            let _ = write!(out, " [overridden]");
        }
        let _ = writeln!(out);
    }

    if !catalog.overrides.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Overrides");
        for contract in &catalog.overrides {
            let _ = writeln!(out, "  {}", contract);
        }
    }
    out
}

pub fn render_resolve(summary: &ResolveSummary) -> String {
    format!(
        "{}\n  source: {}\n  detail: {}\n",
        summary.capability, summary.source, summary.detail
    )
}

fn hex_or_dash(color: Option<Rgb>) -> String {
    color.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn swatch(background: Option<Rgb>, foreground: Option<Rgb>) -> String {
    let terminal = |color: Option<Rgb>| {
        color
            .map(|c| SolidBrush::new(c).to_terminal())
            .unwrap_or(Color::Reset)
    };
    format!(
        "{} ",
        " Aa ".with(terminal(foreground)).on(terminal(background))
    )
}

pub fn render_colors(colors: &[ColorSummary], color: bool) -> String {
    let mut out = String::new();
    for entry in colors {
        if color {
            out.push_str(&swatch(entry.background, entry.foreground));
        }
        let _ = write!(
            out,
            "{:<26} background {:<8} foreground {}",
            entry.key,
            hex_or_dash(entry.background),
            hex_or_dash(entry.foreground)
        );
        if !entry.recognized {
            let _ = write!(out, " (default)");
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_options(options: &EditorOptions) -> String {
    let mut out = String::new();
    for (key, value) in options.iter() {
        let _ = writeln!(out, "  {:<28} {}", key, value);
    }
    out
}
