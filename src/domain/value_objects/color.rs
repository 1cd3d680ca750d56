//! Color Value Objects
//!
//! Raw scalar colors, the renderable brush built from them, and the named
//! roles of the ambient system palette.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw 24-bit color.
///
/// Serialized as a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("'{}' is not a #RRGGBB color", value))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Named colors that are not derived from the system palette.
pub mod named {
    use super::Rgb;

    pub const BEIGE: Rgb = Rgb::new(0xF5, 0xF5, 0xDC);
    pub const MIDNIGHT_BLUE: Rgb = Rgb::new(0x19, 0x19, 0x70);
}

/// Renderable solid fill derived from a raw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidBrush {
    color: Rgb,
}

impl SolidBrush {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Terminal color for drawing this brush.
    pub fn to_terminal(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
        }
    }
}

/// Visual roles of the ambient system palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemColorRole {
    Window,
    WindowText,
    Highlight,
    HighlightText,
    Control,
    ControlText,
}

impl SystemColorRole {
    pub const ALL: [SystemColorRole; 6] = [
        SystemColorRole::Window,
        SystemColorRole::WindowText,
        SystemColorRole::Highlight,
        SystemColorRole::HighlightText,
        SystemColorRole::Control,
        SystemColorRole::ControlText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemColorRole::Window => "window",
            SystemColorRole::WindowText => "window-text",
            SystemColorRole::Highlight => "highlight",
            SystemColorRole::HighlightText => "highlight-text",
            SystemColorRole::Control => "control",
            SystemColorRole::ControlText => "control-text",
        }
    }
}

impl fmt::Display for SystemColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
