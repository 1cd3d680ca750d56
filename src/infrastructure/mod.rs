//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `modules/` - Built-in editor modules and their resolver
//! - `host` - Standalone service provider
//! - `system_colors` - Ambient system palette

pub mod host;
pub mod modules;
pub mod system_colors;

// Re-export for convenience
pub use host::{StandaloneHost, APPLICATION_NAME_SERVICE};
pub use modules::{all_modules, BuiltinModuleResolver};
pub use system_colors::SystemPalette;
