//! Command handlers
//!
//! One handler per subcommand. Each builds what it needs from the
//! composition root and renders text or NDJSON.

pub mod catalog;
pub mod colors;
pub mod modules;
pub mod options;
pub mod resolve;

pub use catalog::cmd_catalog;
pub use colors::cmd_colors;
pub use modules::cmd_modules;
pub use options::cmd_options;
pub use resolve::cmd_resolve;
