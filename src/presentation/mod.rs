//! Presentation Layer
//!
//! This layer handles:
//! - Creating the composition root with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Wires the composition root (dependency injection)
//! - `output` - Text views and NDJSON helpers
//!
//! ## Usage
//!
//! ```ignore
//! use editor_host::presentation::factory;
//!
//! let root = factory::create_composition_root(&config);
//! let container = root.container()?;
//! ```

pub mod factory;
pub mod output;

pub use factory::create_composition_root;
