//! Domain Layer
//!
//! Capability identity, catalogs, the ports the host implements, and the
//! fallback color policy. Nothing here loads modules or touches the host.
//!
//! ## Structure
//!
//! - `entities/` - Catalogs and resource dictionaries
//! - `value_objects/` - Capability ids, module references, colors
//! - `services/` - Fallback color storage
//! - `ports/` - Interface definitions for the host and the editor contracts

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
