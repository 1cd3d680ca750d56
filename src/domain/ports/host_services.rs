//! Ambient host ports
//!
//! Services the host application supplies at process start: a service
//! provider and the system color palette.

use crate::domain::entities::PartInstance;
use crate::domain::value_objects::{Rgb, SystemColorRole};

/// Host-supplied provider of named services.
///
/// Returned instances are erased `Arc<T>` values (see `erase`).
pub trait ServiceProvider: Send + Sync {
    fn service(&self, name: &str) -> Option<PartInstance>;
}

/// Read-only source of named system colors.
pub trait SystemColors: Send + Sync {
    fn color(&self, role: SystemColorRole) -> Rgb;
}
