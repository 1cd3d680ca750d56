//! Capability identity
//!
//! A capability is identified by the Rust type of its contract, usually a
//! trait object such as `dyn DataStorageService`.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a capability contract.
///
/// Equality and hashing use the `TypeId` only; the type name is kept for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct CapabilityId {
    type_id: TypeId,
    type_name: &'static str,
}

impl CapabilityId {
    /// Identity of the contract type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Fully qualified type name, as reported by the compiler.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Contract name without the `dyn ` prefix or module path.
    ///
    /// `dyn editor_host::domain::ports::DataStorageService` becomes
    /// `DataStorageService`.
    pub fn short_name(&self) -> &'static str {
        let name = self.type_name.trim_start_matches("dyn ");
        let name = name.split('<').next().unwrap_or(name);
        name.rsplit("::").next().unwrap_or(name)
    }
}

impl PartialEq for CapabilityId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for CapabilityId {}

impl Hash for CapabilityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CapabilityId").field(&self.type_name).finish()
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
