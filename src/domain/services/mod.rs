//! Domain Services
//!
//! Stateless decision logic with no I/O.

pub mod color_storage;

pub use color_storage::{
    known_keys, policy_for, ColorLookup, ColorPolicy, ColorSource, FallbackColorStorage,
    FallbackDataStorageService, DEFAULT_POLICY,
};
