//! Standalone host service provider
//!
//! The ambient service provider used when the editor components run outside
//! the native shell. It only knows the services it was given.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{erase, PartInstance};
use crate::domain::ports::ServiceProvider;

/// Name of the service holding the host application's display name (`str`).
pub const APPLICATION_NAME_SERVICE: &str = "ApplicationName";

pub struct StandaloneHost {
    services: HashMap<String, PartInstance>,
}

impl StandaloneHost {
    pub fn new(application_name: &str) -> Self {
        let mut services = HashMap::new();
        services.insert(
            APPLICATION_NAME_SERVICE.to_string(),
            erase::<str>(Arc::from(application_name)),
        );
        Self { services }
    }

    /// Add or replace a named service.
    pub fn with_service(mut self, name: &str, instance: PartInstance) -> Self {
        self.services.insert(name.to_string(), instance);
        self
    }
}

impl ServiceProvider for StandaloneHost {
    fn service(&self, name: &str) -> Option<PartInstance> {
        self.services.get(name).cloned()
    }
}
