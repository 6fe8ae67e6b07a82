//! Entry point tying the registry to a root section name

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::constants::DEFAULT_CONFIG_SECTION_NAME;
use crate::registry::{ContextRegistry, HealthCheckKind};

/// Resolves health-check settings from configuration trees.
///
/// The registry is shared, so several managers (for instance one per root
/// section) can see the same registrations. The root section name is fixed
/// once the manager is built.
#[derive(Debug, Clone)]
pub struct ConfigurationManager {
    pub(crate) registry: Arc<ContextRegistry>,
    pub(crate) root_section: String,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new(Arc::new(ContextRegistry::new()))
    }
}

impl ConfigurationManager {
    pub fn new(registry: Arc<ContextRegistry>) -> Self {
        Self {
            registry,
            root_section: DEFAULT_CONFIG_SECTION_NAME.to_string(),
        }
    }

    pub fn with_root_section(mut self, root_section: impl Into<String>) -> Self {
        self.root_section = root_section.into();
        self
    }

    pub fn root_section(&self) -> &str {
        &self.root_section
    }

    pub fn registry(&self) -> &Arc<ContextRegistry> {
        &self.registry
    }

    /// See [`ContextRegistry::register`].
    pub fn register<K: HealthCheckKind, C: DeserializeOwned + 'static>(&self) -> bool {
        self.registry.register::<K, C>()
    }
}
