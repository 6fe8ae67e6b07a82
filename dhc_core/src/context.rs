//! Typed context resolution

use config::Config;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::constants::{PROPERTY_NAME_CONTEXT, PROPERTY_NAME_SERVICE_NAME};
use crate::error::{DynamicHealthCheckError, Result};
use crate::manager::ConfigurationManager;
use crate::navigator::{health_checks_section, ConfigSection};
use crate::registry::HealthCheckKind;

impl ConfigurationManager {
    /// Binds the `Context` of one configured entry of kind `K` into `C`.
    ///
    /// With no service name (or an empty one) the first entry is used.
    /// Otherwise the first entry whose `ServiceName` equals `service_name`
    /// wins; duplicates further down are never seen.
    pub fn context<K, C>(&self, tree: &Config, service_name: Option<&str>) -> Result<C>
    where
        K: HealthCheckKind,
        C: DeserializeOwned + 'static,
    {
        self.registry.verify::<K, C>()?;

        let service_name = service_name.unwrap_or_default();
        let context = health_checks_section(tree, &self.root_section)
            .children()
            .into_iter()
            .find(|entry| matches_service(entry, service_name))
            .and_then(|entry| entry.section(PROPERTY_NAME_CONTEXT).bind::<C>());

        context.ok_or_else(|| {
            warn!(
                kind = K::kind_name(),
                service = service_name,
                root = %self.root_section,
                "No bindable context for health check"
            );
            DynamicHealthCheckError::mismatch(K::kind_name())
        })
    }

    /// Binds every configured `Context` into `C`, in document order.
    ///
    /// Entries without a bindable context are skipped, so the result may be
    /// shorter than the list (or empty).
    pub fn contexts<K, C>(&self, tree: &Config) -> Result<Vec<C>>
    where
        K: HealthCheckKind,
        C: DeserializeOwned + 'static,
    {
        self.registry.verify::<K, C>()?;

        let contexts = health_checks_section(tree, &self.root_section)
            .children()
            .iter()
            .filter_map(|entry| {
                let context = entry.section(PROPERTY_NAME_CONTEXT).bind::<C>();
                if context.is_none() {
                    debug!(
                        kind = K::kind_name(),
                        entry = entry.key(),
                        "Skipping entry without context"
                    );
                }
                context
            })
            .collect();

        Ok(contexts)
    }
}

fn matches_service(entry: &ConfigSection, service_name: &str) -> bool {
    entry.children().iter().any(|child| {
        service_name.is_empty()
            || (child.key().eq_ignore_ascii_case(PROPERTY_NAME_SERVICE_NAME)
                && child.value().as_deref() == Some(service_name))
    })
}
