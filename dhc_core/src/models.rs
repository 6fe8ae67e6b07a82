//! Raw configuration records for dynamic health checks

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Everything under the root section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DynamicHealthCheckRoot {
    #[serde(default, alias = "healthchecks")]
    pub health_checks: Vec<DynamicHealthCheckConfig>,
}

// Lowercase aliases accept sources that fold keys, such as environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DynamicHealthCheckConfig {
    #[serde(default, alias = "healthcheckname")]
    pub health_check_name: String,

    #[serde(default, alias = "servicename")]
    pub service_name: String,

    #[serde(default = "enabled_default", alias = "enabled")]
    pub enabled: bool,

    #[serde(default, alias = "tags")]
    pub tags: Vec<String>,

    /// Kind-specific settings, left unbound.
    #[serde(default, alias = "context", skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

fn enabled_default() -> bool {
    true
}

impl DynamicHealthCheckConfig {
    /// Binds the raw context into `C`, or `None` if absent or not bindable.
    pub fn context_as<C: DeserializeOwned>(&self) -> Option<C> {
        self.context
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}

impl DynamicHealthCheckRoot {
    pub fn enabled_checks(&self) -> impl Iterator<Item = &DynamicHealthCheckConfig> {
        self.health_checks.iter().filter(|c| c.enabled)
    }
}
