//! Well-known section and property names

pub const DEFAULT_CONFIG_SECTION_NAME: &str = "DynamicHealthCheck";

pub const PROPERTY_NAME_HEALTH_CHECKS: &str = "HealthChecks";
pub const PROPERTY_NAME_HEALTH_CHECK_NAME: &str = "HealthCheckName";
pub const PROPERTY_NAME_SERVICE_NAME: &str = "ServiceName";
pub const PROPERTY_NAME_CONTEXT: &str = "Context";
