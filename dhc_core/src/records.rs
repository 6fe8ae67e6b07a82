//! Raw configuration record lookup
//!
//! Nothing here consults the registry: records are matched by the kind's name.

use config::Config;
use tracing::warn;

use crate::error::{DynamicHealthCheckError, Result};
use crate::manager::ConfigurationManager;
use crate::models::{DynamicHealthCheckConfig, DynamicHealthCheckRoot};
use crate::navigator::{health_checks_section, root_section};
use crate::registry::HealthCheckKind;

impl ConfigurationManager {
    /// The whole root section, or `None` when it is missing or unbindable.
    pub fn raw(&self, tree: &Config) -> Option<DynamicHealthCheckRoot> {
        root_section(tree, &self.root_section).bind()
    }

    /// All records whose `HealthCheckName` is `K`'s name, in document order.
    /// Entries that do not bind as a record are left out.
    pub fn configs<K: HealthCheckKind>(&self, tree: &Config) -> Vec<DynamicHealthCheckConfig> {
        health_checks_section(tree, &self.root_section)
            .children()
            .iter()
            .filter_map(|entry| entry.bind::<DynamicHealthCheckConfig>())
            .filter(|config| config.health_check_name == K::kind_name())
            .collect()
    }

    /// The first record of kind `K` configured for `service_name`.
    pub fn config<K: HealthCheckKind>(
        &self,
        tree: &Config,
        service_name: &str,
    ) -> Result<DynamicHealthCheckConfig> {
        self.configs::<K>(tree)
            .into_iter()
            .find(|config| config.service_name == service_name)
            .ok_or_else(|| {
                warn!(
                    kind = K::kind_name(),
                    service = service_name,
                    root = %self.root_section,
                    "No configuration record for health check"
                );
                DynamicHealthCheckError::mismatch(K::kind_name())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    struct QueueDepth;
    impl HealthCheckKind for QueueDepth {}

    struct DiskSpace;
    impl HealthCheckKind for DiskSpace {}

    const SAMPLE: &str = r#"
DynamicHealthCheck:
  HealthChecks:
    - HealthCheckName: QueueDepth
      ServiceName: ingest
      Tags: [queue, critical]
      Context: { max_depth: 100 }
    - HealthCheckName: DiskSpace
      ServiceName: ingest
      Enabled: false
    - ServiceName: orphan
    - HealthCheckName: QueueDepth
      ServiceName: export
"#;

    fn tree() -> Config {
        Config::builder()
            .add_source(File::from_str(SAMPLE, FileFormat::Yaml))
            .build()
            .unwrap()
    }

    #[test]
    fn test_configs_filters_by_kind_name() {
        let manager = ConfigurationManager::default();
        let services: Vec<String> = manager
            .configs::<QueueDepth>(&tree())
            .into_iter()
            .map(|c| c.service_name)
            .collect();

        assert_eq!(services, vec!["ingest", "export"]);
    }

    #[test]
    fn test_config_keeps_flags_and_tags() {
        let manager = ConfigurationManager::default();

        let queue = manager.config::<QueueDepth>(&tree(), "ingest").unwrap();
        assert!(queue.enabled);
        assert_eq!(queue.tags, vec!["queue", "critical"]);
        assert!(queue.context.is_some());

        let disk = manager.config::<DiskSpace>(&tree(), "ingest").unwrap();
        assert!(!disk.enabled);
        assert!(disk.context.is_none());
    }

    #[test]
    fn test_config_kind_and_service_must_both_match() {
        let manager = ConfigurationManager::default();
        let err = manager.config::<DiskSpace>(&tree(), "export").unwrap_err();
        assert!(err.is_configuration_mismatch());
        assert!(err.to_string().contains("DiskSpace"));
    }

    #[test]
    fn test_raw_keeps_entries_without_health_check_name() {
        let manager = ConfigurationManager::default();
        let root = manager.raw(&tree()).unwrap();

        let services: Vec<&str> = root
            .health_checks
            .iter()
            .map(|c| c.service_name.as_str())
            .collect();
        assert_eq!(services, vec!["ingest", "ingest", "orphan", "export"]);
        assert_eq!(root.health_checks[2].health_check_name, "");
    }

    #[test]
    fn test_nameless_entry_never_matches_a_kind() {
        let manager = ConfigurationManager::default();
        let err = manager.config::<QueueDepth>(&tree(), "orphan").unwrap_err();
        assert!(err.is_configuration_mismatch());
    }

    #[test]
    fn test_raw_is_none_on_type_error() {
        let config = Config::builder()
            .add_source(File::from_str(
                r#"
DynamicHealthCheck:
  HealthChecks:
    - HealthCheckName: QueueDepth
      ServiceName: ingest
      Enabled: notabool
"#,
                FileFormat::Yaml,
            ))
            .build()
            .unwrap();

        let manager = ConfigurationManager::default();
        assert!(manager.raw(&config).is_none());
    }

    #[test]
    fn test_raw_missing_root_is_none() {
        let manager = ConfigurationManager::default().with_root_section("Absent");
        assert!(manager.raw(&tree()).is_none());
    }
}
