use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_CONFIG_SECTION_NAME;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Settings for tools built on top of the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectSettings {
    pub root_section: String,
    pub config_file: PathBuf,
    pub output: OutputFormat,
}

impl Default for InspectSettings {
    fn default() -> Self {
        Self {
            root_section: DEFAULT_CONFIG_SECTION_NAME.to_string(),
            config_file: PathBuf::from("healthchecks.yaml"),
            output: OutputFormat::Json,
        }
    }
}

impl InspectSettings {
    pub fn load() -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&InspectSettings::default())?);

        if Path::new("dhc-inspect.toml").exists() {
            builder = builder.add_source(File::with_name("dhc-inspect"));
        }

        builder = builder.add_source(Environment::with_prefix("DHC").try_parsing(true));

        let settings: InspectSettings = builder.build()?.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.root_section.trim().is_empty() {
            return Err(ConfigError::Message(
                "Root section name cannot be empty".to_string(),
            ));
        }

        if self.config_file.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "Health check configuration file cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Reads a configuration tree from `path`; the format follows the extension.
pub fn load_tree(path: &Path) -> Result<Config> {
    let tree = Config::builder()
        .add_source(File::from(path).required(true))
        .build()?;

    tracing::debug!("Loaded configuration tree from {}", path.display());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = InspectSettings::default();
        assert_eq!(settings.root_section, "DynamicHealthCheck");
        assert_eq!(settings.output, OutputFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = InspectSettings::default();
        settings.root_section = "  ".to_string();
        assert!(settings.validate().is_err());

        settings = InspectSettings::default();
        settings.config_file = PathBuf::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_loading() {
        std::env::remove_var("DHC_ROOT_SECTION");
        std::env::remove_var("DHC_OUTPUT");

        let settings = InspectSettings::load().expect("Should load default settings");
        assert_eq!(settings.root_section, "DynamicHealthCheck");
        assert_eq!(settings.config_file, PathBuf::from("healthchecks.yaml"));
    }

    #[test]
    fn test_load_tree_missing_file_fails() {
        let err = load_tree(Path::new("does-not-exist.yaml")).unwrap_err();
        assert!(!err.is_configuration_mismatch());
    }
}
