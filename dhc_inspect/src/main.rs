//! Prints the health-check configuration resolved from a configuration file

use anyhow::Result;
use dhc_core::{load_tree, ConfigurationManager, InspectSettings, OutputFormat};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    init_tracing();

    let mut settings = InspectSettings::load()
        .map_err(|e| anyhow::anyhow!("Failed to load settings: {}", e))?;

    if let Some(path) = std::env::args().nth(1) {
        settings.config_file = PathBuf::from(path);
    }

    info!("Reading health checks from {}", settings.config_file.display());
    info!("Root section: {}", settings.root_section);

    let tree = load_tree(&settings.config_file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", settings.config_file.display(), e))?;

    let manager = ConfigurationManager::default().with_root_section(&settings.root_section);

    let root = manager.raw(&tree).ok_or_else(|| {
        anyhow::anyhow!(
            "No bindable health check configuration under '{}'",
            settings.root_section
        )
    })?;

    info!("Found {} health check entries", root.health_checks.len());

    for check in &root.health_checks {
        if check.context.is_none() {
            warn!(
                "Health check '{}' for service '{}' has no context",
                check.health_check_name, check.service_name
            );
        }

        info!(
            kind = %check.health_check_name,
            service = %check.service_name,
            enabled = check.enabled,
            "Configured health check"
        );
    }

    let rendered = match settings.output {
        OutputFormat::Json => serde_json::to_string_pretty(&root)?,
        OutputFormat::Yaml => serde_yaml::to_string(&root)?,
    };

    println!("{}", rendered);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            let default_level = if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            };

            format!("dhc_inspect={0},dhc_core={0}", default_level).into()
        });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
