//! Resolution of typed health-check settings from a hierarchical configuration tree.
//!
//! Each health-check kind registers the context type it expects once, at
//! startup. Lookups then walk the `HealthChecks` list under a root section of
//! a `config::Config` and bind either one entry's `Context` or all of them.
//!
//! ```yaml
//! DynamicHealthCheck:
//!   HealthChecks:
//!     - HealthCheckName: DatabasePing
//!       ServiceName: orders
//!       Context:
//!         host: db-1
//! ```

pub mod constants;
pub mod context;
pub mod error;
pub mod manager;
pub mod models;
pub mod navigator;
pub mod records;
pub mod registry;
pub mod settings;

pub use error::{DynamicHealthCheckError, Result};
pub use manager::ConfigurationManager;
pub use models::{DynamicHealthCheckConfig, DynamicHealthCheckRoot};
pub use navigator::{health_checks_section, root_section, ConfigSection};
pub use registry::{ContextRegistry, ContextShape, HealthCheckKind};
pub use settings::{load_tree, InspectSettings, OutputFormat};
