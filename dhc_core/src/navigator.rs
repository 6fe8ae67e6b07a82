//! Navigation over a `config::Config` tree
//!
//! Child names match ASCII case-insensitively so that sections read back the
//! same whether a source preserved key case (files) or folded it (environment).

use config::{Config, Source, Value, ValueKind};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::constants::PROPERTY_NAME_HEALTH_CHECKS;

/// A possibly absent node of the configuration tree.
#[derive(Debug, Clone)]
pub struct ConfigSection {
    key: String,
    value: Option<Value>,
}

impl ConfigSection {
    pub fn new(key: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The whole tree as an unnamed section.
    pub fn root(tree: &Config) -> Self {
        let value = match tree.collect() {
            Ok(table) => Some(Value::new(None, ValueKind::Table(table))),
            Err(e) => {
                debug!("Configuration tree could not be collected: {}", e);
                None
            }
        };
        Self::new(String::new(), value)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn exists(&self) -> bool {
        matches!(&self.value, Some(v) if !matches!(v.kind, ValueKind::Nil))
    }

    /// Child section by name. Arrays are addressed by index (`"0"`, `"1"`, ...).
    /// Missing children yield an absent section rather than an error.
    pub fn section(&self, name: &str) -> ConfigSection {
        let child = match self.value.as_ref().map(|v| &v.kind) {
            Some(ValueKind::Table(table)) => table
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.clone()),
            Some(ValueKind::Array(items)) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index).cloned()),
            _ => None,
        };

        ConfigSection::new(name, child)
    }

    /// Immediate children in document order.
    pub fn children(&self) -> Vec<ConfigSection> {
        match self.value.as_ref().map(|v| &v.kind) {
            Some(ValueKind::Table(table)) => table
                .iter()
                .map(|(key, value)| ConfigSection::new(key.clone(), Some(value.clone())))
                .collect(),
            Some(ValueKind::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, value)| ConfigSection::new(index.to_string(), Some(value.clone())))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Scalar value of a leaf, rendered as a string.
    pub fn value(&self) -> Option<String> {
        match self.value.as_ref() {
            Some(v) if is_scalar(&v.kind) => v.clone().into_string().ok(),
            _ => None,
        }
    }

    pub fn raw(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Binds this section into `T`. Absent or unbindable sections give `None`.
    pub fn bind<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.exists() {
            return None;
        }

        let value = self.value.clone()?;
        match value.try_deserialize::<T>() {
            Ok(bound) => Some(bound),
            Err(e) => {
                debug!(section = %self.key, "Section could not be bound: {}", e);
                None
            }
        }
    }
}

fn is_scalar(kind: &ValueKind) -> bool {
    !matches!(kind, ValueKind::Table(_) | ValueKind::Array(_) | ValueKind::Nil)
}

/// The section named `root_name` at the top of the tree.
///
/// An exact, undotted name is read directly so sibling sections are never
/// copied. Other spellings go through the case-insensitive walk.
pub fn root_section(tree: &Config, root_name: &str) -> ConfigSection {
    if !root_name.is_empty() && !root_name.contains(|c: char| c == '.' || c == '[') {
        if let Ok(value) = tree.get::<Value>(root_name) {
            return ConfigSection::new(root_name, Some(value));
        }
    }

    ConfigSection::root(tree).section(root_name)
}

/// The ordered list of per-service entries under the root section.
pub fn health_checks_section(tree: &Config, root_name: &str) -> ConfigSection {
    root_section(tree, root_name).section(PROPERTY_NAME_HEALTH_CHECKS)
}
