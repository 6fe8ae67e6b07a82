//! Registry of the context shape each health-check kind expects

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{DynamicHealthCheckError, Result};

/// Identity of a health-check implementation.
///
/// The registry keys on the implementing type. `kind_name` is what configured
/// entries carry in their `HealthCheckName` property and defaults to the
/// unqualified type name.
pub trait HealthCheckKind: 'static {
    fn kind_name() -> &'static str {
        short_type_name(type_name::<Self>())
    }
}

/// Descriptor of the typed structure a kind's `Context` section binds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextShape {
    type_id: TypeId,
    type_name: &'static str,
}

impl ContextShape {
    pub fn of<C: DeserializeOwned + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            type_name: type_name::<C>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[derive(Debug, Default)]
pub struct ContextRegistry {
    shapes: RwLock<HashMap<TypeId, ContextShape>>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `K` binds its context into `C`. The first registration for
    /// a kind wins; later calls leave it untouched. Returns whether this call
    /// performed the write.
    pub fn register<K: HealthCheckKind, C: DeserializeOwned + 'static>(&self) -> bool {
        let shape = ContextShape::of::<C>();
        let mut shapes = self.shapes.write();

        match shapes.get(&TypeId::of::<K>()) {
            Some(existing) => {
                if *existing != shape {
                    debug!(
                        kind = K::kind_name(),
                        registered = existing.type_name(),
                        ignored = shape.type_name(),
                        "Health check already registered with another context, keeping first"
                    );
                }
                false
            }
            None => {
                shapes.insert(TypeId::of::<K>(), shape);
                debug!(
                    kind = K::kind_name(),
                    context = shape.type_name(),
                    "Registered health check context"
                );
                true
            }
        }
    }

    pub fn lookup<K: HealthCheckKind>(&self) -> Option<ContextShape> {
        self.shapes.read().get(&TypeId::of::<K>()).copied()
    }

    pub fn is_registered<K: HealthCheckKind>(&self) -> bool {
        self.shapes.read().contains_key(&TypeId::of::<K>())
    }

    pub fn len(&self) -> usize {
        self.shapes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.read().is_empty()
    }

    /// Fails unless `K` was registered with exactly `C`.
    pub fn verify<K: HealthCheckKind, C: DeserializeOwned + 'static>(&self) -> Result<()> {
        match self.lookup::<K>() {
            Some(shape) if shape == ContextShape::of::<C>() => Ok(()),
            found => {
                warn!(
                    kind = K::kind_name(),
                    requested = type_name::<C>(),
                    registered = ?found.map(|s| s.type_name()),
                    "Context shape does not match registration"
                );
                Err(DynamicHealthCheckError::mismatch(K::kind_name()))
            }
        }
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
