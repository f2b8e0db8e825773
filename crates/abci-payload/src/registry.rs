use crate::RegistryError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use shared_types::{Address, Map};
use std::collections::HashMap;

use crate::payload::PayloadData;

/// A concrete payload schema's constructor: given the transaction's
/// sender and its schema-specific fields, build the boxed payload body.
pub type PayloadConstructor = fn(Address, Map) -> Result<Box<dyn PayloadData>, crate::PayloadError>;

static REGISTRY: Lazy<RwLock<HashMap<String, PayloadConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Process-wide mapping from payload-type tag to payload schema
/// constructor, populated once per schema at program initialisation.
/// There is no deregistration.
pub struct PayloadRegistry;

impl PayloadRegistry {
    /// Associate `tag` with `ctor`. Re-registering the same tag with the
    /// same constructor is a no-op; associating it with a *different*
    /// constructor fails with [`RegistryError::DuplicateTag`].
    pub fn register(tag: &str, ctor: PayloadConstructor) -> Result<(), RegistryError> {
        let mut registry = REGISTRY.write();
        if let Some(existing) = registry.get(tag) {
            if *existing != ctor {
                return Err(RegistryError::DuplicateTag(tag.to_string()));
            }
            return Ok(());
        }
        registry.insert(tag.to_string(), ctor);
        tracing::info!(tag, "registered payload schema");
        Ok(())
    }

    /// Look up the constructor registered for `tag`.
    pub fn lookup(tag: &str) -> Result<PayloadConstructor, RegistryError> {
        REGISTRY
            .read()
            .get(tag)
            .copied()
            .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))
    }
}
