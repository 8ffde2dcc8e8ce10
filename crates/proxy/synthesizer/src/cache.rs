//! Per-interface proxy type cache
//!
//! Each interface id maps to a cell that is filled exactly once. The map's
//! shard lock is only held long enough to find or create the cell; building
//! the type happens inside the cell, so concurrent first requests for one
//! interface build it once while other interfaces proceed independently.
//! Entries are never evicted.

use crate::proxy_type::ProxyType;
use dashmap::DashMap;
use service_proxy_types::DescriptorId;
use std::sync::{Arc, OnceLock};

/// Map from interface identity to its generated proxy type
#[derive(Debug, Default)]
pub struct ProxyTypeCache {
    entries: DashMap<DescriptorId, Arc<OnceLock<ProxyType>>>,
}

impl ProxyTypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the type cached for `interface`, building it with `create` if absent.
    ///
    /// The flag is `true` only for the caller whose `create` ran.
    pub fn get_or_insert_with<F>(&self, interface: DescriptorId, create: F) -> (ProxyType, bool)
    where
        F: FnOnce() -> ProxyType,
    {
        let cell = Arc::clone(self.entries.entry(interface).or_default().value());

        let mut created = false;
        let proxy_type = cell.get_or_init(|| {
            created = true;
            create()
        });

        (proxy_type.clone(), created)
    }

    /// The fully built type for `interface`, if any.
    pub fn get(&self, interface: DescriptorId) -> Option<ProxyType> {
        self.entries
            .get(&interface)
            .and_then(|cell| cell.value().get().cloned())
    }

    pub fn contains(&self, interface: DescriptorId) -> bool {
        self.get(interface).is_some()
    }

    /// Number of interfaces with a built proxy type.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|cell| cell.value().get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All built proxy types, in no particular order.
    pub fn proxy_types(&self) -> Vec<ProxyType> {
        self.entries
            .iter()
            .filter_map(|cell| cell.value().get().cloned())
            .collect()
    }
}
