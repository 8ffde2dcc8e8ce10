//! Contract catalog

use crate::error::{HostError, Result};
use dashmap::DashMap;
use service_proxy_types::TypeDescriptor;

/// Interface descriptors by contract name
#[derive(Debug, Default)]
pub struct ContractCatalog {
    contracts: DashMap<String, TypeDescriptor>,
}

impl ContractCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `contract` under its name.
    ///
    /// Registering the same descriptor again is a no-op; a different
    /// descriptor with a taken name is rejected.
    pub fn register(&self, contract: TypeDescriptor) -> Result<()> {
        use dashmap::mapref::entry::Entry;

        match self.contracts.entry(contract.name().to_string()) {
            Entry::Occupied(existing) if existing.get() == &contract => Ok(()),
            Entry::Occupied(existing) => {
                Err(HostError::ContractAlreadyRegistered(existing.key().clone()))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(contract = %contract.name(), "Registered contract");
                slot.insert(contract);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<TypeDescriptor> {
        self.contracts
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| HostError::UnknownContract(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contracts.contains_key(name)
    }

    /// Registered contract names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.contracts.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
