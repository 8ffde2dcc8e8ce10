//! Service host lifecycle and dispatch

use crate::error::{HostError, Result};
use serde::{Deserialize, Serialize};
use service_proxy_synthesizer::Activate;
use service_proxy_types::{ServiceObject, TypeDescriptor, Value};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use url::Url;

/// How a host maps calls to service instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceMode {
    /// A new instance for every dispatched call
    #[default]
    PerCall,
    /// One instance, created when the host opens
    Single,
}

/// Host lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostState {
    Created,
    Opened,
    Closed,
}

impl fmt::Display for HostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostState::Created => write!(f, "created"),
            HostState::Opened => write!(f, "opened"),
            HostState::Closed => write!(f, "closed"),
        }
    }
}

/// What a host exposes about its service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub name: String,
    pub contract_name: String,
    pub service_type: String,
}

struct Runtime {
    state: HostState,
    singleton: Option<Arc<dyn ServiceObject>>,
}

/// Hosts one constructible service type at a set of base addresses
pub struct ServiceHost {
    service_type: Arc<dyn Activate>,
    base_addresses: Vec<Url>,
    description: ServiceDescription,
    instance_mode: InstanceMode,
    runtime: RwLock<Runtime>,
}

impl ServiceHost {
    pub fn new(service_type: Arc<dyn Activate>, base_addresses: Vec<Url>) -> Result<Self> {
        if base_addresses.is_empty() {
            return Err(HostError::NoBaseAddress);
        }

        let description = ServiceDescription {
            name: service_type.type_name().to_string(),
            contract_name: service_type.contract().name().to_string(),
            service_type: service_type.type_name().to_string(),
        };

        Ok(Self {
            service_type,
            base_addresses,
            description,
            instance_mode: InstanceMode::default(),
            runtime: RwLock::new(Runtime {
                state: HostState::Created,
                singleton: None,
            }),
        })
    }

    /// Set the service name reported in the description.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.description.name = name.into();
        self
    }

    pub fn with_instance_mode(mut self, mode: InstanceMode) -> Self {
        self.instance_mode = mode;
        self
    }

    pub fn description(&self) -> &ServiceDescription {
        &self.description
    }

    pub fn contract(&self) -> &TypeDescriptor {
        self.service_type.contract()
    }

    pub fn base_addresses(&self) -> &[Url] {
        &self.base_addresses
    }

    pub fn instance_mode(&self) -> InstanceMode {
        self.instance_mode
    }

    pub fn state(&self) -> HostState {
        self.runtime
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state
    }

    /// Whether `address` is one of this host's endpoints.
    pub fn serves(&self, address: &Url) -> bool {
        self.base_addresses.contains(address)
    }

    /// Start accepting calls.
    ///
    /// In [`InstanceMode::Single`] the service instance is created here, so
    /// activation failures surface at open rather than on the first call.
    pub fn open(&self) -> Result<()> {
        let mut runtime = self.runtime.write().unwrap_or_else(PoisonError::into_inner);
        if runtime.state != HostState::Created {
            return Err(HostError::InvalidState {
                expected: HostState::Created,
                found: runtime.state,
            });
        }

        if self.instance_mode == InstanceMode::Single {
            runtime.singleton = Some(Arc::from(self.service_type.create_instance()?));
        }
        runtime.state = HostState::Opened;

        tracing::info!(
            service = %self.description.name,
            contract = %self.description.contract_name,
            addresses = self.base_addresses.len(),
            mode = ?self.instance_mode,
            "Service host opened"
        );
        Ok(())
    }

    /// Stop accepting calls and release the single instance, if any.
    pub fn close(&self) -> Result<()> {
        let mut runtime = self.runtime.write().unwrap_or_else(PoisonError::into_inner);
        if runtime.state != HostState::Opened {
            return Err(HostError::InvalidState {
                expected: HostState::Opened,
                found: runtime.state,
            });
        }

        runtime.singleton = None;
        runtime.state = HostState::Closed;

        tracing::info!(service = %self.description.name, "Service host closed");
        Ok(())
    }

    /// Invoke `operation` on the service at `address`.
    pub fn dispatch(&self, address: &Url, operation: &str, args: Vec<Value>) -> Result<Value> {
        let instance = self.instance_for(address)?;

        tracing::debug!(
            service = %self.description.name,
            %address,
            operation,
            "Dispatching call"
        );

        Ok(instance.invoke(operation, args)?)
    }

    fn instance_for(&self, address: &Url) -> Result<Arc<dyn ServiceObject>> {
        let runtime = self.runtime.read().unwrap_or_else(PoisonError::into_inner);
        if runtime.state != HostState::Opened {
            return Err(HostError::InvalidState {
                expected: HostState::Opened,
                found: runtime.state,
            });
        }
        if !self.serves(address) {
            return Err(HostError::UnknownEndpoint(address.clone()));
        }

        match &runtime.singleton {
            Some(instance) => Ok(Arc::clone(instance)),
            None => Ok(Arc::from(self.service_type.create_instance()?)),
        }
    }
}

impl fmt::Debug for ServiceHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHost")
            .field("description", &self.description)
            .field("base_addresses", &self.base_addresses)
            .field("instance_mode", &self.instance_mode)
            .field("state", &self.state())
            .finish()
    }
}
