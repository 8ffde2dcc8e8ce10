//! Client channels to hosted services

use crate::error::{HostError, Result};
use crate::host::{HostState, ServiceHost};
use service_proxy_types::{Fault, InvocationError, ServiceObject, TypeDescriptor, Value};
use std::sync::Arc;
use url::Url;

/// Creates client channels to one endpoint of a host
#[derive(Debug, Clone)]
pub struct ChannelFactory {
    host: Arc<ServiceHost>,
    address: Url,
}

impl ChannelFactory {
    pub fn new(host: Arc<ServiceHost>, address: Url) -> Self {
        Self { host, address }
    }

    /// Open a channel. The host must be open and serve the address.
    pub fn create_channel(&self) -> Result<ClientChannel> {
        let state = self.host.state();
        if state != HostState::Opened {
            return Err(HostError::InvalidState {
                expected: HostState::Opened,
                found: state,
            });
        }
        if !self.host.serves(&self.address) {
            return Err(HostError::UnknownEndpoint(self.address.clone()));
        }

        Ok(ClientChannel {
            host: Arc::clone(&self.host),
            address: self.address.clone(),
        })
    }
}

/// Client view of a hosted service
///
/// Implements the host's contract by dispatching every call to the host.
/// Service errors come back unchanged; host failures (closed host, activation
/// errors) surface as faults with code `host`.
#[derive(Debug, Clone)]
pub struct ClientChannel {
    host: Arc<ServiceHost>,
    address: Url,
}

impl ClientChannel {
    pub fn address(&self) -> &Url {
        &self.address
    }
}

impl ServiceObject for ClientChannel {
    fn descriptor(&self) -> &TypeDescriptor {
        self.host.contract()
    }

    fn invoke(&self, operation: &str, args: Vec<Value>) -> std::result::Result<Value, InvocationError> {
        self.host
            .dispatch(&self.address, operation, args)
            .map_err(|err| match err {
                HostError::Invocation(inner) => inner,
                other => Fault::new("host", other.to_string()).into(),
            })
    }
}
