//! Service host factories

use crate::catalog::ContractCatalog;
use crate::config::HostConfig;
use crate::error::Result;
use crate::host::{InstanceMode, ServiceHost};
use service_proxy_synthesizer::{ProxySynthesizer, TargetFactory};
use service_proxy_types::TypeDescriptor;
use std::sync::Arc;
use url::Url;

/// Builds service hosts for a contract
pub trait ServiceHostFactory: Send + Sync {
    fn create_service_host(
        &self,
        contract: &TypeDescriptor,
        base_addresses: Vec<Url>,
    ) -> Result<ServiceHost>;

    /// Build the host described by `config`, resolving its contract in `catalog`.
    fn create_from_config(
        &self,
        config: &HostConfig,
        catalog: &ContractCatalog,
    ) -> Result<ServiceHost> {
        let contract = catalog.get(&config.contract)?;
        let host = self.create_service_host(&contract, config.parsed_base_addresses()?)?;
        Ok(host
            .with_name(config.service_name.clone())
            .with_instance_mode(config.instance_mode))
    }
}

/// Hosts a contract through a synthesized proxy type
///
/// The proxy type is obtained from the synthesizer with this factory's target
/// factory. If the contract's proxy type was already bound by an earlier
/// request, that earlier binding stays in effect.
#[derive(Debug)]
pub struct ProxyServiceHostFactory {
    synthesizer: Arc<ProxySynthesizer>,
    target_factory: TargetFactory,
    instance_mode: InstanceMode,
}

impl ProxyServiceHostFactory {
    /// Use the process-wide synthesizer.
    pub fn new(target_factory: TargetFactory) -> Self {
        Self::with_synthesizer(ProxySynthesizer::global(), target_factory)
    }

    pub fn with_synthesizer(
        synthesizer: Arc<ProxySynthesizer>,
        target_factory: TargetFactory,
    ) -> Self {
        Self {
            synthesizer,
            target_factory,
            instance_mode: InstanceMode::default(),
        }
    }

    pub fn with_instance_mode(mut self, mode: InstanceMode) -> Self {
        self.instance_mode = mode;
        self
    }

    pub fn synthesizer(&self) -> &Arc<ProxySynthesizer> {
        &self.synthesizer
    }
}

impl ServiceHostFactory for ProxyServiceHostFactory {
    fn create_service_host(
        &self,
        contract: &TypeDescriptor,
        base_addresses: Vec<Url>,
    ) -> Result<ServiceHost> {
        let proxy_type = self
            .synthesizer
            .get_proxy_type(contract, self.target_factory.clone())?;

        tracing::debug!(
            contract = %contract.name(),
            proxy_type = %proxy_type.name(),
            "Creating service host"
        );

        Ok(ServiceHost::new(Arc::new(proxy_type), base_addresses)?
            .with_name(contract.name())
            .with_instance_mode(self.instance_mode))
    }
}
