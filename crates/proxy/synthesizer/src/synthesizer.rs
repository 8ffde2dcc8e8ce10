//! The proxy synthesizer

use crate::bindings::FactoryBindings;
use crate::cache::ProxyTypeCache;
use crate::config::SynthesizerConfig;
use crate::error::{ProxyError, Result};
use crate::factory::TargetFactory;
use crate::proxy_type::ProxyType;
use crate::stats::{StatsSnapshot, SynthesizerStats};
use service_proxy_types::{TypeDescriptor, TypeKind};
use std::sync::{Arc, OnceLock};

/// Builds and caches one forwarding proxy type per interface
#[derive(Debug)]
pub struct ProxySynthesizer {
    config: SynthesizerConfig,
    cache: ProxyTypeCache,
    bindings: Arc<FactoryBindings>,
    stats: Arc<SynthesizerStats>,
}

impl ProxySynthesizer {
    pub fn new(config: SynthesizerConfig) -> Self {
        Self {
            config,
            cache: ProxyTypeCache::new(),
            bindings: Arc::new(FactoryBindings::new()),
            stats: Arc::new(SynthesizerStats::new()),
        }
    }

    /// The process-wide synthesizer, created with default configuration on
    /// first use.
    pub fn global() -> Arc<ProxySynthesizer> {
        static GLOBAL: OnceLock<Arc<ProxySynthesizer>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(ProxySynthesizer::default())))
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Get the proxy type for `interface`, synthesizing it on first request.
    ///
    /// On a cache miss the new type is bound to `factory` before anyone can
    /// observe it. On a cache hit the cached type is returned as is and
    /// `factory` is dropped: the factory from the first successful request
    /// stays bound for as long as the synthesizer lives.
    ///
    /// Fails with [`ProxyError::InvalidArgument`] when `interface` is not a
    /// pure interface.
    pub fn get_proxy_type(
        &self,
        interface: &TypeDescriptor,
        factory: TargetFactory,
    ) -> Result<ProxyType> {
        validate_interface(interface)?;

        let (proxy_type, created) = self.cache.get_or_insert_with(interface.id(), || {
            let proxy_type = ProxyType::synthesize(
                interface,
                &self.config,
                Arc::clone(&self.bindings),
                Arc::clone(&self.stats),
            );
            proxy_type.bind(factory.clone());

            tracing::debug!(
                interface = %interface.name(),
                proxy_type = %proxy_type.name(),
                operations = interface.operations().len(),
                "Synthesized proxy type"
            );
            proxy_type
        });

        if created {
            self.stats.record_synthesis();
            return Ok(proxy_type);
        }

        self.stats.record_cache_hit();
        tracing::trace!(
            interface = %interface.name(),
            proxy_type = %proxy_type.name(),
            "Proxy type cache hit"
        );

        let discarded = proxy_type
            .target_factory()
            .is_some_and(|bound| !bound.same_as(&factory));
        if discarded {
            self.stats.record_discarded_factory();
            if self.config.log_discarded_factories {
                tracing::debug!(
                    interface = %interface.name(),
                    proxy_type = %proxy_type.name(),
                    "Proxy type already bound; supplied factory discarded"
                );
            }
        }

        Ok(proxy_type)
    }

    /// The cached proxy type for `interface`, without synthesizing.
    pub fn cached(&self, interface: &TypeDescriptor) -> Option<ProxyType> {
        self.cache.get(interface.id())
    }

    /// Number of interfaces with a synthesized proxy type.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Number of proxy types with a bound factory.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn cache(&self) -> &ProxyTypeCache {
        &self.cache
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for ProxySynthesizer {
    fn default() -> Self {
        Self::new(SynthesizerConfig::default())
    }
}

fn validate_interface(interface: &TypeDescriptor) -> Result<()> {
    if interface.kind() != TypeKind::Interface {
        return Err(ProxyError::InvalidArgument {
            parameter: "interface",
            type_name: interface.name().to_string(),
            reason: format!(
                "is a {}; only interface types can be proxied",
                interface.kind()
            ),
        });
    }

    if !interface.fields().is_empty() {
        return Err(ProxyError::InvalidArgument {
            parameter: "interface",
            type_name: interface.name().to_string(),
            reason: "declares data fields; only pure interfaces can be proxied".to_string(),
        });
    }

    Ok(())
}
