//! Generated proxy types

use crate::bindings::FactoryBindings;
use crate::config::SynthesizerConfig;
use crate::error::{ProxyError, Result};
use crate::factory::TargetFactory;
use crate::instance::ProxyInstance;
use crate::stats::SynthesizerStats;
use service_proxy_types::{DescriptorId, ServiceObject, TypeDescriptor};
use std::fmt;
use std::sync::Arc;

/// Something a host can build instances of without passing arguments
pub trait Activate: Send + Sync {
    /// The contract instances implement
    fn contract(&self) -> &TypeDescriptor;

    /// Name of the constructible type
    fn type_name(&self) -> &str;

    /// Construct a new instance
    fn create_instance(&self) -> Result<Box<dyn ServiceObject>>;
}

struct ProxyTypeInner {
    interface: TypeDescriptor,
    descriptor: TypeDescriptor,
    strict_arguments: bool,
    bindings: Arc<FactoryBindings>,
    stats: Arc<SynthesizerStats>,
}

/// A forwarding type generated for one interface
///
/// Cloning is cheap and yields the same type. Equality is by the generated
/// descriptor's identity.
#[derive(Clone)]
pub struct ProxyType {
    inner: Arc<ProxyTypeInner>,
}

impl ProxyType {
    /// Build the forwarding type for a validated interface.
    ///
    /// The factory binding is not written here; the synthesizer binds it
    /// before the type is published.
    pub(crate) fn synthesize(
        interface: &TypeDescriptor,
        config: &SynthesizerConfig,
        bindings: Arc<FactoryBindings>,
        stats: Arc<SynthesizerStats>,
    ) -> Self {
        let name = format!("{}{}", interface.name(), config.proxy_name_suffix);
        let descriptor = interface.implementation_of(name);

        Self {
            inner: Arc::new(ProxyTypeInner {
                interface: interface.clone(),
                descriptor,
                strict_arguments: config.strict_arguments,
                bindings,
                stats,
            }),
        }
    }

    /// Identity of the generated type.
    pub fn id(&self) -> DescriptorId {
        self.inner.descriptor.id()
    }

    pub fn name(&self) -> &str {
        self.inner.descriptor.name()
    }

    /// The interface this type implements.
    pub fn interface(&self) -> &TypeDescriptor {
        &self.inner.interface
    }

    /// Description of the generated class itself.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.inner.descriptor
    }

    pub fn strict_arguments(&self) -> bool {
        self.inner.strict_arguments
    }

    /// The factory new instances will call.
    pub fn target_factory(&self) -> Option<TargetFactory> {
        self.inner.bindings.resolve(self.id())
    }

    pub fn is_bound(&self) -> bool {
        self.target_factory().is_some()
    }

    pub(crate) fn bind(&self, factory: TargetFactory) -> bool {
        self.inner.bindings.bind(self.id(), factory)
    }

    /// Zero-argument constructor.
    ///
    /// Calls the bound factory once, checks the product implements the
    /// interface and stores it as the instance's target.
    pub fn instantiate(&self) -> Result<ProxyInstance> {
        let factory = self.target_factory().ok_or_else(|| ProxyError::Unbound {
            proxy_type: self.name().to_string(),
        })?;

        let target = factory.produce();
        let gaps = target.descriptor().conformance_gaps(&self.inner.interface);
        if !gaps.is_empty() {
            tracing::warn!(
                proxy_type = %self.name(),
                target = %target.descriptor().name(),
                gaps = gaps.len(),
                "Target does not implement proxied interface"
            );
            self.inner.stats.record_conformance_failure();
            return Err(ProxyError::TargetConformance {
                interface: self.inner.interface.name().to_string(),
                target: target.descriptor().name().to_string(),
                gaps,
            });
        }

        self.inner.stats.record_instance();
        tracing::trace!(
            proxy_type = %self.name(),
            target = %target.descriptor().name(),
            "Proxy instance constructed"
        );

        Ok(ProxyInstance::new(self.clone(), target))
    }
}

impl Activate for ProxyType {
    fn contract(&self) -> &TypeDescriptor {
        self.interface()
    }

    fn type_name(&self) -> &str {
        self.name()
    }

    fn create_instance(&self) -> Result<Box<dyn ServiceObject>> {
        Ok(Box::new(self.instantiate()?))
    }
}

impl PartialEq for ProxyType {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ProxyType {}

impl fmt::Debug for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyType")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("interface", &self.inner.interface.name())
            .field("bound", &self.is_bound())
            .finish()
    }
}
