//! Service Proxy Synthesizer - forwarding proxy types built on demand
//!
//! Some hosts need a type they can construct with no arguments before the
//! real dependencies of a service exist. Given an interface descriptor and a
//! zero-argument [`TargetFactory`], the synthesizer produces a [`ProxyType`]
//! that:
//!
//! - implements every operation of the interface,
//! - calls the bound factory exactly once per [`ProxyInstance`],
//! - forwards every call to the produced target unchanged.
//!
//! ## Caching and factory binding
//!
//! One proxy type is synthesized per interface identity and kept for the
//! lifetime of the synthesizer. **The first factory wins**: a later request
//! for an already cached interface returns the cached type and discards the
//! factory it was given. Callers must not expect a second request with a
//! different factory to change what new instances are built from.
//!
//! ```no_run
//! use service_proxy_synthesizer::{get_proxy_type, TargetFactory};
//! # fn contract() -> service_proxy_types::TypeDescriptor { unimplemented!() }
//! # fn make_target() -> Box<dyn service_proxy_types::ServiceObject> { unimplemented!() }
//! let proxy_type = get_proxy_type(&contract(), TargetFactory::boxed(make_target))?;
//! let instance = proxy_type.instantiate()?;
//! # Ok::<(), service_proxy_synthesizer::ProxyError>(())
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

mod bindings;
pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod instance;
pub mod proxy_type;
pub mod stats;
pub mod synthesizer;

// Re-exports
pub use cache::ProxyTypeCache;
pub use config::SynthesizerConfig;
pub use error::{ProxyError, Result};
pub use factory::TargetFactory;
pub use instance::ProxyInstance;
pub use proxy_type::{Activate, ProxyType};
pub use stats::{StatsSnapshot, SynthesizerStats};
pub use synthesizer::ProxySynthesizer;

use service_proxy_types::TypeDescriptor;

/// Get or synthesize the proxy type for `interface` on the process-wide
/// synthesizer.
///
/// See [`ProxySynthesizer::get_proxy_type`] for the caching contract.
pub fn get_proxy_type(interface: &TypeDescriptor, factory: TargetFactory) -> Result<ProxyType> {
    ProxySynthesizer::global().get_proxy_type(interface, factory)
}
