//! Hosting adapter for synthesized proxy types
//!
//! A host only knows how to build service objects through a zero-argument
//! constructor ([`Activate`]). Services whose constructors need arguments are
//! hosted by synthesizing a proxy type for their contract and binding it to a
//! factory that builds the real service.
//!
//! # Components
//!
//! - [`ServiceHost`]: lifecycle, endpoints and dispatch for one service type
//! - [`ServiceHostFactory`] / [`ProxyServiceHostFactory`]: build hosts for a contract
//! - [`ContractCatalog`]: contracts by name
//! - [`ChannelFactory`] / [`ClientChannel`]: client-side access to a host
//! - [`HostConfig`]: layered host configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use service_proxy_host::{ChannelFactory, ProxyServiceHostFactory, ServiceHostFactory};
//! use service_proxy_samples::{sample_service_contract, SampleService, TracingLogger};
//! use service_proxy_synthesizer::TargetFactory;
//! use service_proxy_types::{ServiceObject, Value};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let address: url::Url = "http://localhost:8733/sample".parse()?;
//! let factory = ProxyServiceHostFactory::new(TargetFactory::new(|| {
//!     SampleService::new(Arc::new(TracingLogger))
//! }));
//!
//! let host = Arc::new(factory.create_service_host(sample_service_contract(), vec![address.clone()])?);
//! host.open()?;
//!
//! let client = ChannelFactory::new(host.clone(), address).create_channel()?;
//! let sum = client.invoke("Calculate", vec![Value::Int(2), Value::Int(2)])?;
//! assert_eq!(sum, Value::Int(4));
//!
//! host.close()?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]

pub mod catalog;
pub mod channel;
pub mod config;
pub mod error;
pub mod factory;
pub mod host;

pub use catalog::ContractCatalog;
pub use channel::{ChannelFactory, ClientChannel};
pub use config::{HostConfig, LoggingConfig};
pub use error::{HostError, Result};
pub use factory::{ProxyServiceHostFactory, ServiceHostFactory};
pub use host::{HostState, InstanceMode, ServiceDescription, ServiceHost};

pub use service_proxy_synthesizer::Activate;
