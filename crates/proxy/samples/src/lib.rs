//! Sample collaborators for service proxies
//!
//! `ISampleService` is the contract, [`SampleService`] the concrete
//! implementation a proxy forwards to, and [`Logger`] the dependency the
//! service needs at construction time. That dependency is why the service
//! cannot be built by a host directly and is reached through a proxy.

#![deny(unsafe_code)]

pub mod contract;
pub mod logger;
pub mod service;

pub use contract::{sample_service_contract, CALCULATE, SAMPLE_SERVICE_CONTRACT};
pub use logger::{Logger, MemoryLogger, TracingLogger};
pub use service::{sample_service_descriptor, SampleService};
