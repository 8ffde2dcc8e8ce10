//! Error types for service hosting

use crate::host::HostState;
use service_proxy_synthesizer::ProxyError;
use service_proxy_types::InvocationError;
use thiserror::Error;
use url::Url;

/// Hosting errors
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid host state: expected {expected}, found {found}")]
    InvalidState {
        expected: HostState,
        found: HostState,
    },

    #[error("No endpoint at address: {0}")]
    UnknownEndpoint(Url),

    #[error("Service host requires at least one base address")]
    NoBaseAddress,

    #[error("Invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    #[error("Contract already registered: {0}")]
    ContractAlreadyRegistered(String),

    #[error("Activation failed: {0}")]
    Activation(#[from] ProxyError),

    #[error("Invocation failed: {0}")]
    Invocation(#[from] InvocationError),
}

/// Result type for hosting operations
pub type Result<T> = std::result::Result<T, HostError>;
