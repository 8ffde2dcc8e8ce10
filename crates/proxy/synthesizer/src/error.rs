//! Synthesizer error types

use service_proxy_types::ConformanceGap;
use thiserror::Error;

/// Proxy synthesis and activation errors
///
/// Failures raised by a target while a call is forwarded are not represented
/// here; they come back from `invoke` untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProxyError {
    /// The descriptor handed to the synthesizer is not a pure interface
    #[error("Invalid argument `{parameter}`: `{type_name}` {reason}")]
    InvalidArgument {
        parameter: &'static str,
        type_name: String,
        reason: String,
    },

    /// The bound factory produced an object that does not implement the interface
    #[error(
        "Target `{target}` does not implement `{interface}`: {}",
        describe_gaps(.gaps)
    )]
    TargetConformance {
        interface: String,
        target: String,
        gaps: Vec<ConformanceGap>,
    },

    /// No factory is bound for the proxy type being instantiated
    #[error("Proxy type `{proxy_type}` has no bound target factory")]
    Unbound { proxy_type: String },
}

/// Result type for synthesizer operations
pub type Result<T> = std::result::Result<T, ProxyError>;

fn describe_gaps(gaps: &[ConformanceGap]) -> String {
    gaps.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
