//! Configuration for the proxy synthesizer

use serde::{Deserialize, Serialize};

/// Synthesizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizerConfig {
    /// Appended to the interface name to name generated proxy types
    #[serde(default = "default_proxy_name_suffix")]
    pub proxy_name_suffix: String,

    /// Check argument count and types against the interface before forwarding
    #[serde(default = "default_true")]
    pub strict_arguments: bool,

    /// Log when a cache hit discards a different factory than the bound one
    #[serde(default = "default_true")]
    pub log_discarded_factories: bool,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            proxy_name_suffix: default_proxy_name_suffix(),
            strict_arguments: true,
            log_discarded_factories: true,
        }
    }
}

impl SynthesizerConfig {
    /// Forward arguments to targets without checking them first.
    pub fn lenient() -> Self {
        Self {
            strict_arguments: false,
            ..Default::default()
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_proxy_name_suffix() -> String {
    "Proxy".to_string()
}
