//! Configuration for service hosts

use crate::error::{HostError, Result};
use crate::host::InstanceMode;
use serde::{Deserialize, Serialize};
use service_proxy_synthesizer::SynthesizerConfig;
use url::Url;

/// Environment variable prefix, e.g. `SERVICE_PROXY_SERVICE_NAME`.
pub const ENV_PREFIX: &str = "SERVICE_PROXY";

/// Main host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Name reported in the service description
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Contract to host, looked up in the contract catalog
    #[serde(default = "default_contract")]
    pub contract: String,

    /// Endpoint addresses
    #[serde(default = "default_base_addresses")]
    pub base_addresses: Vec<String>,

    /// Instancing mode
    #[serde(default)]
    pub instance_mode: InstanceMode,

    /// Proxy synthesis settings
    #[serde(default)]
    pub synthesizer: SynthesizerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            contract: default_contract(),
            base_addresses: default_base_addresses(),
            instance_mode: InstanceMode::default(),
            synthesizer: SynthesizerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_service_name() -> String {
    "SampleService".to_string()
}

fn default_contract() -> String {
    "ISampleService".to_string()
}

fn default_base_addresses() -> Vec<String> {
    vec!["http://localhost:8733/sample".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl HostConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&str>) -> std::result::Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&HostConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add environment variables with SERVICE_PROXY_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("base_addresses")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Parse every configured base address.
    pub fn parsed_base_addresses(&self) -> Result<Vec<Url>> {
        self.base_addresses
            .iter()
            .map(|address| {
                Url::parse(address).map_err(|e| HostError::InvalidAddress {
                    address: address.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}
