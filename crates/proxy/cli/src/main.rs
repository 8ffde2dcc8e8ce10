//! Service Proxy host - runs the sample service behind a synthesized proxy
//!
//! Loads host configuration, hosts `ISampleService` through a proxy whose
//! target factory builds a `SampleService`, performs one `Calculate` call
//! through a client channel and prints the result.

use anyhow::Context;
use clap::Parser;
use service_proxy_host::{
    ChannelFactory, ContractCatalog, HostConfig, ProxyServiceHostFactory, ServiceHostFactory,
};
use service_proxy_samples::{sample_service_contract, SampleService, TracingLogger, CALCULATE};
use service_proxy_synthesizer::{ProxySynthesizer, TargetFactory};
use service_proxy_types::{ServiceObject, Value};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Service Proxy host CLI
#[derive(Parser)]
#[command(name = "proxyhost")]
#[command(about = "Host the sample service through a synthesized proxy", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SERVICE_PROXY_CONFIG")]
    config: Option<String>,

    /// Endpoint to call; defaults to the first configured base address
    #[arg(short, long)]
    address: Option<Url>,

    /// First operand
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    value1: i64,

    /// Second operand
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    value2: i64,

    /// Log level, overrides the configured level
    #[arg(long, env = "SERVICE_PROXY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "SERVICE_PROXY_LOG_JSON")]
    json: bool,

    /// Print statistics as JSON after the call
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = HostConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize tracing
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    if cli.json || config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let catalog = ContractCatalog::new();
    catalog.register(sample_service_contract().clone())?;

    let synthesizer = Arc::new(ProxySynthesizer::new(config.synthesizer.clone()));
    let factory = ProxyServiceHostFactory::with_synthesizer(
        Arc::clone(&synthesizer),
        TargetFactory::new(|| SampleService::new(Arc::new(TracingLogger))),
    );

    let host = Arc::new(
        factory
            .create_from_config(&config, &catalog)
            .context("Failed to create service host")?,
    );
    host.open()?;

    let address = match cli.address {
        Some(address) => address,
        None => host
            .base_addresses()
            .first()
            .cloned()
            .context("Host has no base address")?,
    };

    tracing::info!(
        service = %host.description().name,
        %address,
        value1 = cli.value1,
        value2 = cli.value2,
        "Calling service"
    );

    let outcome = ChannelFactory::new(Arc::clone(&host), address)
        .create_channel()
        .context("Failed to open client channel")
        .and_then(|client| {
            client
                .invoke(CALCULATE, vec![Value::Int(cli.value1), Value::Int(cli.value2)])
                .context("Calculate failed")
        });

    host.close()?;
    let result = outcome?;

    println!("{} + {} = {}", cli.value1, cli.value2, result);

    if cli.stats {
        println!("{}", serde_json::to_string_pretty(&synthesizer.stats())?);
    }

    Ok(())
}
