//! Layered configuration loading.
//!
//! Lives in its own test binary because it sets process environment
//! variables.

use service_proxy_host::{HostConfig, InstanceMode};
use std::fs;

#[test]
fn file_and_environment_override_defaults() {
    let path = std::env::temp_dir().join(format!("service-proxy-host-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
service_name = "FromFile"
instance_mode = "single"

[synthesizer]
proxy_name_suffix = "Forwarder"
"#,
    )
    .unwrap();

    std::env::set_var("SERVICE_PROXY_SERVICE_NAME", "FromEnv");
    std::env::set_var(
        "SERVICE_PROXY_BASE_ADDRESSES",
        "http://localhost:1/a,http://localhost:2/b",
    );
    std::env::set_var("SERVICE_PROXY_SYNTHESIZER__STRICT_ARGUMENTS", "false");

    let config = HostConfig::load(path.to_str()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.service_name, "FromEnv");
    assert_eq!(config.instance_mode, InstanceMode::Single);
    assert_eq!(config.synthesizer.proxy_name_suffix, "Forwarder");
    assert!(!config.synthesizer.strict_arguments);
    assert_eq!(
        config.base_addresses,
        vec!["http://localhost:1/a", "http://localhost:2/b"]
    );
    assert_eq!(config.contract, "ISampleService");
    assert_eq!(config.parsed_base_addresses().unwrap().len(), 2);
}
