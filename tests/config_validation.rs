//! Integration tests for configuration validation

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;
use tracing::Level;
use version_bridge::config::{BrandConfig, BridgeConfig, LoaderConfig, LoggingConfig};
use version_bridge::BridgeError;

#[test]
fn test_default_config_validates() {
    let config = BridgeConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_default_values() {
    let loader = LoaderConfig::default();
    assert_eq!(loader.registry_wait_timeout, Duration::from_secs(10));
    assert!(!loader.strict_version_resolution);

    let brand = BrandConfig::default();
    assert!(brand.enabled);
    assert_eq!(brand.proxy_name, "ViaProxy");
    assert_eq!(brand.placeholder, "Unknown");
    assert_eq!(brand.strict_after, "1.20");
    assert_eq!(brand.max_length, 32767);
    assert!(!brand.reset_formatting);
}

#[test]
fn test_zero_wait_without_strict_mode() {
    let mut config = BridgeConfig::default();
    config.loader.registry_wait_timeout = Duration::ZERO;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("Registry wait timeout of 0")));

    config.loader.strict_version_resolution = true;
    assert!(config.validate().is_empty());
}

#[test]
fn test_excessive_registry_wait() {
    let config = BridgeConfig::default_with_overrides(|config| {
        config.loader.registry_wait_timeout = Duration::from_secs(600);
    });
    assert!(config.validate().iter().any(|e| e.contains("too long")));
}

#[test]
fn test_brand_limits() {
    let mut config = BridgeConfig::default();
    config.brand.max_length = 0;
    assert!(config
        .validate()
        .iter()
        .any(|e| e.contains("must be greater than 0")));

    config.brand.max_length = 40_000;
    assert!(config.validate().iter().any(|e| e.contains("too large")));

    config.brand.max_length = 256;
    config.brand.proxy_name = String::new();
    assert!(config.validate().iter().any(|e| e.contains("proxy name")));
}

#[test]
fn test_logging_app_name() {
    let mut logging = LoggingConfig::default();
    logging.app_name = "x".repeat(65);
    assert!(logging.validate().iter().any(|e| e.contains("too long")));

    logging.app_name = String::new();
    assert!(logging.validate().iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_validate_strict_collects_every_error() {
    let mut config = BridgeConfig::default();
    config.brand.proxy_name = String::new();
    config.logging.app_name = String::new();

    match config.validate_strict() {
        Err(BridgeError::ConfigError(message)) => {
            assert!(message.contains("proxy name"));
            assert!(message.contains("Application name"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_toml_parsing() {
    let config = BridgeConfig::from_toml(
        r#"
        [loader]
        registry_wait_timeout = 1500
        strict_version_resolution = true

        [brand]
        proxy_name = "Bridge"
        strict_after = "1.19.4"

        [logging]
        log_level = "debug"
        json_format = true
        "#,
    )
    .unwrap();

    assert_eq!(config.loader.registry_wait_timeout, Duration::from_millis(1500));
    assert!(config.loader.strict_version_resolution);
    assert_eq!(config.brand.proxy_name, "Bridge");
    assert_eq!(config.brand.placeholder, "Unknown");
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
}

#[test]
fn test_invalid_toml() {
    assert!(matches!(
        BridgeConfig::from_toml("[logging]\nlog_level = \"loud\""),
        Err(BridgeError::ConfigError(_))
    ));
    assert!(BridgeConfig::from_toml("not = [toml").is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.toml");

    let config = BridgeConfig::default_with_overrides(|config| {
        config.brand.reset_formatting = true;
        config.loader.registry_wait_timeout = Duration::from_millis(750);
    });
    config.save_to_file(&path).unwrap();

    let reloaded = BridgeConfig::from_file(&path).unwrap();
    assert!(reloaded.brand.reset_formatting);
    assert_eq!(reloaded.loader.registry_wait_timeout, Duration::from_millis(750));

    assert!(matches!(
        BridgeConfig::from_file(dir.path().join("missing.toml")),
        Err(BridgeError::ConfigError(_))
    ));
}

#[test]
fn test_env_overrides() {
    std::env::set_var("VERSION_BRIDGE_REGISTRY_WAIT_MS", "250");
    std::env::set_var("VERSION_BRIDGE_STRICT_VERSIONS", "yes");
    std::env::set_var("VERSION_BRIDGE_BRAND_PROXY_NAME", "Relay");
    std::env::set_var("VERSION_BRIDGE_LOG_LEVEL", "warn");

    let config = BridgeConfig::from_env().unwrap();
    assert_eq!(config.loader.registry_wait_timeout, Duration::from_millis(250));
    assert!(config.loader.strict_version_resolution);
    assert_eq!(config.brand.proxy_name, "Relay");
    assert_eq!(config.logging.log_level, Level::WARN);

    std::env::set_var("VERSION_BRIDGE_REGISTRY_WAIT_MS", "soon");
    assert!(matches!(BridgeConfig::from_env(), Err(BridgeError::ConfigError(_))));

    for var in [
        "VERSION_BRIDGE_REGISTRY_WAIT_MS",
        "VERSION_BRIDGE_STRICT_VERSIONS",
        "VERSION_BRIDGE_BRAND_PROXY_NAME",
        "VERSION_BRIDGE_LOG_LEVEL",
    ] {
        std::env::remove_var(var);
    }
}
