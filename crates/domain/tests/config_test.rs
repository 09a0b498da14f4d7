use registry_dns_domain::config::{CliOverrides, Config, ConfigError, FallbackRcode};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.registry.ttl, 3600);
    assert!(config.registry.path.as_os_str().is_empty());
    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.tcp_timeout_secs, 10);
    assert_eq!(config.server.fallback_rcode, FallbackRcode::ServFail);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_minimal_toml_uses_default_ttl() {
    let config = Config::from_toml(
        r#"
        [registry]
        path = "/srv/registry"
    "#,
    )
    .unwrap();

    assert_eq!(config.registry.path, PathBuf::from("/srv/registry"));
    assert_eq!(config.registry.ttl, 3600);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_full_toml() {
    let config = Config::from_toml(
        r#"
        [server]
        dns_port = 5353
        bind_address = "::"
        fallback_rcode = "refused"

        [registry]
        path = "/srv/registry"
        ttl = 300

        [logging]
        level = "debug"
    "#,
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.fallback_rcode, FallbackRcode::Refused);
    assert_eq!(config.registry.ttl, 300);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_registry_path_fails_validation() {
    let config = Config::from_toml("[server]\ndns_port = 53\n").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation(msg)) if msg.contains("Registry path")
    ));
}

#[test]
fn test_config_registry_section_without_path_fails_to_parse() {
    let result = Config::from_toml("[registry]\nttl = 60\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_rejects_extra_registry_keys() {
    let result = Config::from_toml(
        r#"
        [registry]
        path = "/srv/registry"
        extra = "value"
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_rejects_non_numeric_ttl() {
    let result = Config::from_toml(
        r#"
        [registry]
        path = "/srv/registry"
        ttl = "soon"
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_rejects_oversized_ttl() {
    let config = Config::from_toml(
        r#"
        [registry]
        path = "/srv/registry"
        ttl = 4000000000
    "#,
    )
    .unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_rejects_zero_port_and_bad_bind() {
    let mut config = Config::from_toml("[registry]\npath = \"/srv/registry\"\n").unwrap();
    config.server.dns_port = 0;
    assert!(config.validate().is_err());

    config.server.dns_port = 53;
    config.server.bind_address = "localhost".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_load_explicit_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[registry]\npath = \"/srv/registry\"\nttl = 120").unwrap();

    let overrides = CliOverrides {
        ttl: Some(60),
        dns_port: Some(5300),
        log_level: Some("trace".to_string()),
        ..Default::default()
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.registry.path, PathBuf::from("/srv/registry"));
    assert_eq!(config.registry.ttl, 60);
    assert_eq!(config.server.dns_port, 5300);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_config_load_missing_explicit_file_is_an_error() {
    let result = Config::load(Some("/nonexistent/registry-dns.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_config_load_registry_flag_only_keeps_default_ttl() {
    let overrides = CliOverrides {
        registry_path: Some(PathBuf::from("/srv/registry")),
        ..Default::default()
    };
    let config = Config::load(None, overrides).unwrap();

    assert_eq!(config.registry.path, PathBuf::from("/srv/registry"));
    assert_eq!(config.registry.ttl, 3600);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_toml_without_registry_section_keeps_default_ttl() {
    let config = Config::from_toml(
        r#"
        [server]
        dns_port = 5353
    "#,
    )
    .unwrap();

    assert_eq!(config.registry.ttl, 3600);
}
