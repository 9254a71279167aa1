use freedns_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;
use std::time::Duration;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[server]
listen = "0.0.0.0:5353"

[upstream]
fast = "223.5.5.5"
clean = "1.1.1.1:53"
query_timeout_ms = 1500

[cache]
capacity = 128
min_ttl_secs = 30

[classifier]
china_ip_list = "/etc/freedns/china.txt"

[logging]
level = "debug"
"#,
    );

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();
    config.validate().unwrap();

    assert_eq!(config.server.listen, "0.0.0.0:5353");
    assert_eq!(config.upstream.fast, "223.5.5.5:53");
    assert_eq!(config.upstream.clean, "1.1.1.1:53");
    assert_eq!(config.query_timeout(), Duration::from_millis(1500));
    assert_eq!(config.cache.capacity, 128);
    assert_eq!(config.min_ttl(), Duration::from_secs(30));
    assert!(config.classifier.china_ip_list.is_some());
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[cache]\ncapacity = 42\n");
    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();

    assert_eq!(config.cache.capacity, 42);
    assert_eq!(config.cache.min_ttl_secs, 5);
    assert_eq!(config.upstream.clean, "8.8.8.8:53");
    assert!(config.classifier.china_ip_list.is_none());
}

#[test]
fn test_cli_overrides_beat_file() {
    let file = write_config("[upstream]\nfast = \"223.5.5.5\"\n[logging]\nlevel = \"warn\"\n");
    let overrides = CliOverrides {
        fast: Some("119.29.29.29".to_string()),
        log_level: Some("trace".to_string()),
        ..Default::default()
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();
    assert_eq!(config.upstream.fast, "119.29.29.29:53");
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = Config::load(Some("/nonexistent/freedns.toml"), CliOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let file = write_config("[cache\ncapacity = ");
    let err = Config::load(file.path().to_str(), CliOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_unknown_log_level_rejected() {
    let overrides = CliOverrides {
        log_level: Some("loud".to_string()),
        ..Default::default()
    };
    let config = Config::load(None, overrides).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "logging.level", .. })
    ));
}
