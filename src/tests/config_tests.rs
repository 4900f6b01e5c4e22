//! Tests for configuration loading and validation.

use crate::config::{AppConfig, ConfigLoader, Validate};
use crate::error::config::ConfigError;
use crate::filter::{DEFAULT_BUCKET_SIZE, DEFAULT_CAPACITY, DEFAULT_MAX_KICKS};
use crate::tests::TestFixture;

/// Test that default configuration is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.filter.capacity, DEFAULT_CAPACITY);
    assert_eq!(config.filter.max_kicks, DEFAULT_MAX_KICKS);
    assert_eq!(config.filter.bucket_size, DEFAULT_BUCKET_SIZE);
}

/// Test loading without a file yields the defaults.
#[test]
fn test_load_defaults_without_file() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_DEFAULTS");
    let config = loader.load().unwrap();
    assert_eq!(config, AppConfig::default());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_from_toml_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "cuckoo.toml",
            r#"
[filter]
capacity = 2000
bucket_size = 8

[bench]
prefill = 10
seed = 42

[log]
level = "debug"
"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_FILE").load().unwrap();

    assert_eq!(config.filter.capacity, 2000);
    assert_eq!(config.filter.bucket_size, 8);
    // Unset keys keep their defaults
    assert_eq!(config.filter.max_kicks, DEFAULT_MAX_KICKS);
    assert_eq!(config.bench.prefill, 10);
    assert_eq!(config.bench.seed, Some(42));
    assert_eq!(config.log.level, "debug");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "cuckoo.json",
            r#"{ "filter": { "capacity": 64, "max_kicks": 7 } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_JSON").load().unwrap();
    assert_eq!(config.filter.capacity, 64);
    assert_eq!(config.filter.max_kicks, 7);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides_file() {
    let mut fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("cuckoo.toml", "[filter]\nmax_kicks = 100\n")
        .unwrap();

    fixture.set_env("TEST_ENV__FILTER__MAX_KICKS", "25");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let config = ConfigLoader::new(Some(&path), "TEST_ENV").load().unwrap();
    assert_eq!(config.filter.max_kicks, 25);
    assert!(config.log.json);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let err = ConfigLoader::new(Some(&path), "TEST_MISSING").load().unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
}

/// Test that unknown file extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("cuckoo.yaml", "filter: {}\n").unwrap();

    let err = ConfigLoader::new(Some(&path), "TEST_EXT").load().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

/// Test that malformed TOML fails to parse.
#[test]
fn test_invalid_toml() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("cuckoo.toml", "[filter\ncapacity = \n")
        .unwrap();

    let err = ConfigLoader::new(Some(&path), "TEST_BAD_TOML").load().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

/// Test that a zero capacity is caught by validation.
#[test]
fn test_zero_capacity_rejected() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("cuckoo.toml", "[filter]\ncapacity = 0\n")
        .unwrap();

    let err = ConfigLoader::new(Some(&path), "TEST_ZERO").load().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

/// Test that an unknown log level is rejected.
#[test]
fn test_invalid_log_level() {
    let mut config = AppConfig::default();
    config.log.level = "verbose".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

/// Test that an empty benchmark is rejected.
#[test]
fn test_zero_iterations_rejected() {
    let mut config = AppConfig::default();
    config.bench.iterations = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
}
