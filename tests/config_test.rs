use horologist::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.ui.use_24_hour_format);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.default_cities.len(), 6);
    assert!(config.ui.default_cities.contains(&"Tokyo".to_string()));
    assert_eq!(config.sync.refresh_interval_ms, 250);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Refresh interval below the minimum should fail
    config.sync.refresh_interval_ms = 10;
    assert!(config.validate().is_err());

    // Reset and test an interval above the maximum
    config.sync.refresh_interval_ms = 60_000;
    assert!(config.validate().is_err());

    config.sync.refresh_interval_ms = 1000;
    assert!(config.validate().is_ok());

    // Blank default city names should fail
    config.ui.default_cities = vec!["Tokyo".to_string(), "  ".to_string()];
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("use_24_hour_format = false"));
    assert!(toml_str.contains("refresh_interval_ms = 250"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
use_24_hour_format = true

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert!(config.ui.use_24_hour_format);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.sync.refresh_interval_ms, 250);
    assert_eq!(config.ui.default_cities.len(), 6);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_empty_default_cities_is_valid() {
    let toml_str = r#"
[ui]
default_cities = []
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.validate().is_ok());
    assert!(config.ui.default_cities.is_empty());
}
