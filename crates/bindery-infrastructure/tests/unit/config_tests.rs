//! Configuration Tests

use std::env;
use std::fs;

use bindery_domain::error::Error;
use bindery_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, FactoryConfig, KernelConfig,
};
use bindery_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_REQUEST_DEPTH};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.kernel.max_request_depth, DEFAULT_MAX_REQUEST_DEPTH);
    assert!(!config.factory.fallback_to_unnamed);
}

#[test]
fn test_load_from_explicit_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindery.toml");
    fs::write(
        &path,
        r#"
[kernel]
max_request_depth = 12

[factory]
fallback_to_unnamed = true
"#,
    )
    .expect("Failed to write config");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("Should load config");

    assert_eq!(config.kernel.max_request_depth, 12);
    assert!(config.factory.fallback_to_unnamed);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL, "unset sections keep defaults");
}

#[test]
fn test_missing_explicit_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .expect("Should fall back to defaults");

    assert_eq!(config.kernel, KernelConfig::default());
}

#[test]
fn test_zero_depth_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindery.toml");
    fs::write(&path, "[kernel]\nmax_request_depth = 0\n").expect("Failed to write config");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "{err}");
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindery.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").expect("Failed to write config");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("Invalid log level"), "{err}");
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindery.toml");
    fs::write(&path, "[kernel]\nmax_request_depth = \"deep\"\n").expect("Failed to write config");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "{err}");
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_kernel(KernelConfig {
            max_request_depth: 5,
        })
        .with_factory(FactoryConfig {
            fallback_to_unnamed: true,
        })
        .build()
        .expect("Valid config");

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).expect("Should save config");
    let reloaded = loader.load().expect("Should reload config");

    assert_eq!(reloaded.kernel, config.kernel);
    assert_eq!(reloaded.factory, config.factory);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_builder_validates() {
    let result = ConfigBuilder::new()
        .with_kernel(KernelConfig {
            max_request_depth: 0,
        })
        .build();
    assert!(result.is_err());
}

#[test]
fn test_custom_env_prefix_is_used() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindery.toml");
    fs::write(&path, "[kernel]\nmax_request_depth = 12\n").expect("Failed to write config");

    let config = ConfigLoader::new()
        .with_env_prefix("BINDERY_UNSET_PREFIX")
        .with_config_path(&path)
        .load()
        .expect("Should load config");

    assert_eq!(config.kernel.max_request_depth, 12);
}

/// Run with: `cargo test -p bindery-infrastructure --test unit config -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix_overrides_file() {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("MYAPP__KERNEL__MAX_REQUEST_DEPTH", "33");
        env::set_var("BINDERY__KERNEL__MAX_REQUEST_DEPTH", "21");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindery.toml");
    fs::write(&path, "[kernel]\nmax_request_depth = 12\n").expect("Failed to write config");
    let config = ConfigLoader::new()
        .with_env_prefix("MYAPP")
        .with_config_path(&path)
        .load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("MYAPP__KERNEL__MAX_REQUEST_DEPTH");
        env::remove_var("BINDERY__KERNEL__MAX_REQUEST_DEPTH");
    }

    assert_eq!(config.expect("Should load config").kernel.max_request_depth, 33);
}

/// Run with: `cargo test -p bindery-infrastructure --test unit config -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_prefixed_env_vars_override_file() {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("BINDERY__KERNEL__MAX_REQUEST_DEPTH", "21");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bindery.toml");
    fs::write(&path, "[kernel]\nmax_request_depth = 12\n").expect("Failed to write config");
    let config = ConfigLoader::new().with_config_path(&path).load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("BINDERY__KERNEL__MAX_REQUEST_DEPTH");
    }

    assert_eq!(config.expect("Should load config").kernel.max_request_depth, 21);
}
