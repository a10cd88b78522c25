// ABOUTME: Unit tests for environment configuration and logging configuration
// ABOUTME: Env-mutating tests run serially; lookup-driven tests run in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use efl_program_architect::config::{ConfigError, Environment, EpaConfig, OutputFormat};
use efl_program_architect::errors::{AppError, ErrorCode};
use efl_program_architect::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::parse(" Compact ").unwrap(), OutputFormat::Compact);
    assert_eq!(OutputFormat::parse("pretty").unwrap(), OutputFormat::Pretty);
    assert_eq!(
        OutputFormat::parse("yaml").unwrap_err(),
        ConfigError::InvalidValue {
            var: "EPA_OUTPUT_FORMAT",
            value: "yaml".to_owned()
        }
    );
}

#[test]
fn test_lookup_overrides_defaults() {
    let config = EpaConfig::from_lookup(lookup(&[
        ("EPA_CATALOG_PATH", "/srv/epa/catalog.csv"),
        ("EPA_OUTPUT_FORMAT", "compact"),
        ("ENVIRONMENT", "production"),
    ]))
    .unwrap();

    assert_eq!(config.catalog_path, PathBuf::from("/srv/epa/catalog.csv"));
    assert_eq!(config.output_format, OutputFormat::Compact);
    assert_eq!(config.environment, Environment::Production);
}

#[test]
fn test_empty_lookup_uses_defaults() {
    let config = EpaConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.output_format, OutputFormat::Pretty);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.catalog_path.ends_with("exercise_catalog.csv"));
}

#[test]
fn test_blank_catalog_path_is_rejected() {
    let error = EpaConfig::from_lookup(lookup(&[("EPA_CATALOG_PATH", "  ")])).unwrap_err();
    let app_error = AppError::from(error);

    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert_eq!(app_error.exit_code(), 78);
    assert_eq!(app_error.context.resource_id.as_deref(), Some("EPA_CATALOG_PATH"));
}

#[test]
fn test_cli_overrides_apply_after_environment() {
    let config = EpaConfig::from_lookup(lookup(&[("EPA_OUTPUT_FORMAT", "pretty")]))
        .unwrap()
        .with_catalog_path("fixtures/catalog.csv")
        .with_output_format(OutputFormat::Compact);

    assert_eq!(config.catalog_path, PathBuf::from("fixtures/catalog.csv"));
    assert_eq!(config.output_format, OutputFormat::Compact);
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var("EPA_OUTPUT_FORMAT", "compact");
    env::set_var("EPA_CATALOG_PATH", "/tmp/epa-test-catalog.csv");

    let config = EpaConfig::from_env();

    env::remove_var("EPA_OUTPUT_FORMAT");
    env::remove_var("EPA_CATALOG_PATH");

    let config = config.unwrap();
    assert_eq!(config.output_format, OutputFormat::Compact);
    assert_eq!(config.catalog_path, PathBuf::from("/tmp/epa-test-catalog.csv"));
}

#[test]
#[serial]
fn test_invalid_output_format_in_environment() {
    env::set_var("EPA_OUTPUT_FORMAT", "xml");
    let result = EpaConfig::from_env();
    env::remove_var("EPA_OUTPUT_FORMAT");

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { var: "EPA_OUTPUT_FORMAT", .. })
    ));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "warn");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "epa-batch");

    let config = LoggingConfig::from_env();

    for var in ["RUST_LOG", "LOG_FORMAT", "ENVIRONMENT", "SERVICE_NAME"] {
        env::remove_var(var);
    }

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "epa-batch");
}

#[test]
#[serial]
fn test_logging_defaults_without_environment() {
    for var in ["RUST_LOG", "LOG_FORMAT", "ENVIRONMENT", "SERVICE_NAME"] {
        env::remove_var(var);
    }

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "epa-cli");
}
