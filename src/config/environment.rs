// ABOUTME: Environment configuration management for catalog location and output settings
// ABOUTME: Parses EPA_* variables into a typed EpaConfig with explicit invalid-value errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::{defaults, env_config};
use crate::logging::LoggingConfig;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used
    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// How response JSON is written to stdout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-space indented
    #[default]
    Pretty,
    /// Single line
    Compact,
}

impl OutputFormat {
    /// Parse an `EPA_OUTPUT_FORMAT` value
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for anything but `pretty` or `compact`
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(ConfigError::InvalidValue {
                var: env_config::OUTPUT_FORMAT,
                value: value.to_owned(),
            }),
        }
    }
}

/// Runtime configuration of the architect
#[derive(Debug, Clone)]
pub struct EpaConfig {
    /// Exercise catalog CSV
    pub catalog_path: PathBuf,
    /// Response JSON style
    pub output_format: OutputFormat,
    /// Deployment environment
    pub environment: Environment,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl EpaConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = match lookup(env_config::CATALOG_PATH) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: env_config::CATALOG_PATH,
                    value: path,
                });
            }
            Some(path) => PathBuf::from(path),
            None => default_catalog_path(),
        };

        let output_format = lookup(env_config::OUTPUT_FORMAT)
            .map(|v| OutputFormat::parse(&v))
            .transpose()?
            .unwrap_or_default();

        let environment = Environment::from_str_or_default(&env_var_or(
            &lookup,
            env_config::ENVIRONMENT,
            defaults::ENVIRONMENT,
        ));

        debug!(
            catalog_path = %catalog_path.display(),
            output_format = ?output_format,
            environment = %environment,
            "configuration loaded"
        );

        Ok(Self {
            catalog_path,
            output_format,
            environment,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Override the catalog path (CLI flag)
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Override the output format (CLI flag)
    #[must_use]
    pub const fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// Platform data-dir catalog when it exists, else the working-directory copy
#[must_use]
pub fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| {
            dir.join(defaults::DATA_DIR_NAME)
                .join(defaults::CATALOG_FILE_NAME)
        })
        .filter(|path| path.is_file())
        .unwrap_or_else(|| PathBuf::from(defaults::CATALOG_RELATIVE_PATH))
}

fn env_var_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_owned())
}
