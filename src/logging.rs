// ABOUTME: Logging configuration and structured logging setup for the architect and its CLI
// ABOUTME: Configures log levels and formatters; all records go to stderr so stdout stays pure JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! stdout carries exactly one JSON response per evaluation, so every layer
//! installed here writes to stderr.

use std::env;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::constants::{defaults, env_config, service_names};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::EPA_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: defaults::ENVIRONMENT.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var(env_config::RUST_LOG).unwrap_or_else(|_| defaults::LOG_LEVEL.into());

        let format = env::var(env_config::LOG_FORMAT)
            .map_or(LogFormat::Pretty, |v| LogFormat::from_str_or_default(&v));

        let environment =
            env::var(env_config::ENVIRONMENT).unwrap_or_else(|_| defaults::ENVIRONMENT.into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var(env_config::LOG_INCLUDE_LOCATION).is_ok(),
            include_thread: is_production || env::var(env_config::LOG_INCLUDE_THREAD).is_ok(),
            include_spans: env::var(env_config::LOG_INCLUDE_SPANS).is_ok(),
            service_name: env::var(env_config::SERVICE_NAME)
                .unwrap_or_else(|_| service_names::EPA_CLI.into()),
            service_version: env::var(env_config::SERVICE_VERSION)
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Raise the level to debug, as `--verbose` does
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self
    }

    /// Filter applied to the subscriber
    ///
    /// `level` may be a bare level or a full directive list. A bare level is
    /// also pinned on the crate targets; a directive list is used verbatim.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let filter = EnvFilter::new(&self.level);
        match self.level.parse::<Level>() {
            Ok(level) => {
                let level = level.as_str().to_lowercase();
                filter
                    .add_directive(directive(&format!("{}={level}", service_names::EPA_CRATE)))
                    .add_directive(directive(&format!("{}={level}", service_names::ENGINE_CRATE)))
            }
            Err(_) => filter,
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "EFL Program Architect starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Configuration loaded: {config_summary}");
    }
}

fn directive(spec: &str) -> Directive {
    spec.parse().unwrap_or_else(|_| Level::INFO.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_verbose_raises_level() {
        let config = LoggingConfig::default().verbose();
        assert_eq!(config.level, "debug");
        assert_eq!(config.service_name, "epa-cli");
    }

    #[test]
    fn test_env_filter_names_crate_targets() {
        let filter = LoggingConfig::default().env_filter().to_string().to_lowercase();
        assert!(filter.contains("efl_program_architect=info"));
        assert!(filter.contains("epa_engine=info"));
    }
}
