// ABOUTME: Configuration management module for the architect's runtime settings
// ABOUTME: Environment-only configuration: catalog location, output style, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the EFL Program Architect
//!
//! There is no configuration file. Everything is read from environment
//! variables once at startup, and CLI flags override what the environment
//! says.
//!
//! - **Environment**: `EPA_CATALOG_PATH`, `EPA_OUTPUT_FORMAT`, `ENVIRONMENT`
//! - **Logging**: see [`crate::logging::LoggingConfig::from_env`]

/// Environment-driven configuration
pub mod environment;

pub use environment::{ConfigError, Environment, EpaConfig, OutputFormat};
