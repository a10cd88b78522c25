// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity, environment variable names, request contract names, and CLI defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Engine thresholds and load-standard tables live in `epa_core::constants`;
//! this module only holds what the service layer needs to find its inputs and
//! name its outputs.

/// Service identity used by structured logging
pub mod service_names {
    /// CLI binary name, default `SERVICE_NAME`
    pub const EPA_CLI: &str = "epa-cli";
    /// Library crate target for log filtering
    pub const EPA_CRATE: &str = "efl_program_architect";
    /// Engine crate target for log filtering
    pub const ENGINE_CRATE: &str = "epa_engine";
}

/// Environment variable names
pub mod env_config {
    /// Path of the exercise catalog CSV
    pub const CATALOG_PATH: &str = "EPA_CATALOG_PATH";
    /// JSON output style (`pretty` | `compact`)
    pub const OUTPUT_FORMAT: &str = "EPA_OUTPUT_FORMAT";
    /// Log level or filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json` | `pretty` | `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Service name reported in logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Service version reported in logs
    pub const SERVICE_VERSION: &str = "SERVICE_VERSION";
    /// Include file and line in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids and names in log records
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Emit span open/close events
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
}

/// Default values
pub mod defaults {
    /// Catalog location relative to the working directory
    pub const CATALOG_RELATIVE_PATH: &str = "data/exercise_catalog.csv";
    /// Catalog directory under the platform data dir
    pub const DATA_DIR_NAME: &str = "epa";
    /// Catalog file name under the platform data dir
    pub const CATALOG_FILE_NAME: &str = "exercise_catalog.csv";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
    /// Default environment
    pub const ENVIRONMENT: &str = "development";
}

/// Reason codes the input contract emits before the gate chain runs
pub mod contract_reasons {
    /// Payload is not valid JSON
    pub const INVALID_JSON: &str = "INVALID_JSON";
    /// Payload is JSON but not an object
    pub const PAYLOAD_NOT_OBJECT: &str = "PAYLOAD_NOT_OBJECT";
    /// Prefix for present-but-unusable values, followed by `:<field>`
    pub const INVALID_FIELD_VALUE: &str = "INVALID_FIELD_VALUE";
}
