// ABOUTME: Unified error handling for operator faults: configuration, catalog loading, serialization
// ABOUTME: Domain outcomes (rejected, quarantined) are response values and never flow through AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fault the architect cannot turn into a response lands here: an
//! unreadable catalog, an invalid environment variable, a response that fails
//! to serialize. Error codes are grouped by numeric range and map onto CLI
//! exit codes the way a service maps them onto HTTP statuses.

use std::error::Error as StdError;
use std::fmt;
use std::io;

use csv::Position;
use epa_engine::CatalogError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::config::ConfigError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be used
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// Requested file or record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Exercise catalog could not be built
    #[serde(rename = "CATALOG_LOAD_FAILED")]
    CatalogLoadFailed = 4010,

    // Configuration (6000-6999)
    /// Configuration value is not valid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// File or stream I/O failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit code for this error
    ///
    /// Follows the BSD `sysexits` convention so shell callers can tell bad
    /// input from bad configuration.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            // EX_DATAERR
            Self::InvalidInput => 65,

            // EX_NOINPUT
            Self::ResourceNotFound | Self::CatalogLoadFailed => 66,

            // EX_SOFTWARE
            Self::InternalError | Self::SerializationError => 70,

            // EX_IOERR
            Self::StorageError => 74,

            // EX_CONFIG
            Self::ConfigInvalid => 78,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::CatalogLoadFailed => "The exercise catalog could not be loaded",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Client or session the failing request belonged to
    pub request_id: Option<String>,
    /// Resource ID if applicable (file path, exercise id)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Machine-readable error report written to stderr by the CLI
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Request the error belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Resource the error concerns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Additional context
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.context.request_id,
                resource_id: error.context.resource_id,
                details: error.context.details,
            },
        }
    }
}

/// Conversion from `anyhow::Error` to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Extract the root cause if available for better error chaining
        match error.source() {
            Some(source) => Self::new(ErrorCode::InternalError, error.to_string())
                .with_details(json!({ "source": source.to_string() })),
            None => Self::new(ErrorCode::InternalError, error.to_string()),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = match error.kind() {
            io::ErrorKind::NotFound => ErrorCode::ResourceNotFound,
            // non-UTF-8 payload read through read_to_string
            io::ErrorKind::InvalidData => ErrorCode::InvalidInput,
            _ => ErrorCode::StorageError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(Position::line);
        Self::new(ErrorCode::CatalogLoadFailed, error.to_string())
            .with_details(json!({ "line": line }))
            .with_source(error)
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let resource = match &error {
            CatalogError::DuplicateId { exercise_id }
            | CatalogError::InvalidContactRate { exercise_id, .. } => Some(exercise_id.clone()),
            CatalogError::EmptyId => None,
        };
        let app = Self::new(ErrorCode::CatalogLoadFailed, error.to_string());
        let app = match resource {
            Some(id) => app.with_resource_id(id),
            None => app,
        };
        app.with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let ConfigError::InvalidValue { var, .. } = &error;
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
            .with_resource_id(*var)
            .with_source(error)
    }
}
