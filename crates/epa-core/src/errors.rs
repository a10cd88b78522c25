// ABOUTME: Parse error type for wire names of core domain enums
// ABOUTME: Shared by FromStr implementations so CLI and loaders report uniform messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure to map a wire string onto a domain enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string is not a known name for this kind of value
    #[error("unknown {kind} value: '{value}'")]
    UnknownValue {
        /// Kind of value being parsed (e.g. "population")
        kind: &'static str,
        /// Offending input
        value: String,
    },
}

impl ParseError {
    /// Create an "unknown value" error
    #[must_use]
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}
