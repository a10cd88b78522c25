// ABOUTME: Main library entry point for the EFL Program Architect session-legality service
// ABOUTME: Wires the input contract, decision engine, and response assembler behind one orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # EFL Program Architect
//!
//! Decides whether a proposed training session is legal for one athlete
//! under the Load Standards. Each request runs through a fixed pipeline:
//!
//! 1. **Input contract** ([`protocol::request`]): required fields, enum
//!    values, counters, and the optional session plan are validated before
//!    any computation happens.
//! 2. **Decision engine** ([`epa_engine`]): limits are resolved, the
//!    session is aggregated, and seven gates run fail-fast.
//! 3. **Response assembly** ([`protocol::response`]): the verdict becomes
//!    one of `SUCCESS`, `REJECTED_MISSING_FIELDS`, `REJECTED_ILLEGAL`, or
//!    `QUARANTINED_REVIEW`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use efl_program_architect::config::EpaConfig;
//! use efl_program_architect::errors::AppResult;
//! use efl_program_architect::ProgramArchitect;
//!
//! fn main() -> AppResult<()> {
//!     let config = EpaConfig::from_env()?;
//!     let architect = ProgramArchitect::from_config(&config)?;
//!     let response = architect.process(r#"{"client_id": "c1"}"#);
//!     println!("{}", ProgramArchitect::render(&response, config.output_format)?);
//!     Ok(())
//! }
//! ```

/// Orchestrator running request, engine, and response assembly
pub mod architect;

/// CSV exercise catalog loading
pub mod catalog;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Request contract and response shapes
pub mod protocol;

/// Intent authorization matrix for the routing layer
pub mod permissions {
    pub use epa_core::permissions::{
        authorize, is_authorized, AuthorizationVerdict, DenialCause, Intent, Role, RoleSet,
    };
}

pub use architect::ProgramArchitect;
pub use errors::{AppError, AppResult, ErrorCode};
pub use protocol::{EpaResponse, EvaluationRequest, ResponseAssembler, ResponseStatus};
