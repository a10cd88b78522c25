// ABOUTME: Core types and load standards for the EFL Program Architect decision engine
// ABOUTME: Foundation crate with domain enums, catalog records, session shapes, and authorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # EPA Core
//!
//! Foundation crate providing the shared vocabulary of the EFL Program Architect.
//! This crate changes rarely: the engine and the service crate both build on it.
//!
//! ## Modules
//!
//! - **models**: Populations, season phases, readiness, catalog records, proposed sessions
//! - **constants**: Load Standards v2.1.2 tables keyed by strongly-typed enum tuples
//! - **permissions**: Default-deny intent authorization matrix for the routing layer
//! - **errors**: Parse errors for the wire representation of domain enums

/// Parse errors for domain enums
pub mod errors;

/// Domain models (populations, exercises, sessions, client context)
pub mod models;

/// Load standard tables and engine thresholds
pub mod constants;

/// Intent authorization matrix with explicit default deny
pub mod permissions;

pub use errors::ParseError;
