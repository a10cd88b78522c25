// ABOUTME: Core domain models for session legality evaluation
// ABOUTME: Re-exports athlete enums, exercise records, proposed sessions, and client context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Domain Models
//!
//! Plain data shared by the engine, the catalog loader, and the request
//! layer. Everything here is created per request (or once per process for
//! catalog records) and never mutated by the engine.

/// Client context and weekly history
pub mod context;
/// Exercise records and ordinal tiers
pub mod exercise;
/// Population, season, readiness, and session-type enums
pub mod population;
/// Proposed session blocks and exercise instances
pub mod session;

pub use context::{normalize_flag, ClientContext, WeeklyHistory};
pub use exercise::{Band, ENode, ExerciseRecord, Node};
pub use population::{Population, Readiness, SeasonPhase, SessionType};
pub use session::{BlockType, ExerciseInstance, ProposedSession, SessionBlock};
