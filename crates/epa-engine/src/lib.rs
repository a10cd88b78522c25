// ABOUTME: Decision engine deciding whether a proposed athletic session is legal for an athlete
// ABOUTME: Limit resolver, session aggregator, seven-gate fail-fast chain, and weekly projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # EPA Engine
//!
//! Single-pass pipeline, each stage depending only on the ones before it:
//!
//! 1. [`limits::LimitResolver`] turns population, session type, readiness,
//!    and season into numeric ceilings.
//! 2. [`aggregator::SessionAggregator`] derives per-exercise and session
//!    totals from the proposed session and a read-only catalog.
//! 3. [`gates::GateChain`] runs seven ordered legality checks, stopping at
//!    the first failure.
//! 4. [`engine::DecisionEngine`] composes the above with the
//!    [`weekly::WeeklyAggregation`] snapshot.
//!
//! Everything is synchronous and allocation-light; the only shared state is
//! the immutable exercise catalog.

/// Per-exercise and per-session exposure totals
pub mod aggregator;
/// Read-only exercise catalog and its lookup trait
pub mod catalog;
/// End-to-end evaluation of one request
pub mod engine;
/// Fail-fast legality gates
pub mod gates;
/// Session, weekly, and seasonal ceilings
pub mod limits;
/// Weekly load projection snapshot
pub mod weekly;

pub use aggregator::{CnsCategory, ExerciseExposure, SessionAggregator, SessionTotals};
pub use catalog::{CatalogError, ExerciseCatalog, ExerciseLookup};
pub use engine::{DecisionEngine, Evaluation};
pub use gates::{
    ChainVerdict, Gate, GateChain, GateContext, GateId, GateOutcome, GateReport, GateResult,
    GateStatus, ReasonCode, SkipReason, Violation,
};
pub use limits::{ComputedLimits, LimitResolver, SessionCaps};
pub use weekly::WeeklyAggregation;
