// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides the reference catalog, request builders, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `efl_program_architect`

use std::env;
use std::sync::{Arc, Once};

use efl_program_architect::catalog::read_catalog;
use efl_program_architect::ProgramArchitect;
use epa_engine::ExerciseCatalog;
use serde_json::{json, Value};
use tracing::Level;

/// Reference catalog shipped with the CLI
pub const REFERENCE_CATALOG_CSV: &str = include_str!("../data/exercise_catalog.csv");

/// Sample request shipped with the CLI
pub const SAMPLE_REQUEST_JSON: &str = include_str!("../data/sample_request.json");

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference catalog parsed from `data/exercise_catalog.csv`
pub fn reference_catalog() -> Arc<ExerciseCatalog> {
    read_catalog(REFERENCE_CATALOG_CSV.as_bytes())
        .unwrap()
        .into_shared()
}

/// Architect over the reference catalog
pub fn architect() -> ProgramArchitect {
    init_test_logging();
    ProgramArchitect::new(reference_catalog())
}

/// Request with every required field and no session
pub fn base_request(population: &str, session_type: &str, readiness: &str, season: &str) -> Value {
    json!({
        "client_id": "athlete-1",
        "population": population,
        "sport": "Soccer",
        "season_type": season,
        "readiness_flag": readiness,
        "injury_flags": [],
        "week_id": "2025-W14",
        "planned_sessions_this_week": 3,
        "completed_sessions_this_week": 1,
        "planned_sprint_sessions_this_week": 1,
        "completed_sprint_sessions_this_week": 0,
        "session_type": session_type,
    })
}

/// Prescription of `sets` x `reps` of a catalog exercise
pub fn item(exercise_id: &str, sets: u32, reps: u32) -> Value {
    json!({ "exercise_id": exercise_id, "sets": sets, "reps": reps })
}

/// Sprint prescription with distance and intensity
pub fn sprint_item(exercise_id: &str, reps: u32, distance_m: f64, intensity: f64) -> Value {
    json!({
        "exercise_id": exercise_id,
        "sets": 1,
        "reps": reps,
        "distance_m": distance_m,
        "intensity_percent_vmax": intensity,
    })
}

/// Attach a single WORK block holding `items`
pub fn with_work_block(mut request: Value, items: Vec<Value>) -> Value {
    request["blocks"] = json!([{ "name": "WORK", "duration_minutes_target": 30, "items": items }]);
    request
}

/// Set the tracked practice exposure
pub fn with_practice_exposure(mut request: Value, contacts: u32, sprint_meters: f64) -> Value {
    request["practice_exposure"] = json!({
        "tracked_plyo_contacts_this_week": contacts,
        "tracked_true_sprint_meters_this_week": sprint_meters,
    });
    request
}

/// Serialize a response into a JSON value
pub fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

/// Gate ids of the audit trail in a serialized response
pub fn gate_ids(response: &Value) -> Vec<String> {
    response["validation_report"]
        .as_array()
        .map(|gates| {
            gates
                .iter()
                .map(|g| g["gate_id"].as_str().unwrap_or_default().to_owned())
                .collect()
        })
        .unwrap_or_default()
}
