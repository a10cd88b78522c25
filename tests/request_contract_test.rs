// ABOUTME: Unit tests for the request contract: presence, value validation, and normalization
// ABOUTME: Validates contract-order reporting, defaults, and the derived session id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{base_request, item, with_practice_exposure, with_work_block};
use efl_program_architect::protocol::request::{invalid_fields, missing_fields};
use efl_program_architect::protocol::{
    derive_session_id, ContractViolation, EvaluationRequest, REQUIRED_FIELDS,
};
use epa_core::models::{BlockType, Population, SessionType};
use serde_json::{json, Map, Value};

fn adult_full() -> Value {
    base_request("Adult", "FULL_SESSION", "GREEN", "OFF_SEASON")
}

#[test]
fn test_empty_object_misses_every_required_field() {
    let missing = missing_fields(&Map::new());
    assert_eq!(missing, REQUIRED_FIELDS.to_vec());

    let violation = EvaluationRequest::from_json("{}").unwrap_err();
    assert_eq!(violation.reasons().len(), 12);
    assert_eq!(violation.reasons()[0], "client_id");
}

#[test]
fn test_missing_check_runs_before_value_checks() {
    let mut request = adult_full();
    request["population"] = json!("Martian");
    request.as_object_mut().unwrap().remove("sport");

    let violation = EvaluationRequest::from_value(&request).unwrap_err();
    assert_eq!(violation, ContractViolation::MissingFields(vec!["sport"]));
}

#[test]
fn test_negative_counter_is_invalid() {
    let mut request = adult_full();
    request["completed_sessions_this_week"] = json!(-1);
    request["session_type"] = json!("HALF_SESSION");

    let object = request.as_object().unwrap();
    assert_eq!(
        invalid_fields(object),
        vec!["completed_sessions_this_week", "session_type"]
    );
    assert_eq!(
        EvaluationRequest::from_value(&request).unwrap_err().reasons(),
        vec![
            "INVALID_FIELD_VALUE:completed_sessions_this_week",
            "INVALID_FIELD_VALUE:session_type"
        ]
    );
}

#[test]
fn test_zero_session_index_and_negative_exposure_are_invalid() {
    let mut request = with_practice_exposure(adult_full(), 10, -5.0);
    request["session_index"] = json!(0);

    let violation = EvaluationRequest::from_value(&request).unwrap_err();
    assert_eq!(
        violation,
        ContractViolation::InvalidFields(vec!["session_index", "practice_exposure"])
    );
}

#[test]
fn test_malformed_blocks_are_invalid() {
    let mut request = adult_full();
    request["blocks"] = json!([{ "items": [{ "exercise_id": "POGO_HOPS" }] }]);

    let violation = EvaluationRequest::from_value(&request).unwrap_err();
    assert_eq!(violation, ContractViolation::InvalidFields(vec!["blocks"]));
}

#[test]
fn test_valid_request_is_normalized() {
    let mut request = with_work_block(adult_full(), vec![item("POGO_HOPS", 2, 10)]);
    request["injury_flags"] = json!(["ankle_sprain", " ANKLE_SPRAIN ", ""]);
    request["session_type"] = json!("MICROSESSION");

    let parsed = EvaluationRequest::from_value(&request).unwrap();

    assert_eq!(parsed.client.population, Population::Adult);
    assert_eq!(parsed.client.session_type, SessionType::Micro);
    assert_eq!(
        parsed.client.injury_flags.iter().collect::<Vec<_>>(),
        vec!["ANKLE_SPRAIN"]
    );
    assert_eq!(parsed.client.session_index, 1);
    assert_eq!(parsed.practice_exposure.tracked_plyo_contacts_this_week, 0);

    let session = parsed.session.unwrap();
    let block = &session.blocks[0];
    assert_eq!(block.name, BlockType::Work);
    assert_eq!(block.items[0].rest_seconds, 60);
    assert_eq!(block.items[0].load, "Bodyweight");
}

#[test]
fn test_block_defaults_apply() {
    let mut request = adult_full();
    request["blocks"] = json!([{ "items": [{ "exercise_id": "POGO_HOPS", "sets": 1, "reps": 5 }] }]);

    let parsed = EvaluationRequest::from_value(&request).unwrap();
    let block = &parsed.session.unwrap().blocks[0];
    assert_eq!(block.name, BlockType::Work);
    assert_eq!(block.duration_minutes_target, 20);
}

#[test]
fn test_practice_exposure_feeds_weekly_history() {
    let request = with_practice_exposure(adult_full(), 75, 140.5);
    let parsed = EvaluationRequest::from_value(&request).unwrap();

    assert_eq!(parsed.client.history.tracked_plyo_contacts, 75);
    assert!((parsed.client.history.tracked_sprint_meters - 140.5).abs() < f64::EPSILON);
    assert_eq!(parsed.client.history.planned_sessions, 3);
}

#[test]
fn test_session_id_is_caller_supplied_or_derived() {
    let mut request = adult_full();
    request["session_index"] = json!(3);

    let derived = EvaluationRequest::from_value(&request).unwrap();
    assert_eq!(
        derived.session_id,
        derive_session_id("athlete-1", "2025-W14", 3)
    );
    assert_ne!(
        derived.session_id,
        derive_session_id("athlete-1", "2025-W14", 2)
    );

    request["session_id"] = json!("caller-session");
    let supplied = EvaluationRequest::from_value(&request).unwrap();
    assert_eq!(supplied.session_id, "caller-session");
}
