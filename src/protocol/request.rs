// ABOUTME: Input contract for evaluation requests: required fields, typed parsing, and normalization
// ABOUTME: Every contract failure becomes a ContractViolation before any limit or gate logic runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Contract
//!
//! Parsing runs in three passes, each terminal on failure:
//!
//! 1. The payload must be JSON and a JSON object.
//! 2. Every required field must be present and non-null. All missing names
//!    are reported, in contract order.
//! 3. Every present field must hold a usable value (known enum string,
//!    correct JSON type, non-negative counter). All invalid names are
//!    reported as `INVALID_FIELD_VALUE:<field>`.
//!
//! Only then is the object converted into a [`ClientContext`] and an optional
//! [`ProposedSession`].

use std::fmt;
use std::num::NonZeroU32;

use epa_core::models::{
    normalize_flag, ClientContext, ProposedSession, Population, Readiness, SeasonPhase,
    SessionType, WeeklyHistory,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

use crate::constants::contract_reasons;

/// Required request fields, in contract order
pub const REQUIRED_FIELDS: [&str; 12] = [
    "client_id",
    "population",
    "sport",
    "season_type",
    "readiness_flag",
    "injury_flags",
    "week_id",
    "planned_sessions_this_week",
    "completed_sessions_this_week",
    "planned_sprint_sessions_this_week",
    "completed_sprint_sessions_this_week",
    "session_type",
];

/// Session index used when the request does not carry one
pub const DEFAULT_SESSION_INDEX: u32 = 1;

/// Namespace for session ids derived from client, week, and index
pub const SESSION_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6d1f_0c1e_4a8b_5e2f_9c3d_7b1a_e0f4_2d85);

type FieldCheck = fn(&Value) -> bool;

/// Value checks for every field the contract knows, in reporting order
const FIELD_CHECKS: [(&str, FieldCheck); 16] = [
    ("client_id", accepts::<String>),
    ("population", accepts::<Population>),
    ("sport", accepts::<String>),
    ("season_type", accepts::<SeasonPhase>),
    ("readiness_flag", accepts::<Readiness>),
    ("injury_flags", accepts::<Vec<String>>),
    ("week_id", accepts::<String>),
    ("planned_sessions_this_week", accepts::<u32>),
    ("completed_sessions_this_week", accepts::<u32>),
    ("planned_sprint_sessions_this_week", accepts::<u32>),
    ("completed_sprint_sessions_this_week", accepts::<u32>),
    ("session_type", accepts::<SessionType>),
    ("session_index", accepts::<NonZeroU32>),
    ("session_id", accepts::<String>),
    ("practice_exposure", accepts_practice_exposure),
    ("blocks", accepts::<ProposedSession>),
];

/// Why a payload never reached the gate chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// Payload is not parseable JSON
    InvalidJson,
    /// Payload is JSON but not an object
    PayloadNotObject,
    /// Required fields absent or null, in contract order
    MissingFields(Vec<&'static str>),
    /// Fields present with unusable values
    InvalidFields(Vec<&'static str>),
}

impl ContractViolation {
    /// Reason codes reported to the caller
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Self::InvalidJson => vec![contract_reasons::INVALID_JSON.to_owned()],
            Self::PayloadNotObject => vec![contract_reasons::PAYLOAD_NOT_OBJECT.to_owned()],
            Self::MissingFields(fields) => fields.iter().map(|f| (*f).to_owned()).collect(),
            Self::InvalidFields(fields) => fields
                .iter()
                .map(|f| format!("{}:{f}", contract_reasons::INVALID_FIELD_VALUE))
                .collect(),
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => f.write_str("payload is not valid JSON"),
            Self::PayloadNotObject => f.write_str("payload is not a JSON object"),
            Self::MissingFields(fields) => write!(f, "missing fields: {}", fields.join(", ")),
            Self::InvalidFields(fields) => write!(f, "invalid fields: {}", fields.join(", ")),
        }
    }
}

/// Load already performed outside programmed sessions this week
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PracticeExposure {
    /// Plyometric contacts already tracked
    #[serde(default)]
    pub tracked_plyo_contacts_this_week: u32,
    /// True-sprint meters already tracked
    #[serde(default)]
    pub tracked_true_sprint_meters_this_week: f64,
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    client_id: String,
    population: Population,
    sport: String,
    season_type: SeasonPhase,
    readiness_flag: Readiness,
    injury_flags: Vec<String>,
    week_id: String,
    planned_sessions_this_week: u32,
    completed_sessions_this_week: u32,
    planned_sprint_sessions_this_week: u32,
    completed_sprint_sessions_this_week: u32,
    session_type: SessionType,
    #[serde(default)]
    session_index: Option<NonZeroU32>,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    practice_exposure: Option<PracticeExposure>,
    #[serde(default)]
    blocks: Option<ProposedSession>,
}

/// A request that satisfied the input contract
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    /// Normalized per-request facts
    pub client: ClientContext,
    /// Proposed session; `None` for a limits-only query
    pub session: Option<ProposedSession>,
    /// Caller-supplied or derived session identifier
    pub session_id: String,
    /// Tracked practice exposure as supplied
    pub practice_exposure: PracticeExposure,
}

impl EvaluationRequest {
    /// Parse a raw JSON payload
    ///
    /// # Errors
    ///
    /// Returns the first contract pass that failed
    pub fn from_json(payload: &str) -> Result<Self, ContractViolation> {
        let value: Value = serde_json::from_str(payload).map_err(|e| {
            warn!(error = %e, "request payload is not valid JSON");
            ContractViolation::InvalidJson
        })?;
        Self::from_value(&value)
    }

    /// Parse an already-decoded JSON payload
    ///
    /// # Errors
    ///
    /// Returns the first contract pass that failed
    pub fn from_value(value: &Value) -> Result<Self, ContractViolation> {
        let Some(object) = value.as_object() else {
            warn!("request payload is not a JSON object");
            return Err(ContractViolation::PayloadNotObject);
        };

        let missing = missing_fields(object);
        if !missing.is_empty() {
            warn!(missing = ?missing, "request rejected for missing fields");
            return Err(ContractViolation::MissingFields(missing));
        }

        let invalid = invalid_fields(object);
        if !invalid.is_empty() {
            warn!(invalid = ?invalid, "request rejected for invalid field values");
            return Err(ContractViolation::InvalidFields(invalid));
        }

        let raw = RawRequest::deserialize(value).map_err(|e| {
            warn!(error = %e, "request passed field checks but failed to decode");
            ContractViolation::InvalidFields(vec!["payload"])
        })?;
        Ok(Self::from_raw(raw))
    }
}

impl EvaluationRequest {
    fn from_raw(raw: RawRequest) -> Self {
        let session_index = raw
            .session_index
            .map_or(DEFAULT_SESSION_INDEX, NonZeroU32::get);
        let practice_exposure = raw.practice_exposure.unwrap_or_default();
        let session_id = raw
            .session_id
            .unwrap_or_else(|| derive_session_id(&raw.client_id, &raw.week_id, session_index));

        let history = WeeklyHistory {
            planned_sessions: raw.planned_sessions_this_week,
            completed_sessions: raw.completed_sessions_this_week,
            planned_sprint_sessions: raw.planned_sprint_sessions_this_week,
            completed_sprint_sessions: raw.completed_sprint_sessions_this_week,
            tracked_plyo_contacts: practice_exposure.tracked_plyo_contacts_this_week,
            tracked_sprint_meters: practice_exposure.tracked_true_sprint_meters_this_week,
        };

        let mut client = ClientContext::new(
            raw.client_id,
            raw.population,
            raw.season_type,
            raw.readiness_flag,
            raw.session_type,
        )
        .with_sport(raw.sport)
        .with_week(raw.week_id)
        .with_history(history);
        client.session_index = session_index;
        client.injury_flags = raw
            .injury_flags
            .iter()
            .map(|flag| normalize_flag(flag))
            .filter(|flag| !flag.is_empty())
            .collect();

        Self {
            client,
            session: raw.blocks,
            session_id,
            practice_exposure,
        }
    }
}

/// Deterministic session id for requests that do not carry one
#[must_use]
pub fn derive_session_id(client_id: &str, week_id: &str, session_index: u32) -> String {
    let name = format!("{client_id}/{week_id}/{session_index}");
    Uuid::new_v5(&SESSION_ID_NAMESPACE, name.as_bytes()).to_string()
}

/// Required fields that are absent or null, in contract order
#[must_use]
pub fn missing_fields(object: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !matches!(object.get(*field), Some(value) if !value.is_null()))
        .collect()
}

/// Present, non-null fields whose values the contract cannot use
#[must_use]
pub fn invalid_fields(object: &Map<String, Value>) -> Vec<&'static str> {
    FIELD_CHECKS
        .into_iter()
        .filter(|(field, check)| {
            object
                .get(*field)
                .is_some_and(|value| !value.is_null() && !check(value))
        })
        .map(|(field, _)| field)
        .collect()
}

fn accepts<T: DeserializeOwned>(value: &Value) -> bool {
    T::deserialize(value).is_ok()
}

fn accepts_practice_exposure(value: &Value) -> bool {
    PracticeExposure::deserialize(value).is_ok_and(|exposure| {
        exposure.tracked_true_sprint_meters_this_week.is_finite()
            && exposure.tracked_true_sprint_meters_this_week >= 0.0
    })
}
