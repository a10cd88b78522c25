// ABOUTME: Response assembler mapping a gate-chain verdict to one of four tagged response shapes
// ABOUTME: Echoes normalized inputs, resolved limits, the gate audit trail, and on success the session plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Response Assembly
//!
//! | Outcome | Status |
//! |---|---|
//! | Input contract failed | `REJECTED_MISSING_FIELDS` |
//! | Catalog metadata gate failed | `QUARANTINED_REVIEW` |
//! | Any other gate failed | `REJECTED_ILLEGAL` |
//! | Every gate passed or skipped | `SUCCESS` |

use std::collections::BTreeSet;
use std::fmt;

use epa_core::models::{
    BlockType, Population, ProposedSession, Readiness, SeasonPhase, SessionType,
};
use epa_engine::{
    ChainVerdict, CnsCategory, ComputedLimits, Evaluation, ExerciseExposure, GateReport,
    SessionTotals, WeeklyAggregation,
};
use serde::Serialize;

use super::request::{ContractViolation, EvaluationRequest, PracticeExposure};

/// Discriminant of an [`EpaResponse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    /// Session is legal
    Success,
    /// Input contract failed
    RejectedMissingFields,
    /// A legality gate failed
    RejectedIllegal,
    /// Catalog metadata is incomplete
    QuarantinedReview,
}

impl ResponseStatus {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::RejectedMissingFields => "REJECTED_MISSING_FIELDS",
            Self::RejectedIllegal => "REJECTED_ILLEGAL",
            Self::QuarantinedReview => "QUARANTINED_REVIEW",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized request facts echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputsEcho {
    /// Client identifier
    pub client_id: String,
    /// Population
    pub population: Population,
    /// Sport
    pub sport: String,
    /// Season phase
    pub season_type: SeasonPhase,
    /// Readiness
    pub readiness_flag: Readiness,
    /// Injury flags, trimmed, uppercased, deduplicated
    pub injury_flags: BTreeSet<String>,
    /// Week identifier
    pub week_id: String,
    /// Sessions planned this week
    pub planned_sessions_this_week: u32,
    /// Sessions completed this week
    pub completed_sessions_this_week: u32,
    /// Sprint sessions planned this week
    pub planned_sprint_sessions_this_week: u32,
    /// Sprint sessions completed this week
    pub completed_sprint_sessions_this_week: u32,
    /// Session type
    pub session_type: SessionType,
    /// Position of this session within the week
    pub session_index: u32,
    /// Session identifier
    pub session_id: String,
    /// Tracked practice exposure
    pub practice_exposure: PracticeExposure,
}

impl From<&EvaluationRequest> for InputsEcho {
    fn from(request: &EvaluationRequest) -> Self {
        let client = &request.client;
        Self {
            client_id: client.client_id.clone(),
            population: client.population,
            sport: client.sport.clone(),
            season_type: client.season,
            readiness_flag: client.readiness,
            injury_flags: client.injury_flags.clone(),
            week_id: client.week_id.clone(),
            planned_sessions_this_week: client.history.planned_sessions,
            completed_sessions_this_week: client.history.completed_sessions,
            planned_sprint_sessions_this_week: client.history.planned_sprint_sessions,
            completed_sprint_sessions_this_week: client.history.completed_sprint_sessions,
            session_type: client.session_type,
            session_index: client.session_index,
            session_id: request.session_id.clone(),
            practice_exposure: request.practice_exposure,
        }
    }
}

/// One prescribed exercise with its derived exposure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedExercise {
    /// Catalog identifier
    pub exercise_id: String,
    /// Request override, else catalog name, else empty
    pub exercise_name: String,
    /// Sets
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Rest between sets
    pub rest_seconds: u32,
    /// Load prescription
    pub load: String,
    /// Target RPE
    pub rpe_target: Option<f64>,
    /// Coaching cues
    pub coaching_cues: Vec<String>,
    /// Sprint distance per rep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    /// Sprint intensity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_percent_vmax: Option<f64>,
    /// Plyometric contacts contributed
    pub total_contacts: u32,
    /// True-sprint meters contributed
    pub total_sprint_meters: f64,
}

impl From<&ExerciseExposure<'_>> for PlannedExercise {
    fn from(exposure: &ExerciseExposure<'_>) -> Self {
        let instance = exposure.instance;
        let exercise_name = instance
            .exercise_name
            .clone()
            .or_else(|| exposure.record.map(|r| r.exercise_name.clone()))
            .unwrap_or_default();

        Self {
            exercise_id: instance.exercise_id.clone(),
            exercise_name,
            sets: instance.sets,
            reps: instance.reps,
            rest_seconds: instance.rest_seconds,
            load: instance.load.clone(),
            rpe_target: instance.rpe_target,
            coaching_cues: instance.coaching_cues.clone(),
            distance_m: instance.distance_m,
            intensity_percent_vmax: instance.intensity_percent_vmax,
            total_contacts: exposure.contacts,
            total_sprint_meters: exposure.sprint_meters,
        }
    }
}

/// One block of the approved session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedBlock {
    /// Block role
    pub name: BlockType,
    /// Planned duration
    pub duration_minutes_target: u32,
    /// Exercises in prescription order
    pub items: Vec<PlannedExercise>,
}

/// Approved session with per-exercise and session totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPlan {
    /// Session identifier
    pub session_id: String,
    /// Client identifier
    pub client_id: String,
    /// Week identifier
    pub week_id: String,
    /// Position within the week
    pub session_index: u32,
    /// Session type
    pub session_type: SessionType,
    /// Blocks in order
    pub blocks: Vec<PlannedBlock>,
    /// Session plyometric contacts
    pub total_plyo_contacts: u32,
    /// Session true-sprint meters
    pub total_sprint_meters: f64,
    /// Sum of block durations
    pub total_duration_minutes: u32,
    /// CNS load category
    pub cns_category: CnsCategory,
}

impl SessionPlan {
    /// Combine the proposed session with its aggregated totals
    #[must_use]
    pub fn build(
        request: &EvaluationRequest,
        session: &ProposedSession,
        totals: &SessionTotals<'_>,
    ) -> Self {
        let blocks = session
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| PlannedBlock {
                name: block.name,
                duration_minutes_target: block.duration_minutes_target,
                items: totals
                    .exposures
                    .iter()
                    .filter(|e| e.block_index == index)
                    .map(PlannedExercise::from)
                    .collect(),
            })
            .collect();

        Self {
            session_id: request.session_id.clone(),
            client_id: request.client.client_id.clone(),
            week_id: request.client.week_id.clone(),
            session_index: request.client.session_index,
            session_type: request.client.session_type,
            blocks,
            total_plyo_contacts: totals.total_contacts,
            total_sprint_meters: totals.total_sprint_meters,
            total_duration_minutes: session.total_duration_minutes(),
            cns_category: totals.cns_category,
        }
    }
}

/// Body of a `SUCCESS` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovedResponse {
    /// Always empty
    pub reasons: Vec<String>,
    /// Normalized inputs
    pub inputs_echo: InputsEcho,
    /// Resolved limits
    pub computed_limits: ComputedLimits,
    /// Approved session; `None` for a limits-only query
    pub session_plan: Option<SessionPlan>,
    /// Every gate that ran
    pub validation_report: GateReport,
    /// Weekly load including this session
    pub weekly_aggregation: WeeklyAggregation,
}

/// Body of a `REJECTED_ILLEGAL` or `QUARANTINED_REVIEW` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedResponse {
    /// Violations of the failing gate, as `CODE` or `CODE:exercise_id`
    pub reasons: Vec<String>,
    /// Normalized inputs
    pub inputs_echo: InputsEcho,
    /// Resolved limits
    pub computed_limits: ComputedLimits,
    /// Gates up to and including the failure
    pub validation_report: GateReport,
}

/// Body of a `REJECTED_MISSING_FIELDS` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractRejection {
    /// Missing field names, or contract reason codes
    pub reasons: Vec<String>,
}

/// The single response produced for every request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EpaResponse {
    /// Legal session, or a limits-only query
    Success(Box<ApprovedResponse>),
    /// Input contract failed
    RejectedMissingFields(ContractRejection),
    /// A legality gate failed
    RejectedIllegal(Box<FailedResponse>),
    /// Catalog metadata gate failed
    QuarantinedReview(Box<FailedResponse>),
}

impl EpaResponse {
    /// Response status
    #[must_use]
    pub const fn status(&self) -> ResponseStatus {
        match self {
            Self::Success(_) => ResponseStatus::Success,
            Self::RejectedMissingFields(_) => ResponseStatus::RejectedMissingFields,
            Self::RejectedIllegal(_) => ResponseStatus::RejectedIllegal,
            Self::QuarantinedReview(_) => ResponseStatus::QuarantinedReview,
        }
    }

    /// Reason codes; empty on success
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        match self {
            Self::Success(body) => &body.reasons,
            Self::RejectedMissingFields(body) => &body.reasons,
            Self::RejectedIllegal(body) | Self::QuarantinedReview(body) => &body.reasons,
        }
    }

    /// Gate audit trail, absent when the request never reached the chain
    #[must_use]
    pub fn validation_report(&self) -> Option<&GateReport> {
        match self {
            Self::Success(body) => Some(&body.validation_report),
            Self::RejectedMissingFields(_) => None,
            Self::RejectedIllegal(body) | Self::QuarantinedReview(body) => {
                Some(&body.validation_report)
            }
        }
    }
}

/// Builds [`EpaResponse`] values
pub struct ResponseAssembler;

impl ResponseAssembler {
    /// Response for a request that failed the input contract
    #[must_use]
    pub fn contract_violation(violation: &ContractViolation) -> EpaResponse {
        EpaResponse::RejectedMissingFields(ContractRejection {
            reasons: violation.reasons(),
        })
    }

    /// Response for a request that ran through the engine
    #[must_use]
    pub fn assemble(request: &EvaluationRequest, evaluation: Evaluation<'_>) -> EpaResponse {
        let verdict = evaluation.verdict();
        let inputs_echo = InputsEcho::from(request);

        if verdict == ChainVerdict::Approved {
            let session_plan = request
                .session
                .as_ref()
                .zip(evaluation.totals.as_ref())
                .map(|(session, totals)| SessionPlan::build(request, session, totals));

            return EpaResponse::Success(Box::new(ApprovedResponse {
                reasons: Vec::new(),
                inputs_echo,
                computed_limits: evaluation.limits,
                session_plan,
                validation_report: evaluation.report,
                weekly_aggregation: evaluation.weekly,
            }));
        }

        let body = Box::new(FailedResponse {
            reasons: evaluation.report.reasons(),
            inputs_echo,
            computed_limits: evaluation.limits,
            validation_report: evaluation.report,
        });

        match verdict {
            ChainVerdict::Quarantined => EpaResponse::QuarantinedReview(body),
            ChainVerdict::Approved | ChainVerdict::Rejected(_) => EpaResponse::RejectedIllegal(body),
        }
    }
}
