// ABOUTME: Wire protocol of the architect: the request contract and the four response shapes
// ABOUTME: Request parsing precedes the engine; response assembly follows it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Input contract and normalization
pub mod request;

/// Response shapes and the assembler
pub mod response;

pub use request::{
    derive_session_id, ContractViolation, EvaluationRequest, PracticeExposure,
    DEFAULT_SESSION_INDEX, REQUIRED_FIELDS,
};
pub use response::{
    ApprovedResponse, ContractRejection, EpaResponse, FailedResponse, InputsEcho, PlannedBlock,
    PlannedExercise, ResponseAssembler, ResponseStatus, SessionPlan,
};
