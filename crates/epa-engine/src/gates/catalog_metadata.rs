// ABOUTME: Gate 0, exercise library metadata completeness
// ABOUTME: A failure here is a data-integrity problem and routes the response to quarantine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Gate, GateContext, GateId, GateOutcome, ReasonCode, Violation};

/// Every id resolves; plyometric records carry a rate; sprint drills carry an intensity
pub struct CatalogMetadataGate;

impl Gate for CatalogMetadataGate {
    fn id(&self) -> GateId {
        GateId::CatalogMetadata
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome {
        let mut violations = Vec::new();
        for exposure in &ctx.totals.exposures {
            let id = exposure.exercise_id();
            let Some(record) = exposure.record else {
                violations.push(Violation::for_exercise(ReasonCode::MissingExercise, id));
                continue;
            };
            if record.is_plyometric && record.effective_contact_rate().is_none() {
                violations.push(Violation::for_exercise(ReasonCode::MissingPlyoContacts, id));
            }
            if record.is_sprint && exposure.instance.intensity_percent_vmax.is_none() {
                violations.push(Violation::for_exercise(ReasonCode::MissingIntensityVmax, id));
            }
        }
        GateOutcome::from_violations(violations)
    }
}
