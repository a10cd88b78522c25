// ABOUTME: Gate 1, population band and E-node ceilings plus contraindications
// ABOUTME: Ordinal comparison where strictly greater is a violation and equal is allowed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Gate, GateContext, GateId, GateOutcome, ReasonCode, Violation};

/// Band and E-node within the population ceiling; no contraindicated exercise
pub struct PopulationCeilingGate;

impl Gate for PopulationCeilingGate {
    fn id(&self) -> GateId {
        GateId::PopulationCeiling
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome {
        let caps = &ctx.limits.session_caps;
        let population = ctx.client.population;
        let mut violations = Vec::new();

        for (exposure, record) in ctx.totals.resolved() {
            let id = exposure.exercise_id();

            if record.band > caps.max_band {
                violations.push(
                    Violation::for_exercise(ReasonCode::BandExceeded, id)
                        .with_values(record.band, caps.max_band),
                );
            }
            if let Some(e_node) = record.e_node.filter(|e| *e > caps.max_e_node) {
                violations.push(
                    Violation::for_exercise(ReasonCode::ENodeExceeded, id)
                        .with_values(e_node, caps.max_e_node),
                );
            }
            if record.contraindicated_populations.contains(&population) {
                violations.push(
                    Violation::for_exercise(ReasonCode::ContraindicatedPopulation, id)
                        .with_observed(population),
                );
            }
            let flags: Vec<&str> = record
                .contraindicated_flags
                .intersection(&ctx.client.injury_flags)
                .map(String::as_str)
                .collect();
            if !flags.is_empty() {
                violations.push(
                    Violation::for_exercise(ReasonCode::ContraindicatedInjuryFlag, id)
                        .with_observed(flags.join(",")),
                );
            }
        }
        GateOutcome::from_violations(violations)
    }
}
