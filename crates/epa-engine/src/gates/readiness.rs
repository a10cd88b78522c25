// ABOUTME: Gate 3, readiness modifiers checked against actual session totals
// ABOUTME: RED forbids any contacts or sprint meters; YELLOW caps each exercise's E-node
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use epa_core::models::Readiness;

use super::{Gate, GateContext, GateId, GateOutcome, ReasonCode, Violation};

/// Session totals and per-exercise tiers respect today's readiness
///
/// RED is re-checked here against the real totals even though the resolver
/// already zeroed the caps.
pub struct ReadinessGate;

impl Gate for ReadinessGate {
    fn id(&self) -> GateId {
        GateId::ReadinessModifiers
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome {
        let totals = ctx.totals;
        let mut violations = Vec::new();

        match ctx.client.readiness {
            Readiness::Green => {}
            Readiness::Red => {
                if totals.total_contacts > 0 {
                    violations.push(
                        Violation::new(ReasonCode::RedReadinessPlyoViolation)
                            .with_values(totals.total_contacts, 0),
                    );
                }
                if totals.has_true_sprinting() {
                    violations.push(
                        Violation::new(ReasonCode::RedReadinessSprintViolation)
                            .with_values(totals.total_sprint_meters, 0),
                    );
                }
            }
            Readiness::Yellow => {
                let ceiling = ctx.limits.readiness_e_node_ceiling;
                for (exposure, record) in totals.resolved() {
                    if let Some(e_node) = record.e_node.filter(|e| *e > ceiling) {
                        violations.push(
                            Violation::for_exercise(
                                ReasonCode::YellowReadinessTierViolation,
                                exposure.exercise_id(),
                            )
                            .with_values(e_node, ceiling),
                        );
                    }
                }
            }
        }
        GateOutcome::from_violations(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::fixtures::{catalog, reasons, run, session};
    use epa_core::models::{
        Band, ClientContext, ENode, ExerciseInstance, ExerciseRecord, Population, SeasonPhase,
        SessionType,
    };

    fn adult(readiness: Readiness) -> ClientContext {
        ClientContext::new(
            "c1",
            Population::Adult,
            SeasonPhase::OffSeason,
            readiness,
            SessionType::Full,
        )
    }

    fn records() -> Vec<ExerciseRecord> {
        vec![
            ExerciseRecord::new("SKATER_HOP", "Skater Hop", Band::Band1)
                .with_e_node(ENode::E2)
                .plyometric(1.0),
            ExerciseRecord::new("TUCK_JUMP", "Tuck Jump", Band::Band2)
                .with_e_node(ENode::E3)
                .plyometric(1.0),
            ExerciseRecord::new("FLY_30", "Flying 30", Band::Band1).sprint(),
        ]
    }

    #[test]
    fn test_red_rejects_contacts_and_sprinting() {
        let catalog = catalog(records());
        let session = session(vec![
            ExerciseInstance::new("SKATER_HOP", 1, 10),
            ExerciseInstance::new("FLY_30", 1, 2).with_sprint(30.0, 95.0),
        ]);

        let outcome = run(&ReadinessGate, &adult(Readiness::Red), &catalog, &session);
        assert_eq!(
            reasons(&outcome),
            vec!["RED_READINESS_PLYO_VIOLATION", "RED_READINESS_SPRINT_VIOLATION"]
        );
    }

    #[test]
    fn test_red_allows_submaximal_running() {
        let catalog = catalog(records());
        let session = session(vec![ExerciseInstance::new("FLY_30", 1, 2).with_sprint(30.0, 80.0)]);

        assert_eq!(
            run(&ReadinessGate, &adult(Readiness::Red), &catalog, &session),
            GateOutcome::Pass
        );
    }

    #[test]
    fn test_yellow_clamps_e_node_to_e2() {
        let catalog = catalog(records());
        let session = session(vec![
            ExerciseInstance::new("SKATER_HOP", 2, 8),
            ExerciseInstance::new("TUCK_JUMP", 2, 5),
        ]);

        let outcome = run(&ReadinessGate, &adult(Readiness::Yellow), &catalog, &session);
        assert_eq!(reasons(&outcome), vec!["YELLOW_READINESS_TIER_VIOLATION:TUCK_JUMP"]);
    }
}
