// ABOUTME: Gate 4, session-type rules and resolved session caps
// ABOUTME: Adult micro-sessions use their own fixed rules; everything else checks the resolved caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use epa_core::constants::load_standards::adult_microsession;
use epa_core::models::{Population, SessionType};

use super::{Gate, GateContext, GateId, GateOutcome, ReasonCode, Violation};

/// Session totals respect the session-type rules
pub struct SessionTypeGate;

impl SessionTypeGate {
    fn adult_microsession(ctx: &GateContext<'_>) -> Vec<Violation> {
        let totals = ctx.totals;
        let mut violations = Vec::new();

        if totals.total_contacts > adult_microsession::MAX_CONTACTS {
            violations.push(
                Violation::new(ReasonCode::AdultMsContactsExceeded)
                    .with_values(totals.total_contacts, adult_microsession::MAX_CONTACTS),
            );
        }
        for (exposure, record) in totals.resolved() {
            if let Some(e_node) = record
                .e_node
                .filter(|e| !adult_microsession::ALLOWED_E_NODES.contains(e))
            {
                violations.push(
                    Violation::for_exercise(ReasonCode::AdultMsENodeViolation, exposure.exercise_id())
                        .with_observed(e_node),
                );
            }
        }
        if !adult_microsession::TRUE_SPRINTING_ALLOWED && totals.has_true_sprinting() {
            violations.push(
                Violation::new(ReasonCode::AdultMsSprintViolation)
                    .with_values(totals.total_sprint_meters, 0),
            );
        }

        // readiness may lower the resolved cap below the fixed micro-session cap
        let cap = ctx.limits.session_caps.plyo_contacts_cap;
        if cap < adult_microsession::MAX_CONTACTS && totals.total_contacts > cap {
            violations.push(
                Violation::new(ReasonCode::SessionContactsCapExceeded)
                    .with_values(totals.total_contacts, cap),
            );
        }
        violations
    }

    fn resolved_caps(ctx: &GateContext<'_>) -> Vec<Violation> {
        let totals = ctx.totals;
        let caps = &ctx.limits.session_caps;
        let mut violations = Vec::new();

        if totals.total_contacts > caps.plyo_contacts_cap {
            violations.push(
                Violation::new(ReasonCode::SessionContactsCapExceeded)
                    .with_values(totals.total_contacts, caps.plyo_contacts_cap),
            );
        }
        if totals.total_sprint_meters > f64::from(caps.sprint_meters_cap) {
            violations.push(
                Violation::new(ReasonCode::SessionSprintMetersCapExceeded)
                    .with_values(totals.total_sprint_meters, caps.sprint_meters_cap),
            );
        }
        violations
    }
}

impl Gate for SessionTypeGate {
    fn id(&self) -> GateId {
        GateId::SessionTypeRules
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome {
        let violations = match (ctx.client.population, ctx.client.session_type) {
            (Population::Adult, SessionType::Micro) => Self::adult_microsession(ctx),
            _ => Self::resolved_caps(ctx),
        };
        GateOutcome::from_violations(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseCatalog;
    use crate::gates::fixtures::{catalog, reasons, run, session};
    use epa_core::models::{
        Band, ClientContext, ENode, ExerciseInstance, ExerciseRecord, Readiness, SeasonPhase,
    };

    fn client(
        population: Population,
        session_type: SessionType,
        readiness: Readiness,
    ) -> ClientContext {
        ClientContext::new("c1", population, SeasonPhase::OffSeason, readiness, session_type)
    }

    fn reference() -> ExerciseCatalog {
        catalog(vec![
            ExerciseRecord::new("POGO_HOPS", "Pogo Hops", Band::Band1)
                .with_e_node(ENode::E1)
                .plyometric(1.0),
            ExerciseRecord::new("REPEATED_BOUNDS", "Repeated Bounds", Band::Band3)
                .with_e_node(ENode::E3)
                .plyometric(1.0),
            ExerciseRecord::new("FLY_30", "Flying 30", Band::Band1).sprint(),
        ])
    }

    #[test]
    fn test_adult_micro_conditions_report_separately() {
        let catalog = reference();
        let session = session(vec![
            ExerciseInstance::new("REPEATED_BOUNDS", 4, 20),
            ExerciseInstance::new("FLY_30", 1, 2).with_sprint(30.0, 95.0),
        ]);
        let adult = client(Population::Adult, SessionType::Micro, Readiness::Green);

        let outcome = run(&SessionTypeGate, &adult, &catalog, &session);
        assert_eq!(
            reasons(&outcome),
            vec![
                "ADULT_MS_CONTACTS_EXCEEDED",
                "ADULT_MS_E_NODE_VIOLATION:REPEATED_BOUNDS",
                "ADULT_MS_SPRINT_VIOLATION",
            ]
        );
    }

    #[test]
    fn test_adult_micro_at_fixed_cap_passes() {
        let catalog = reference();
        let session = session(vec![ExerciseInstance::new("POGO_HOPS", 6, 10)]);
        let adult = client(Population::Adult, SessionType::Micro, Readiness::Green);

        assert_eq!(run(&SessionTypeGate, &adult, &catalog, &session), GateOutcome::Pass);
    }

    #[test]
    fn test_adult_micro_yellow_uses_scaled_cap() {
        // 60 * 75% = 45
        let catalog = reference();
        let session = session(vec![ExerciseInstance::new("POGO_HOPS", 5, 10)]);
        let adult = client(Population::Adult, SessionType::Micro, Readiness::Yellow);

        let outcome = run(&SessionTypeGate, &adult, &catalog, &session);
        assert_eq!(reasons(&outcome), vec!["SESSION_CONTACTS_CAP_EXCEEDED"]);
        assert!(matches!(
            &outcome,
            GateOutcome::Fail(v) if v[0].limit.as_deref() == Some("45")
        ));
    }

    #[test]
    fn test_resolved_caps_bound_contacts_and_sprint_meters() {
        let catalog = reference();
        let youth = client(Population::Youth13To17, SessionType::Full, Readiness::Green);

        let over = session(vec![
            ExerciseInstance::new("POGO_HOPS", 1, 101),
            ExerciseInstance::new("FLY_30", 1, 7).with_sprint(30.0, 95.0),
        ]);
        assert_eq!(
            reasons(&run(&SessionTypeGate, &youth, &catalog, &over)),
            vec!["SESSION_CONTACTS_CAP_EXCEEDED", "SESSION_SPRINT_METERS_CAP_EXCEEDED"]
        );

        let at_cap = session(vec![
            ExerciseInstance::new("POGO_HOPS", 1, 100),
            ExerciseInstance::new("FLY_30", 1, 5).with_sprint(40.0, 95.0),
        ]);
        assert_eq!(run(&SessionTypeGate, &youth, &catalog, &at_cap), GateOutcome::Pass);
    }
}
