// ABOUTME: Gate 5, weekly cap projection
// ABOUTME: Compares tracked-this-week plus this session against the population's weekly caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Gate, GateContext, GateId, GateOutcome, ReasonCode, Violation};

/// Projected weekly contacts, sprint meters, and sprint sessions stay within caps
pub struct WeeklyProjectionGate;

impl Gate for WeeklyProjectionGate {
    fn id(&self) -> GateId {
        GateId::WeeklyProjection
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome {
        let weekly = ctx.weekly;
        let mut violations = Vec::new();

        if weekly.projected_total_plyo_contacts > u64::from(weekly.weekly_plyo_cap) {
            violations.push(
                Violation::new(ReasonCode::WeeklyPlyoCapExceeded)
                    .with_values(weekly.projected_total_plyo_contacts, weekly.weekly_plyo_cap),
            );
        }
        if weekly.projected_total_sprint_meters > f64::from(weekly.weekly_sprint_meters_cap) {
            violations.push(
                Violation::new(ReasonCode::WeeklySprintMetersCapExceeded).with_values(
                    weekly.projected_total_sprint_meters,
                    weekly.weekly_sprint_meters_cap,
                ),
            );
        }
        if weekly.projected_total_sprint_sessions > weekly.weekly_sprint_sessions_cap {
            violations.push(
                Violation::new(ReasonCode::SprintSessionCapExceeded).with_values(
                    weekly.projected_total_sprint_sessions,
                    weekly.weekly_sprint_sessions_cap,
                ),
            );
        }
        GateOutcome::from_violations(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseCatalog;
    use crate::gates::fixtures::{catalog, reasons, run, session};
    use epa_core::models::{
        Band, ClientContext, ENode, ExerciseInstance, ExerciseRecord, Population, Readiness,
        SeasonPhase, SessionType, WeeklyHistory,
    };

    // adult weekly caps: 300 contacts, 600 m, 3 sprint sessions
    fn adult_with(history: WeeklyHistory) -> ClientContext {
        ClientContext::new(
            "c1",
            Population::Adult,
            SeasonPhase::OffSeason,
            Readiness::Green,
            SessionType::Full,
        )
        .with_history(history)
    }

    fn reference() -> ExerciseCatalog {
        catalog(vec![
            ExerciseRecord::new("POGO_HOPS", "Pogo Hops", Band::Band1)
                .with_e_node(ENode::E1)
                .plyometric(1.0),
            ExerciseRecord::new("FLY_40", "Flying 40", Band::Band1).sprint(),
        ])
    }

    #[test]
    fn test_projected_sprint_meters_over_cap() {
        let client = adult_with(WeeklyHistory {
            tracked_sprint_meters: 450.0,
            ..WeeklyHistory::default()
        });
        let session = session(vec![ExerciseInstance::new("FLY_40", 1, 5).with_sprint(40.0, 95.0)]);

        let outcome = run(&WeeklyProjectionGate, &client, &reference(), &session);
        assert_eq!(reasons(&outcome), vec!["WEEKLY_SPRINT_METERS_CAP_EXCEEDED"]);
    }

    #[test]
    fn test_projected_contacts_at_and_over_cap() {
        let session = session(vec![ExerciseInstance::new("POGO_HOPS", 2, 10)]);

        let at_cap = adult_with(WeeklyHistory {
            tracked_plyo_contacts: 280,
            ..WeeklyHistory::default()
        });
        assert_eq!(
            run(&WeeklyProjectionGate, &at_cap, &reference(), &session),
            GateOutcome::Pass
        );

        let over = adult_with(WeeklyHistory {
            tracked_plyo_contacts: 290,
            ..WeeklyHistory::default()
        });
        assert_eq!(
            reasons(&run(&WeeklyProjectionGate, &over, &reference(), &session)),
            vec!["WEEKLY_PLYO_CAP_EXCEEDED"]
        );
    }

    #[test]
    fn test_sprint_session_count_over_cap() {
        let client = adult_with(WeeklyHistory {
            completed_sprint_sessions: 3,
            ..WeeklyHistory::default()
        });
        let session = session(vec![ExerciseInstance::new("FLY_40", 1, 2).with_sprint(40.0, 92.0)]);

        let outcome = run(&WeeklyProjectionGate, &client, &reference(), &session);
        assert_eq!(reasons(&outcome), vec!["SPRINT_SESSION_CAP_EXCEEDED"]);
    }
}
