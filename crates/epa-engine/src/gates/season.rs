// ABOUTME: Gate 2, season and fixture legality
// ABOUTME: Applies the season's outright E-node exclusions regardless of population ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use epa_core::constants::season_forbidden_e_nodes;

use super::{Gate, GateContext, GateId, GateOutcome, ReasonCode, Violation};

/// No exercise uses an E-node the current season forbids
pub struct SeasonLegalityGate;

impl Gate for SeasonLegalityGate {
    fn id(&self) -> GateId {
        GateId::SeasonLegality
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome {
        let season = ctx.client.season;
        let forbidden = season_forbidden_e_nodes(season);
        if forbidden.is_empty() {
            return GateOutcome::Pass;
        }

        let violations = ctx
            .totals
            .resolved()
            .filter_map(|(exposure, record)| {
                record
                    .e_node
                    .filter(|e| forbidden.contains(e))
                    .map(|e_node| {
                        Violation::for_exercise(ReasonCode::IllegalTier1ENode, exposure.exercise_id())
                            .with_values(e_node, season)
                    })
            })
            .collect();
        GateOutcome::from_violations(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseCatalog;
    use crate::gates::fixtures::{catalog, reasons, run, session};
    use epa_core::models::{
        Band, ClientContext, ENode, ExerciseInstance, ExerciseRecord, Population, ProposedSession,
        Readiness, SeasonPhase, SessionType,
    };

    fn adult_in(season: SeasonPhase) -> ClientContext {
        ClientContext::new("c1", Population::Adult, season, Readiness::Green, SessionType::Full)
    }

    fn depth_jump_session() -> (ExerciseCatalog, ProposedSession) {
        (
            catalog(vec![ExerciseRecord::new("DEPTH_JUMP", "Depth Jump", Band::Band3)
                .with_e_node(ENode::E4)
                .plyometric(1.0)]),
            session(vec![ExerciseInstance::new("DEPTH_JUMP", 2, 5)]),
        )
    }

    #[test]
    fn test_tier_one_forbids_high_e_nodes() {
        let (catalog, session) = depth_jump_session();
        let outcome = run(
            &SeasonLegalityGate,
            &adult_in(SeasonPhase::InSeasonTier1),
            &catalog,
            &session,
        );
        assert_eq!(reasons(&outcome), vec!["ILLEGAL_TIER_1_E_NODE:DEPTH_JUMP"]);
    }

    #[test]
    fn test_other_seasons_allow_high_e_nodes() {
        let (catalog, session) = depth_jump_session();
        for season in [SeasonPhase::PreSeason, SeasonPhase::InSeasonTier2] {
            assert_eq!(
                run(&SeasonLegalityGate, &adult_in(season), &catalog, &session),
                GateOutcome::Pass
            );
        }
    }
}
