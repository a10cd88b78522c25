// ABOUTME: Unit tests for limit resolution across populations, session types, readiness, and season
// ABOUTME: Validates the Load Standards tables, readiness scaling, and E-node clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use epa_core::models::{Band, ENode, Node, Population, Readiness, SeasonPhase, SessionType};
use epa_engine::LimitResolver;
use serde_json::json;

const ALL_POPULATIONS: [Population; 7] = [
    Population::Youth8To12,
    Population::Youth13To17,
    Population::Adult,
    Population::R2pStage1,
    Population::R2pStage2,
    Population::R2pStage3,
    Population::R2pStage4,
];

#[test]
fn test_session_caps_follow_population_table() {
    let expected = [
        (Population::Youth8To12, 80, 56, 150, Band::Band2, Node::N2, ENode::E2),
        (Population::Youth13To17, 100, 70, 200, Band::Band3, Node::N3, ENode::E4),
        (Population::Adult, 120, 60, 250, Band::Band4, Node::N4, ENode::E4),
        (Population::R2pStage1, 0, 0, 0, Band::Band1, Node::N1, ENode::E0),
        (Population::R2pStage2, 40, 28, 0, Band::Band1, Node::N1, ENode::E1),
        (Population::R2pStage3, 60, 42, 100, Band::Band2, Node::N2, ENode::E2),
        (Population::R2pStage4, 80, 56, 150, Band::Band3, Node::N3, ENode::E3),
    ];

    for (population, full, micro, sprint, band, node, e_node) in expected {
        let resolve = |session_type| {
            LimitResolver::resolve(population, session_type, Readiness::Green, SeasonPhase::OffSeason)
        };
        let full_limits = resolve(SessionType::Full);
        let micro_limits = resolve(SessionType::Micro);

        assert_eq!(full_limits.session_caps.plyo_contacts_cap, full, "{population:?}");
        assert_eq!(micro_limits.session_caps.plyo_contacts_cap, micro, "{population:?}");
        assert_eq!(full_limits.session_caps.sprint_meters_cap, sprint);
        assert_eq!(full_limits.session_caps.max_band, band);
        assert_eq!(full_limits.session_caps.max_node, node);
        assert_eq!(full_limits.session_caps.max_e_node, e_node);
        assert_eq!(full_limits.readiness_e_node_ceiling, e_node);
    }
}

#[test]
fn test_weekly_caps_follow_population_table() {
    let expected = [
        (Population::Youth8To12, 200, 400, 3),
        (Population::Youth13To17, 240, 500, 3),
        (Population::Adult, 300, 600, 3),
        (Population::R2pStage1, 0, 0, 0),
        (Population::R2pStage2, 100, 0, 0),
        (Population::R2pStage3, 150, 200, 1),
        (Population::R2pStage4, 200, 400, 2),
    ];

    for (population, contacts, meters, sessions) in expected {
        let limits = LimitResolver::resolve(
            population,
            SessionType::Full,
            Readiness::Red,
            SeasonPhase::InSeasonTier2,
        );
        assert_eq!(limits.weekly_caps.plyo_contacts_per_week, contacts);
        assert_eq!(limits.weekly_caps.sprint_meters_per_week, meters);
        assert_eq!(limits.weekly_caps.max_sprint_sessions_per_week, sessions);
    }
}

#[test]
fn test_yellow_readiness_scales_down_and_clamps() {
    let limits = LimitResolver::resolve(
        Population::Youth13To17,
        SessionType::Micro,
        Readiness::Yellow,
        SeasonPhase::PreSeason,
    );
    assert_eq!(limits.session_caps.plyo_contacts_cap, 52);
    assert_eq!(limits.session_caps.sprint_meters_cap, 150);
    assert_eq!(limits.session_caps.max_e_node, ENode::E4);
    assert_eq!(limits.readiness_e_node_ceiling, ENode::E2);

    let adult = LimitResolver::resolve(
        Population::Adult,
        SessionType::Micro,
        Readiness::Yellow,
        SeasonPhase::OffSeason,
    );
    assert_eq!(adult.session_caps.plyo_contacts_cap, 45);
}

#[test]
fn test_yellow_clamp_never_raises_a_lower_population_ceiling() {
    let limits = LimitResolver::resolve(
        Population::R2pStage2,
        SessionType::Full,
        Readiness::Yellow,
        SeasonPhase::OffSeason,
    );
    assert_eq!(limits.readiness_e_node_ceiling, ENode::E1);
}

#[test]
fn test_red_readiness_zeroes_every_population() {
    for population in ALL_POPULATIONS {
        let limits = LimitResolver::resolve(
            population,
            SessionType::Full,
            Readiness::Red,
            SeasonPhase::OffSeason,
        );
        assert_eq!(limits.session_caps.plyo_contacts_cap, 0);
        assert_eq!(limits.session_caps.sprint_meters_cap, 0);
        assert_eq!(limits.readiness_e_node_ceiling, ENode::E0);
    }
}

#[test]
fn test_caps_never_increase_as_readiness_worsens() {
    for population in ALL_POPULATIONS {
        for session_type in [SessionType::Full, SessionType::Micro] {
            let caps: Vec<u32> = [Readiness::Green, Readiness::Yellow, Readiness::Red]
                .into_iter()
                .map(|readiness| {
                    LimitResolver::resolve(population, session_type, readiness, SeasonPhase::PostSeason)
                        .session_caps
                        .plyo_contacts_cap
                })
                .collect();
            assert!(caps.windows(2).all(|w| w[0] >= w[1]), "{population:?} {caps:?}");
        }
    }
}

#[test]
fn test_seasonal_range_depends_on_season() {
    let off = LimitResolver::resolve(
        Population::Adult,
        SessionType::Full,
        Readiness::Green,
        SeasonPhase::OffSeason,
    );
    let tier_1 = LimitResolver::resolve(
        Population::Adult,
        SessionType::Full,
        Readiness::Green,
        SeasonPhase::InSeasonTier1,
    );

    assert_eq!(off.seasonal_operating_range.plyo_max, 300);
    assert_eq!(tier_1.seasonal_operating_range.plyo_min, 80);
    assert_eq!(tier_1.seasonal_operating_range.sprint_max, 400);
}

#[test]
fn test_r2p_range_is_season_independent() {
    let ranges: Vec<_> = [SeasonPhase::OffSeason, SeasonPhase::InSeasonTier3]
        .into_iter()
        .map(|season| {
            LimitResolver::resolve(Population::R2pStage3, SessionType::Full, Readiness::Green, season)
                .seasonal_operating_range
        })
        .collect();
    assert_eq!(ranges[0], ranges[1]);
    assert_eq!(ranges[0].sprint_max, 200);
}

#[test]
fn test_computed_limits_wire_shape() {
    let limits = LimitResolver::resolve(
        Population::Youth8To12,
        SessionType::Full,
        Readiness::Green,
        SeasonPhase::InSeasonTier1,
    );
    let value = serde_json::to_value(&limits).unwrap();

    assert_eq!(value["population"], "Youth_8_12");
    assert_eq!(value["session_type"], "FULL_SESSION");
    assert_eq!(value["season_type"], "IN_SEASON_TIER_1");
    assert_eq!(value["readiness_flag"], "GREEN");
    assert_eq!(
        value["session_caps"],
        json!({
            "plyo_contacts_cap": 80,
            "sprint_meters_cap": 150,
            "max_band": "Band_2",
            "max_node": "N2",
            "max_e_node": "E2",
        })
    );
    assert!(value["weekly_caps"].is_object());
    assert!(value["seasonal_operating_range"].is_object());
}
